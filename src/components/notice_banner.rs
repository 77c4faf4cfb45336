//! Notice Banner Component
//!
//! The current success/error notice with a close button.

use leptos::prelude::*;

use crate::context::use_catalog;
use crate::store::{CatalogStateStoreFields, NoticeKind};

#[component]
pub fn NoticeBanner() -> impl IntoView {
    let ctx = use_catalog();

    move || {
        ctx.store.notice().get().map(|notice| {
            let class = match notice.kind {
                NoticeKind::Success => "notice success-message",
                NoticeKind::Error => "notice error-message",
            };
            let id = notice.id;
            view! {
                <div class=class role="status">
                    <span>{notice.text}</span>
                    <button type="button" class="notice-close" on:click=move |_| ctx.dismiss_notice(id)>"×"</button>
                </div>
            }
        })
    }
}

/// Spinner shown while any request is in flight
#[component]
pub fn LoadingIndicator() -> impl IntoView {
    let ctx = use_catalog();

    view! {
        <div class=move || { if ctx.store.pending().get() > 0 { "loading active" } else { "loading" } }>
            <div class="spinner"></div>
            <p>"Loading..."</p>
        </div>
    }
}
