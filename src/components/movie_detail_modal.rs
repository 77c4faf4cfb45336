//! Movie Detail Modal Component
//!
//! Read-only view of one record.

use leptos::prelude::*;

use crate::cards::CardView;
use crate::context::use_catalog;
use crate::store::CatalogStateStoreFields;

#[component]
pub fn MovieDetailModal() -> impl IntoView {
    let ctx = use_catalog();
    let detail = move || ctx.store.viewing().with(|m| m.as_ref().map(CardView::detailed));

    view! {
        <div class=move || if detail().is_some() { "modal active" } else { "modal" }>
            <div class="modal-content">
                {move || detail().map(|card| view! {
                    <div class="modal-header">
                        <h2>{card.title.clone()}</h2>
                        <button type="button" class="close-btn" on:click=move |_| ctx.close_view()>"×"</button>
                    </div>
                    <div class="movie-full-details">
                        <DetailItem label="Name" value=card.title />
                        <DetailItem label="Category" value=card.category />
                        <DetailItem label="Year" value=card.year />
                        <DetailItem label="Director" value=card.director />
                        <DetailItem label="Duration" value=card.duration />
                        <div class="detail-item">
                            <div class="detail-label">"Rating"</div>
                            <div class="detail-value rating-detail">
                                <span class="stars large">{card.stars}</span>
                                <span class="rating-text">{card.rating}</span>
                            </div>
                        </div>
                    </div>
                })}
            </div>
        </div>
    }
}

#[component]
fn DetailItem(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="detail-item">
            <div class="detail-label">{label}</div>
            <div class="detail-value">{value}</div>
        </div>
    }
}
