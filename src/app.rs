//! Movie Catalog App
//!
//! Root component: owns the store, loads the list on mount and lays out the page.

use leptos::ev;
use leptos::prelude::*;

use crate::components::{LoadingIndicator, MovieDetailModal, MovieFormModal, MovieGrid, NoticeBanner, StatsBar};
use crate::config::CatalogConfig;
use crate::context::CatalogContext;
use crate::store::CatalogStateStoreFields;

#[component]
pub fn App() -> impl IntoView {
    let ctx = CatalogContext::new(CatalogConfig::load());
    provide_context(ctx);

    // Initial load
    Effect::new(move |_| ctx.reload());

    // Escape closes whichever dialog is open
    let _ = window_event_listener(ev::keydown, move |ev| {
        if ev.key() != "Escape" {
            return;
        }
        if ctx.store.viewing().get_untracked().is_some() {
            ctx.close_view();
        } else if ctx.store.form_mode().get_untracked().is_open() {
            ctx.cancel_form();
        }
    });

    view! {
        <div class="container">
            <header class="header">
                <h1>"🎬 Movie Catalog"</h1>
                <StatsBar />
            </header>

            <div class="toolbar">
                <button class="btn btn-primary" on:click=move |_| ctx.open_create()>"+ Add Movie"</button>
                <button class="btn btn-secondary" on:click=move |_| ctx.reload()>"↻ Reload"</button>
            </div>

            <NoticeBanner />
            <LoadingIndicator />
            <MovieGrid />
        </div>

        <MovieFormModal />
        <MovieDetailModal />
    }
}
