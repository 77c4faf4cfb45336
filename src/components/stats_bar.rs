//! Stats Bar Component

use leptos::prelude::*;

use crate::context::use_catalog;
use crate::store::CatalogStateStoreFields;
use crate::stats::compute_stats;

#[component]
pub fn StatsBar() -> impl IntoView {
    let ctx = use_catalog();
    let stats = Memo::new(move |_| ctx.store.movies().with(|movies| compute_stats(movies)));

    view! {
        <div class="stats">
            <div class="stat-card">
                <span class="stat-number">{move || stats.get().total}</span>
                <span class="stat-label">"Movies"</span>
            </div>
            <div class="stat-card">
                <span class="stat-number">{move || stats.get().average_rating}</span>
                <span class="stat-label">"Average rating"</span>
            </div>
            <div class="stat-card">
                <span class="stat-number">{move || stats.get().genres}</span>
                <span class="stat-label">"Genres"</span>
            </div>
        </div>
    }
}
