//! Movie Grid Component
//!
//! Cards for the loaded list, or the empty-state placeholder.

use leptos::prelude::*;

use crate::cards::grid_view;
use crate::components::MovieCard;
use crate::context::use_catalog;
use crate::store::CatalogStateStoreFields;

#[component]
pub fn MovieGrid() -> impl IntoView {
    let ctx = use_catalog();
    let grid = Memo::new(move |_| ctx.store.movies().with(|movies| grid_view(movies)));

    view! {
        <div class="movies-grid">
            <Show
                when=move || !grid.with(|g| g.show_placeholder)
                fallback=|| view! {
                    <div class="no-movies">
                        <h3>"No movies yet"</h3>
                        <p>"Add the first one with the button above."</p>
                    </div>
                }
            >
                // Whole card as key so edited records re-render
                <For
                    each=move || grid.get().cards
                    key=|card| card.clone()
                    children=move |card| view! { <MovieCard card=card /> }
                />
            </Show>
        </div>
    }
}
