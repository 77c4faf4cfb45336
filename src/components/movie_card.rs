//! Movie Card Component
//!
//! One grid entry with view/edit/delete actions.

use leptos::prelude::*;

use crate::cards::CardView;
use crate::components::DeleteConfirmButton;
use crate::context::use_catalog;

#[component]
pub fn MovieCard(card: CardView) -> impl IntoView {
    let ctx = use_catalog();
    let id = card.id;

    view! {
        <div class="movie-card">
            <div class="movie-poster">"🎭"</div>
            <div class="movie-info">
                <h3 class="movie-title">{card.title.clone()}</h3>
                <div class="movie-details">
                    <div class="movie-detail"><strong>"Category: "</strong>{card.category}</div>
                    <div class="movie-detail"><strong>"Year: "</strong>{card.year}</div>
                    <div class="movie-detail"><strong>"Director: "</strong>{card.director}</div>
                    <div class="movie-detail"><strong>"Duration: "</strong>{card.duration}</div>
                </div>
                <div class="movie-rating">
                    <span class="stars">{card.stars}</span>
                    <span class="rating-text">{card.rating}</span>
                </div>
                <div class="movie-actions">
                    <button class="btn btn-view btn-small" on:click=move |_| ctx.open_view(id)>"View"</button>
                    <button class="btn btn-edit btn-small" on:click=move |_| ctx.open_edit(id)>"Edit"</button>
                    <DeleteConfirmButton
                        movie_title=card.title.clone()
                        on_confirm=move |_| ctx.delete(id)
                    />
                </div>
            </div>
        </div>
    }
}
