//! UI Components
//!
//! Leptos components for the catalog page.

mod delete_confirm_button;
mod movie_card;
mod movie_detail_modal;
mod movie_form_modal;
mod movie_grid;
mod notice_banner;
mod stats_bar;

pub use delete_confirm_button::DeleteConfirmButton;
pub use movie_card::MovieCard;
pub use movie_detail_modal::MovieDetailModal;
pub use movie_form_modal::MovieFormModal;
pub use movie_grid::MovieGrid;
pub use notice_banner::{LoadingIndicator, NoticeBanner};
pub use stats_bar::StatsBar;
