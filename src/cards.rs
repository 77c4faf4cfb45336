//! Card Projection
//!
//! Turns the loaded list into display-ready rows for the grid and the
//! detail dialog. Components only render what these functions return.

use crate::models::Movie;
use crate::rating::{rating_label, Stars};

pub const PLACEHOLDER: &str = "N/A";
const UNTITLED: &str = "Untitled";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CardView {
    pub id: u32,
    pub title: String,
    pub category: String,
    pub year: String,
    pub director: String,
    pub duration: String,
    pub stars: String,
    pub rating: String,
}

impl CardView {
    pub fn from_movie(movie: &Movie) -> Self {
        Self::build(movie, "min")
    }

    /// Long form used by the detail dialog
    pub fn detailed(movie: &Movie) -> Self {
        Self::build(movie, "minutes")
    }

    fn build(movie: &Movie, minutes: &str) -> Self {
        let rating = movie.rating_or_zero();
        Self {
            id: movie.id,
            title: non_empty(Some(movie.name.as_str())).unwrap_or(UNTITLED).to_string(),
            category: text_or_placeholder(movie.category.as_deref()),
            year: movie.year.map(|y| y.to_string()).unwrap_or_else(|| PLACEHOLDER.to_string()),
            director: text_or_placeholder(movie.director.as_deref()),
            duration: match movie.duration {
                Some(d) if d > 0 => format!("{} {}", d, minutes),
                _ => PLACEHOLDER.to_string(),
            },
            stars: Stars::from_rating(rating).glyphs(),
            rating: rating_label(rating),
        }
    }
}

/// What the grid shows: cards, or the empty-state placeholder
#[derive(Debug, Clone, PartialEq)]
pub struct GridView {
    pub cards: Vec<CardView>,
    pub show_placeholder: bool,
}

/// Cards in server order, never re-sorted
pub fn grid_view(movies: &[Movie]) -> GridView {
    GridView {
        cards: movies.iter().map(CardView::from_movie).collect(),
        show_placeholder: movies.is_empty(),
    }
}

fn non_empty(text: Option<&str>) -> Option<&str> {
    text.filter(|t| !t.trim().is_empty())
}

fn text_or_placeholder(text: Option<&str>) -> String {
    non_empty(text).unwrap_or(PLACEHOLDER).to_string()
}
