//! Catalog Statistics
//!
//! Summary numbers shown above the grid.

use std::collections::HashSet;

use crate::models::Movie;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogStats {
    pub total: usize,
    /// Mean rating with one decimal, "0.0" when empty
    pub average_rating: String,
    /// Distinct non-empty categories
    pub genres: usize,
}

pub fn compute_stats(movies: &[Movie]) -> CatalogStats {
    let total = movies.len();
    let average_rating = if total == 0 {
        "0.0".to_string()
    } else {
        let sum: f64 = movies.iter().map(Movie::rating_or_zero).sum();
        // ties round up, e.g. 8.25 -> 8.3
        let average = sum / total as f64;
        format!("{:.1}", (average * 10.0).round() / 10.0)
    };
    let genres = movies
        .iter()
        .filter_map(|m| m.category.as_deref())
        .filter(|c| !c.is_empty())
        .collect::<HashSet<_>>()
        .len();

    CatalogStats { total, average_rating, genres }
}
