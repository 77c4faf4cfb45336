//! Movie Form
//!
//! Raw text of the edit/create dialog and its conversion into a request body.

use crate::models::{Movie, MoviePayload};

/// Field values exactly as typed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MovieDraft {
    pub name: String,
    pub category: String,
    pub year: String,
    pub director: String,
    pub duration: String,
    pub rating: String,
}

impl MovieDraft {
    pub fn from_movie(movie: &Movie) -> Self {
        Self {
            name: movie.name.clone(),
            category: movie.category.clone().unwrap_or_default(),
            year: movie.year.map(|y| y.to_string()).unwrap_or_default(),
            director: movie.director.clone().unwrap_or_default(),
            duration: movie.duration.map(|d| d.to_string()).unwrap_or_default(),
            rating: movie.rating.map(|r| r.to_string()).unwrap_or_default(),
        }
    }

    /// Invalid or blank numbers become `null`, except rating which becomes 0
    pub fn to_payload(&self) -> MoviePayload {
        MoviePayload {
            name: self.name.trim().to_string(),
            category: self.category.trim().to_string(),
            year: parse_int(&self.year),
            director: self.director.trim().to_string(),
            duration: parse_int(&self.duration),
            rating: parse_float(&self.rating).unwrap_or(0.0),
        }
    }

    pub fn set(&mut self, field: DraftField, value: String) {
        match field {
            DraftField::Name => self.name = value,
            DraftField::Category => self.category = value,
            DraftField::Year => self.year = value,
            DraftField::Director => self.director = value,
            DraftField::Duration => self.duration = value,
            DraftField::Rating => self.rating = value,
        }
    }

    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Name => &self.name,
            DraftField::Category => &self.category,
            DraftField::Year => &self.year,
            DraftField::Director => &self.director,
            DraftField::Duration => &self.duration,
            DraftField::Rating => &self.rating,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Name,
    Category,
    Year,
    Director,
    Duration,
    Rating,
}

/// Whole part of any finite number, so "12.5" gives 12
fn parse_int(raw: &str) -> Option<i32> {
    parse_float(raw).map(|v| v.trunc() as i32)
}

fn parse_float(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_blank_numbers() {
        let draft = MovieDraft {
            name: "Heat".to_string(),
            category: "Crime".to_string(),
            ..Default::default()
        };
        let body = serde_json::to_value(draft.to_payload()).unwrap();

        assert_eq!(
            body,
            json!({
                "name": "Heat",
                "category": "Crime",
                "year": null,
                "director": "",
                "duration": null,
                "rating": 0.0
            })
        );
    }

    #[test]
    fn test_invalid_numbers() {
        let draft = MovieDraft {
            year: "nineteen".to_string(),
            duration: "inf".to_string(),
            rating: "great".to_string(),
            ..Default::default()
        };
        let payload = draft.to_payload();
        assert_eq!(payload.year, None);
        assert_eq!(payload.duration, None);
        assert_eq!(payload.rating, 0.0);
    }

    #[test]
    fn test_fractional_whole_numbers_truncate() {
        let draft = MovieDraft {
            year: "1999.9".to_string(),
            duration: "12.5".to_string(),
            ..Default::default()
        };
        let payload = draft.to_payload();
        assert_eq!(payload.year, Some(1999));
        assert_eq!(payload.duration, Some(12));
    }

    #[test]
    fn test_valid_numbers() {
        let draft = MovieDraft {
            year: " 1995 ".to_string(),
            duration: "170".to_string(),
            rating: "8.3".to_string(),
            ..Default::default()
        };
        let payload = draft.to_payload();
        assert_eq!(payload.year, Some(1995));
        assert_eq!(payload.duration, Some(170));
        assert_eq!(payload.rating, 8.3);
    }

    #[test]
    fn test_draft_from_movie() {
        let movie = Movie {
            id: 2,
            name: "Alien".to_string(),
            category: Some("Sci-Fi".to_string()),
            year: Some(1979),
            director: None,
            duration: None,
            rating: Some(8.5),
        };
        let draft = MovieDraft::from_movie(&movie);

        assert_eq!(draft.get(DraftField::Year), "1979");
        assert_eq!(draft.get(DraftField::Director), "");
        assert_eq!(draft.get(DraftField::Duration), "");
        assert_eq!(draft.get(DraftField::Rating), "8.5");
    }

    #[test]
    fn test_set_field_leaves_others() {
        let mut draft = MovieDraft { rating: "7.".to_string(), ..Default::default() };
        draft.set(DraftField::Director, "Mann".to_string());

        assert_eq!(draft.get(DraftField::Director), "Mann");
        assert_eq!(draft.get(DraftField::Rating), "7.");
        assert_eq!(draft.get(DraftField::Name), "");
    }
}
