//! Frontend Models
//!
//! Data structures matching the catalog backend.

use serde::{Deserialize, Serialize};

/// Movie record as returned by the backend.
///
/// Accepts both the English field names and the Spanish ones used by the
/// older API (`nombre`, `categoria`, `año`, ...).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Movie {
    pub id: u32,
    #[serde(default, alias = "nombre")]
    pub name: String,
    #[serde(default, alias = "categoria")]
    pub category: Option<String>,
    #[serde(default, alias = "año", alias = "anio")]
    pub year: Option<i32>,
    #[serde(default)]
    pub director: Option<String>,
    #[serde(default, alias = "duracion")]
    pub duration: Option<i32>,
    #[serde(default, alias = "calificacion")]
    pub rating: Option<f64>,
}

impl Movie {
    /// Rating with missing treated as 0
    pub fn rating_or_zero(&self) -> f64 {
        self.rating.unwrap_or(0.0)
    }
}

/// Request body for create and update
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoviePayload {
    pub name: String,
    pub category: String,
    pub year: Option<i32>,
    pub director: String,
    pub duration: Option<i32>,
    pub rating: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_english_fields() {
        let movie: Movie = serde_json::from_value(json!({
            "id": 3,
            "name": "Alien",
            "category": "Sci-Fi",
            "year": 1979,
            "director": "Ridley Scott",
            "duration": 117,
            "rating": 8.5
        }))
        .unwrap();

        assert_eq!(movie.id, 3);
        assert_eq!(movie.name, "Alien");
        assert_eq!(movie.category.as_deref(), Some("Sci-Fi"));
        assert_eq!(movie.year, Some(1979));
        assert_eq!(movie.duration, Some(117));
        assert_eq!(movie.rating, Some(8.5));
    }

    #[test]
    fn test_deserialize_spanish_fields() {
        let movie: Movie = serde_json::from_value(json!({
            "id": 7,
            "nombre": "Roma",
            "categoria": "Drama",
            "año": 2018,
            "director": "Alfonso Cuarón",
            "duracion": 135,
            "calificacion": 9
        }))
        .unwrap();

        assert_eq!(movie.name, "Roma");
        assert_eq!(movie.category.as_deref(), Some("Drama"));
        assert_eq!(movie.year, Some(2018));
        assert_eq!(movie.duration, Some(135));
        assert_eq!(movie.rating, Some(9.0));
    }

    #[test]
    fn test_missing_optional_fields() {
        let movie: Movie = serde_json::from_value(json!({ "id": 1, "name": "Untitled", "year": null })).unwrap();

        assert_eq!(movie.category, None);
        assert_eq!(movie.year, None);
        assert_eq!(movie.rating_or_zero(), 0.0);
    }

    #[test]
    fn test_payload_keeps_null_numbers() {
        let payload = MoviePayload {
            name: "Heat".to_string(),
            category: "Crime".to_string(),
            year: None,
            director: String::new(),
            duration: None,
            rating: 0.0,
        };
        let value = serde_json::to_value(&payload).unwrap();

        assert_eq!(value["year"], serde_json::Value::Null);
        assert_eq!(value["duration"], serde_json::Value::Null);
        assert_eq!(value["rating"], json!(0.0));
    }
}
