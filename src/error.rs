//! Client Errors
//!
//! Every failure the catalog can surface to the user.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClientError {
    /// The request never completed (fetch rejected, no window, bad URL)
    #[error("network error: {0}")]
    Network(String),

    /// The backend answered with a non-success status
    #[error("{}", status_message(.status, .body))]
    Status { status: u16, body: String },

    /// The response body did not match the expected shape
    #[error("unexpected response: {0}")]
    Decode(String),

    /// Lookup in the loaded list found nothing
    #[error("movie #{id} not found")]
    NotFound { id: u32 },
}

fn status_message(status: &u16, body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        format!("HTTP {}", status)
    } else {
        format!("HTTP {}: {}", status, body)
    }
}

impl ClientError {
    pub fn network(err: JsValue) -> Self {
        ClientError::Network(js_message(&err))
    }

    pub fn decode(err: impl std::fmt::Display) -> Self {
        ClientError::Decode(err.to_string())
    }

    /// Body was not valid JSON
    pub fn decode_js(err: JsValue) -> Self {
        ClientError::Decode(js_message(&err))
    }

    /// True for the failures that come from the transport or the backend
    pub fn is_network_or_status(&self) -> bool {
        !matches!(self, ClientError::NotFound { .. })
    }
}

fn js_message(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message_folds_body() {
        let err = ClientError::Status { status: 404, body: "{\"detail\":\"Movie not found\"}".to_string() };
        assert_eq!(err.to_string(), "HTTP 404: {\"detail\":\"Movie not found\"}");
    }

    #[test]
    fn test_status_message_without_body() {
        let err = ClientError::Status { status: 500, body: "  ".to_string() };
        assert_eq!(err.to_string(), "HTTP 500");
    }

    #[test]
    fn test_error_kinds() {
        assert!(ClientError::Network("offline".into()).is_network_or_status());
        assert!(ClientError::Decode("missing field".into()).is_network_or_status());
        assert!(!ClientError::NotFound { id: 4 }.is_network_or_status());
        assert_eq!(ClientError::NotFound { id: 4 }.to_string(), "movie #4 not found");
    }
}
