//! Backend API Wrappers
//!
//! Frontend bindings to the catalog REST endpoints, organized by resource.

mod movie;

use serde::de::DeserializeOwned;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::config::CatalogConfig;
use crate::error::ClientError;

pub use movie::*;

/// Issue one request; any non-success status becomes `ClientError::Status`
async fn send(config: &CatalogConfig, method: &str, path: &str, body: Option<String>) -> Result<Response, ClientError> {
    let url = config.url(path);
    web_sys::console::log_1(&format!("[API] {} {}", method, url).into());

    let init = RequestInit::new();
    init.set_method(method);
    init.set_mode(RequestMode::Cors);
    if let Some(body) = &body {
        init.set_body(&JsValue::from_str(body));
    }

    let request = Request::new_with_str_and_init(&url, &init).map_err(ClientError::network)?;
    if body.is_some() {
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(ClientError::network)?;
    }

    let window = web_sys::window().ok_or_else(|| ClientError::Network("no window".to_string()))?;
    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(ClientError::network)?
        .dyn_into()
        .map_err(ClientError::network)?;

    if !response.ok() {
        let status = response.status();
        let body = read_text(&response).await.unwrap_or_default();
        web_sys::console::error_1(&format!("[API] {} {} -> {}", method, url, status).into());
        return Err(ClientError::Status { status, body });
    }

    Ok(response)
}

async fn read_text(response: &Response) -> Result<String, ClientError> {
    let text = JsFuture::from(response.text().map_err(ClientError::network)?)
        .await
        .map_err(ClientError::network)?;
    Ok(text.as_string().unwrap_or_default())
}

async fn read_json<T: DeserializeOwned>(response: &Response) -> Result<T, ClientError> {
    let value = JsFuture::from(response.json().map_err(ClientError::network)?)
        .await
        .map_err(ClientError::decode_js)?;
    serde_wasm_bindgen::from_value(value).map_err(ClientError::decode)
}
