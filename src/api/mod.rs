//! Remote API Bindings
//!
//! HTTP bindings to the storefront backend, organized by domain.

mod auth;
mod cart;
mod order;
mod shirt;

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestCredentials, RequestInit, Response};

use crate::config;

// Re-export all public items
pub use auth::*;
pub use cart::*;
pub use order::*;
pub use shirt::*;

fn endpoint(path: &str) -> String {
    format!("{}{}", config::API_BASE, path)
}

/// Issue one request and decode the JSON body. Non-2xx statuses and
/// network failures both surface as `Err`.
async fn send(method: &str, path: &str, body: Option<String>) -> Result<JsValue, String> {
    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_credentials(RequestCredentials::Include);
    let has_body = body.is_some();
    if let Some(body) = body {
        opts.set_body(&JsValue::from_str(&body));
    }

    let request = Request::new_with_str_and_init(&endpoint(path), &opts)
        .map_err(|e| format!("Request error: {:?}", e))?;
    if has_body {
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(|e| format!("Header error: {:?}", e))?;
    }

    let window = web_sys::window().ok_or_else(|| "No window".to_string())?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("Network error: {:?}", e))?;
    let response: Response = response
        .dyn_into()
        .map_err(|e| format!("Response error: {:?}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {} {}", response.status(), response.status_text()));
    }

    let json = response.json().map_err(|e| format!("Body error: {:?}", e))?;
    JsFuture::from(json)
        .await
        .map_err(|e| format!("JSON error: {:?}", e))
}

pub(crate) async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let value = send("GET", path, None).await?;
    serde_wasm_bindgen::from_value(value).map_err(|e| format!("Response error: {}", e))
}

pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, String> {
    let body = serde_json::to_string(body).map_err(|e| format!("Serialization error: {}", e))?;
    let value = send("POST", path, Some(body)).await?;
    serde_wasm_bindgen::from_value(value).map_err(|e| format!("Response error: {}", e))
}

pub(crate) async fn put_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, String> {
    let body = serde_json::to_string(body).map_err(|e| format!("Serialization error: {}", e))?;
    let value = send("PUT", path, Some(body)).await?;
    serde_wasm_bindgen::from_value(value).map_err(|e| format!("Response error: {}", e))
}
