//! HTTP API Client
//!
//! Endpoint configuration and the one-shot health check against the
//! dashboard's backend API.

use gloo_net::http::Request;

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8000/api/v1";

/// Default feed WebSocket URL
pub const DEFAULT_FEED_URL: &str = "ws://localhost:8000/api/v1/ws/";

const API_URL_KEY: &str = "mppt_api_url";
const FEED_URL_KEY: &str = "mppt_feed_url";

fn stored(key: &str) -> Option<String> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok()??;
    storage.get_item(key).ok()?
}

fn store(key: &str, value: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(key, value);
        }
    }
}

/// Get the backend base URL from local storage or use the default
pub fn get_api_base() -> String {
    stored(API_URL_KEY)
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
        .trim_end_matches('/')
        .to_string()
}

/// Set the backend base URL in local storage
pub fn set_api_base(url: &str) {
    store(API_URL_KEY, url);
}

/// Get the feed WebSocket URL from local storage or use the default
pub fn get_feed_url() -> String {
    stored(FEED_URL_KEY).unwrap_or_else(|| DEFAULT_FEED_URL.to_string())
}

/// Set the feed WebSocket URL in local storage
pub fn set_feed_url(url: &str) {
    store(FEED_URL_KEY, url);
}

/// One-shot backend health check. The body is displayed verbatim, so it is
/// returned as text rather than deserialized.
pub async fn check_health() -> Result<String, String> {
    let response = Request::get(&format!("{}/basic/health", get_api_base()))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("API is not healthy: HTTP {}", response.status()));
    }

    response
        .text()
        .await
        .map_err(|e| format!("Read error: {}", e))
}
