//! Backend URL resolution
//!
//! Uses `[api] base_url` from the client configuration when set, otherwise the
//! current page host on the configured port.

use contracts::shared::config::ClientConfig;

/// Base URL like `http://localhost:3000`; empty if there is no window
pub fn api_base(config: &ClientConfig) -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    config.api_base(&protocol, &hostname)
}
