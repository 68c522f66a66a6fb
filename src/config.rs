//! Application Configuration
//!
//! Read once at startup from an optional `window.__WISHLIST_CONFIG__` object.
//! Every field has a default, so an absent or partial object is fine.

use serde::Deserialize;
use wasm_bindgen::JsValue;

const CONFIG_GLOBAL: &str = "__WISHLIST_CONFIG__";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Prefix for `/api/...` paths; empty means same origin
    pub api_base: String,
    /// Pause before the first token check
    pub auth_delay_ms: u32,
    /// Per-request timeout; the request is aborted when it fires
    pub request_timeout_ms: u32,
    /// localStorage key holding the access token
    pub token_storage_key: String,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            auth_delay_ms: 1000,
            request_timeout_ms: 15_000,
            token_storage_key: "token".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| e.to_string())
    }

    /// Load from the page. A missing object yields the defaults; an invalid
    /// one is reported so the caller can log it once logging is up.
    pub fn load() -> Result<Self, String> {
        let Some(window) = web_sys::window() else {
            return Ok(Self::default());
        };
        let raw = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL)).unwrap_or(JsValue::UNDEFINED);
        if raw.is_undefined() || raw.is_null() {
            return Ok(Self::default());
        }
        // a JSON string is accepted as well as an object
        if let Some(json) = raw.as_string() {
            return Self::from_json(&json).map_err(|e| format!("ignoring invalid {}: {}", CONFIG_GLOBAL, e));
        }
        serde_wasm_bindgen::from_value::<AppConfig>(raw)
            .map_err(|e| format!("ignoring invalid {}: {}", CONFIG_GLOBAL, e))
    }

    /// Join the API base with an absolute path
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.api_base.trim_end_matches('/'), path)
    }
}
