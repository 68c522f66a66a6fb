//! Browser Helpers
//!
//! Thin wrappers over `window.location` / `window.history`.

use wasm_bindgen::JsValue;

use crate::auth::split_token_param;

/// Current path, "/" if unavailable
pub fn current_path() -> String {
    web_sys::window()
        .and_then(|win| win.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// Read the `token` query parameter and strip it from the address bar.
///
/// Runs at most once per page load in practice: after the first call the
/// parameter is gone.
pub fn take_url_token() -> Option<String> {
    let window = web_sys::window()?;
    let location = window.location();
    let search = location.search().ok()?;
    let path = location.pathname().unwrap_or_else(|_| "/".to_string());
    let hash = location.hash().unwrap_or_default();
    let (token, url) = strip_token(&path, &search, &hash);

    if let Some(url) = url {
        let replaced = window
            .history()
            .and_then(|history| history.replace_state_with_url(&JsValue::NULL, "", Some(&url)));
        if let Err(e) = replaced {
            log::warn!(target: "auth", "could not strip token from URL: {:?}", e);
        }
    }
    token
}

/// Token from the query plus the URL to show instead, `None` when the
/// address needs no change
fn strip_token(path: &str, search: &str, hash: &str) -> (Option<String>, Option<String>) {
    let (token, rest) = split_token_param(search);
    (token, rest.map(|rest| format!("{}{}{}", path, rest, hash)))
}

/// Full page reload
pub fn reload_page() {
    let Some(window) = web_sys::window() else { return };
    if let Err(e) = window.location().reload() {
        log::error!(target: "browser", "reload failed: {:?}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_keeps_other_params_and_hash() {
        assert_eq!(
            strip_token("/admin", "?lang=ru&token=abc&tab=2", "#gifts"),
            (Some("abc".to_string()), Some("/admin?lang=ru&tab=2#gifts".to_string()))
        );
    }

    #[test]
    fn test_strip_only_param() {
        assert_eq!(strip_token("/", "?token=abc", ""), (Some("abc".to_string()), Some("/".to_string())));
        assert_eq!(strip_token("/", "?token=", "#x"), (None, Some("/#x".to_string())));
    }

    #[test]
    fn test_strip_leaves_url_without_token_alone() {
        assert_eq!(strip_token("/", "?lang=ru", "#x"), (None, None));
        assert_eq!(strip_token("/", "", ""), (None, None));
    }
}
