//! Auth Gate
//!
//! Token resolution and verification. The server decides whether a token is
//! valid and whether it carries admin rights; the client only mirrors that.

use percent_encoding::percent_decode_str;

use crate::api::WishlistApi;
use crate::error::ApiError;
use crate::session::{Session, TokenStorage};

/// Query parameter used to hand a token over by link
pub const TOKEN_PARAM: &str = "token";

pub const INVALID_TOKEN_MESSAGE: &str = "Неверный токен";
pub const AUTH_FAILED_MESSAGE: &str = "Ошибка авторизации";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthStatus {
    Loading,
    User,
    Admin,
    Unauthenticated,
}

/// Which page a status renders at a given path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Loader,
    Login,
    Main,
    Admin,
}

impl AuthStatus {
    pub fn page_for(self, path: &str) -> Page {
        match self {
            AuthStatus::Loading => Page::Loader,
            AuthStatus::Unauthenticated => Page::Login,
            AuthStatus::User => Page::Main,
            AuthStatus::Admin if is_admin_path(path) => Page::Admin,
            AuthStatus::Admin => Page::Main,
        }
    }

    pub fn is_admin(self) -> bool {
        self == AuthStatus::Admin
    }
}

fn is_admin_path(path: &str) -> bool {
    path.trim_end_matches('/') == "/admin"
}

/// Result of one verification
#[derive(Debug, Clone, PartialEq)]
pub struct AuthVerdict {
    pub status: AuthStatus,
    /// User-visible message, set only on failure
    pub error: Option<String>,
}

impl AuthVerdict {
    fn unauthenticated(error: Option<&str>) -> Self {
        Self { status: AuthStatus::Unauthenticated, error: error.map(str::to_string) }
    }
}

/// Pick the token to verify: a URL token beats a stored one
pub fn resolve_candidate(url_token: Option<String>, stored_token: Option<String>) -> Option<String> {
    url_token
        .filter(|t| !t.is_empty())
        .or_else(|| stored_token.filter(|t| !t.is_empty()))
}

/// Split `token` out of a query string.
///
/// Returns the decoded token (if a non-empty one was present) and the query
/// string with every `token` parameter removed, `None` when nothing changed.
pub fn split_token_param(search: &str) -> (Option<String>, Option<String>) {
    let query = search.strip_prefix('?').unwrap_or(search);
    let mut token = None;
    let mut removed = false;
    let mut kept = Vec::new();

    for pair in query.split('&').filter(|p| !p.is_empty()) {
        let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
        if decode_component(name) == TOKEN_PARAM {
            removed = true;
            if token.is_none() {
                token = Some(decode_component(value));
            }
        } else {
            kept.push(pair);
        }
    }

    if !removed {
        return (None, None);
    }
    let rest = if kept.is_empty() { String::new() } else { format!("?{}", kept.join("&")) };
    (token.filter(|t| !t.is_empty()), Some(rest))
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}

/// Verify a token against the server and record the outcome in the session.
///
/// Success stores the token; any failure clears it.
pub async fn verify_token<A, S>(api: &A, session: &Session<S>, token: &str) -> AuthVerdict
where
    A: WishlistApi + ?Sized,
    S: TokenStorage,
{
    match api.authenticate(token).await {
        Ok(response) => {
            session.set_token(token);
            let status = if response.is_admin { AuthStatus::Admin } else { AuthStatus::User };
            log::info!(target: "auth", "token accepted ({:?})", status);
            AuthVerdict { status, error: None }
        }
        Err(err) => {
            session.clear_token();
            log::warn!(target: "auth", "token rejected: {}", err);
            let message = match err {
                ApiError::Status { .. } | ApiError::Conflict => INVALID_TOKEN_MESSAGE,
                _ => AUTH_FAILED_MESSAGE,
            };
            AuthVerdict::unauthenticated(Some(message))
        }
    }
}

/// Startup check: verify the best available token, if any
pub async fn check_auth<A, S>(api: &A, session: &Session<S>, url_token: Option<String>) -> AuthVerdict
where
    A: WishlistApi + ?Sized,
    S: TokenStorage,
{
    match resolve_candidate(url_token, session.token()) {
        Some(token) => verify_token(api, session, &token).await,
        None => AuthVerdict::unauthenticated(None),
    }
}

/// Page-load check: take the URL token first (which also strips it from the
/// address bar), then verify
pub async fn startup_check<A, S, F>(api: &A, session: &Session<S>, take_url_token: F) -> AuthVerdict
where
    A: WishlistApi + ?Sized,
    S: TokenStorage,
    F: FnOnce() -> Option<String>,
{
    let url_token = take_url_token();
    check_auth(api, session, url_token).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Endpoint, MockApi};
    use crate::models::AuthResponse;
    use crate::session::MemoryTokenStorage;
    use futures::executor::block_on;

    #[test]
    fn test_url_token_takes_priority() {
        assert_eq!(
            resolve_candidate(Some("url".into()), Some("stored".into())).as_deref(),
            Some("url")
        );
        assert_eq!(resolve_candidate(None, Some("stored".into())).as_deref(), Some("stored"));
        assert_eq!(resolve_candidate(Some(String::new()), Some("stored".into())).as_deref(), Some("stored"));
        assert_eq!(resolve_candidate(None, None), None);
    }

    #[test]
    fn test_split_token_param() {
        assert_eq!(split_token_param("?token=abc"), (Some("abc".into()), Some(String::new())));
        assert_eq!(
            split_token_param("?lang=ru&token=a%20b&tab=place"),
            (Some("a b".into()), Some("?lang=ru&tab=place".into()))
        );
        assert_eq!(split_token_param("?lang=ru"), (None, None));
        assert_eq!(split_token_param(""), (None, None));
        // an empty token is still stripped from the URL
        assert_eq!(split_token_param("?token="), (None, Some(String::new())));
    }

    #[test]
    fn test_pages_for_status() {
        assert_eq!(AuthStatus::Loading.page_for("/admin"), Page::Loader);
        assert_eq!(AuthStatus::Unauthenticated.page_for("/admin"), Page::Login);
        assert_eq!(AuthStatus::User.page_for("/"), Page::Main);
        assert_eq!(AuthStatus::User.page_for("/admin"), Page::Main);
        assert_eq!(AuthStatus::Admin.page_for("/admin"), Page::Admin);
        assert_eq!(AuthStatus::Admin.page_for("/admin/"), Page::Admin);
        assert_eq!(AuthStatus::Admin.page_for("/"), Page::Main);
    }

    #[test]
    fn test_url_token_is_verified_over_stored() {
        let api = MockApi::default();
        let session = Session::new(MemoryTokenStorage::with_token("stored"));

        let verdict = block_on(check_auth(&api, &session, Some("from-url".into())));

        assert_eq!(verdict.status, AuthStatus::User);
        let calls = api.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].endpoint, Endpoint::Auth);
        assert_eq!(calls[0].token, "from-url");
        assert_eq!(session.token().as_deref(), Some("from-url"));
    }

    #[test]
    fn test_admin_flag_selects_admin() {
        let api = MockApi { auth: Ok(AuthResponse { is_admin: true }), ..MockApi::default() };
        let session = Session::new(MemoryTokenStorage::with_token("boss"));

        let verdict = block_on(check_auth(&api, &session, None));

        assert_eq!(verdict, AuthVerdict { status: AuthStatus::Admin, error: None });
        assert_eq!(api.calls()[0].token, "boss");
    }

    #[test]
    fn test_no_candidate_skips_request() {
        let api = MockApi::default();
        let session = Session::new(MemoryTokenStorage::default());

        let verdict = block_on(check_auth(&api, &session, None));

        assert_eq!(verdict, AuthVerdict { status: AuthStatus::Unauthenticated, error: None });
        assert!(api.calls().is_empty());
    }

    #[test]
    fn test_rejected_token_clears_storage() {
        let api = MockApi::failing_auth(401);
        let session = Session::new(MemoryTokenStorage::with_token("old"));

        let verdict = block_on(verify_token(&api, &session, "old"));

        assert_eq!(verdict.status, AuthStatus::Unauthenticated);
        assert_eq!(verdict.error.as_deref(), Some(INVALID_TOKEN_MESSAGE));
        assert_eq!(session.token(), None);
    }

    #[test]
    fn test_network_failure_clears_storage() {
        let api = MockApi { auth: Err(ApiError::Network("offline".into())), ..MockApi::default() };
        let session = Session::new(MemoryTokenStorage::with_token("old"));

        let verdict = block_on(verify_token(&api, &session, "old"));

        assert_eq!(verdict.error.as_deref(), Some(AUTH_FAILED_MESSAGE));
        assert_eq!(session.token(), None);
    }

    #[test]
    fn test_login_form_replaces_stored_token() {
        let api = MockApi::default();
        let session = Session::new(MemoryTokenStorage::with_token("first"));

        block_on(verify_token(&api, &session, "second"));

        assert_eq!(session.token().as_deref(), Some("second"));
    }

    #[test]
    fn test_url_token_taken_before_verification() {
        let api = MockApi::default();
        let session = Session::new(MemoryTokenStorage::with_token("stored"));

        let verdict = block_on(startup_check(&api, &session, || {
            assert!(api.calls().is_empty(), "URL read after a request went out");
            Some("link".to_string())
        }));

        assert_eq!(verdict.status, AuthStatus::User);
        assert_eq!(api.calls()[0].token, "link");
        assert_eq!(session.token().as_deref(), Some("link"));
    }
}
