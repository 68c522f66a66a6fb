//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{HttpApi, WishlistApi};
use crate::auth::{AuthStatus, AuthVerdict};
use crate::config::AppConfig;
use crate::session::{LocalTokenStorage, Session};
use crate::store::{store_replace_info, store_set_loading, WishlistStore};

/// App-wide services and auth signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    api: StoredValue<HttpApi>,
    session: StoredValue<Session<LocalTokenStorage>>,
    /// Current auth state - read
    pub auth_status: ReadSignal<AuthStatus>,
    /// Current auth state - write
    set_auth_status: WriteSignal<AuthStatus>,
    /// Message shown on the login page - read
    pub auth_error: ReadSignal<String>,
    /// Message shown on the login page - write
    set_auth_error: WriteSignal<String>,
}

impl AppContext {
    pub fn new(
        config: &AppConfig,
        auth_status: (ReadSignal<AuthStatus>, WriteSignal<AuthStatus>),
        auth_error: (ReadSignal<String>, WriteSignal<String>),
    ) -> Self {
        let storage = LocalTokenStorage::new(config.token_storage_key.clone());
        Self {
            api: StoredValue::new(HttpApi::new(config)),
            session: StoredValue::new(Session::new(storage)),
            auth_status: auth_status.0,
            set_auth_status: auth_status.1,
            auth_error: auth_error.0,
            set_auth_error: auth_error.1,
        }
    }

    pub fn api(&self) -> HttpApi {
        self.api.get_value()
    }

    pub fn session(&self) -> Session<LocalTokenStorage> {
        self.session.get_value()
    }

    /// Token for the `X-ACCESS-TOKEN` header
    pub fn token(&self) -> String {
        self.session.with_value(|session| session.header_token())
    }

    /// Publish the outcome of a token check
    pub fn apply_verdict(&self, verdict: AuthVerdict) {
        self.set_auth_error.set(verdict.error.unwrap_or_default());
        self.set_auth_status.set(verdict.status);
    }

    /// Drop the stored token and return to the login page
    pub fn logout(&self) {
        self.session.with_value(|session| session.clear_token());
        log::info!(target: "auth", "logged out");
        self.apply_verdict(AuthVerdict { status: AuthStatus::Unauthenticated, error: None });
    }

    /// Re-fetch gifts and event info into the store
    pub fn reload_info(&self, store: WishlistStore) {
        let api = self.api();
        let token = self.token();
        store_set_loading(&store, true);
        spawn_local(async move {
            match api.get_info(&token).await {
                Ok(info) => {
                    log::debug!(target: "store", "loaded {} gifts", info.gifts.len());
                    store_replace_info(&store, info);
                }
                Err(e) => log::error!(target: "store", "loading event info failed: {}", e),
            }
            store_set_loading(&store, false);
        });
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
