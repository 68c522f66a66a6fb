//! Wishlist Frontend App
//!
//! Root component: runs the startup token check and picks the page for the
//! current auth state and path.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::auth::{startup_check, AuthStatus, Page};
use crate::browser::{current_path, take_url_token};
use crate::components::Loader;
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::pages::{AdminPage, AuthPage, MainPage};
use crate::store::WishlistState;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // State
    let (auth_status, set_auth_status) = signal(AuthStatus::Loading);
    let (auth_error, set_auth_error) = signal(String::new());
    let auth_delay_ms = config.auth_delay_ms;

    // Provide context to all children
    let ctx = AppContext::new(&config, (auth_status, set_auth_status), (auth_error, set_auth_error));
    provide_context(ctx);
    provide_context(Store::new(WishlistState::default()));

    // Startup token check
    Effect::new(move |_| {
        spawn_local(async move {
            TimeoutFuture::new(auth_delay_ms).await;
            let api = ctx.api();
            let session = ctx.session();
            let verdict = startup_check(&api, &session, take_url_token).await;
            log::info!(target: "auth", "startup check: {:?}", verdict.status);
            ctx.apply_verdict(verdict);
        });
    });

    let path = current_path();

    view! {
        {move || match auth_status.get().page_for(&path) {
            Page::Loader => view! { <Loader /> }.into_any(),
            Page::Login => view! { <AuthPage /> }.into_any(),
            Page::Main => view! { <MainPage /> }.into_any(),
            Page::Admin => view! { <AdminPage /> }.into_any(),
        }}
    }
}
