//! Wishlist Frontend Entry Point

mod admin;
mod api;
mod app;
mod auth;
mod browser;
mod components;
mod config;
mod context;
mod error;
mod logging;
mod models;
mod pages;
mod reservation;
mod session;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let loaded = AppConfig::load();
    let config = loaded.clone().unwrap_or_default();
    logging::init(&config.log_level);
    logging::expose_history();
    if let Err(e) = loaded {
        log::warn!(target: "config", "{}", e);
    }
    log::info!(target: "app", "starting, api base {:?}", config.api_base);
    mount_to_body(move || view! { <App config=config.clone() /> });
}
