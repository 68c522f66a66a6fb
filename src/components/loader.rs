//! Loader Component

use leptos::prelude::*;

pub const LOADER_GIF: &str = "/assets/fire_ring.gif";

/// Full-screen spinner shown while the token is being checked
#[component]
pub fn Loader() -> impl IntoView {
    view! {
        <div class="app app-loading">
            <img class="loader-gif" src=LOADER_GIF alt="loading" />
        </div>
    }
}
