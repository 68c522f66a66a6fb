//! Auth Page
//!
//! Access-code form shown to unauthenticated visitors.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::LOGO;
use crate::auth::{verify_token, AuthStatus};
use crate::context::use_app_context;

#[component]
pub fn AuthPage() -> impl IntoView {
    let ctx = use_app_context();
    let (token, set_token) = signal(String::new());
    let (verifying, set_verifying) = signal(false);

    let submit = move || {
        if verifying.get_untracked() {
            return;
        }
        let candidate = token.get_untracked();
        let api = ctx.api();
        let session = ctx.session();

        set_verifying.set(true);
        spawn_local(async move {
            let verdict = verify_token(&api, &session, &candidate).await;
            if verdict.status != AuthStatus::Unauthenticated {
                set_token.set(String::new());
            }
            set_verifying.set(false);
            ctx.apply_verdict(verdict);
        });
    };

    view! {
        <div class="app">
            <img src=LOGO alt="logo" class="logo" />
            <div class="auth-container">
                <form class="auth-form" on:submit=move |ev: web_sys::SubmitEvent| {
                    ev.prevent_default();
                    submit();
                }>
                    <p>"Введите код доступа"</p>
                    <span class="error">{move || ctx.auth_error.get()}</span>
                    <div class="input-container">
                        <input
                            type="password"
                            placeholder="код доступа"
                            prop:value=move || token.get()
                            on:input=move |ev| set_token.set(event_target_value(&ev))
                        />
                    </div>
                    <button type="submit" class="form-button" disabled=move || verifying.get()>
                        "Войти"
                    </button>
                </form>
            </div>
        </div>
    }
}
