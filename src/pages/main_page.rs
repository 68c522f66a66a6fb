//! Main Page
//!
//! Tabs over the wishlist, the place/time notes and the dress code.

use leptos::prelude::*;

use super::LOGO;
use crate::components::{RichTextSection, TabKey, Tabs, WishlistSection};
use crate::context::use_app_context;
use crate::store::{use_wishlist_store, WishlistStateStoreFields};

#[component]
pub fn MainPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_wishlist_store();
    let (tab, set_tab) = signal(TabKey::default());

    // Load gifts and event texts on mount
    Effect::new(move |_| {
        ctx.reload_info(store);
    });

    let section_class = move |key: TabKey| {
        move || if tab.get() == key { "section active" } else { "section" }
    };

    view! {
        <div class="app">
            <img src=LOGO alt="logo" class="logo" />
            <div class="session-links">
                <Show when=move || ctx.auth_status.get().is_admin()>
                    <a href="/admin">"Управление подарками"</a>
                </Show>
                <button class="logout-button" on:click=move |_| ctx.logout()>"Выйти"</button>
            </div>
            <Tabs active=tab set_active=set_tab />
            <div class=section_class(TabKey::Wishlist)>
                <WishlistSection />
            </div>
            <div class=section_class(TabKey::Place)>
                <RichTextSection class="place" html=Signal::derive(move || store.place_info().get()) />
            </div>
            <div class=section_class(TabKey::Dress)>
                <RichTextSection class="dress" html=Signal::derive(move || store.dress_code_info().get()) />
            </div>
        </div>
    }
}
