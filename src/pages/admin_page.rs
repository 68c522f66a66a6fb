//! Admin Page
//!
//! Gift list with add, edit and delete. Every successful mutation re-fetches
//! the list instead of patching it locally.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::admin::{delete_gift, DeleteDialog, GiftEditor, DELETE_PROMPT};
use crate::components::{GiftFormModal, Loader, Modal};
use crate::context::use_app_context;
use crate::store::{use_wishlist_store, WishlistStateStoreFields};

#[component]
pub fn AdminPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_wishlist_store();
    let editor = RwSignal::new(None::<GiftEditor>);
    let deleting = RwSignal::new(DeleteDialog::default());

    let refetch = move || ctx.reload_info(store);

    // Load gifts on mount
    Effect::new(move |_| {
        refetch();
    });

    let close_editor = Callback::new(move |_: ()| editor.set(None));
    let on_saved = Callback::new(move |_: ()| {
        editor.set(None);
        refetch();
    });

    let confirm_delete = Callback::new(move |_: ()| {
        // None while a delete is already running
        let Some(gift_id) = deleting.try_update(|d| d.begin()).flatten() else { return };
        let api = ctx.api();
        let token = ctx.token();
        spawn_local(async move {
            let outcome = delete_gift(&api, &token, gift_id).await;
            deleting.update(|d| d.finish(outcome));
            if outcome.refetch {
                refetch();
            }
        });
    });
    let cancel_delete = Callback::new(move |_: ()| deleting.update(|d| d.cancel()));

    view! {
        <Show when=move || !store.loading().get() fallback=|| view! { <Loader /> }>
            <div class="app">
                <div class="gift-manager">
                    <h1>"Управление подарками"</h1>
                    <div class="session-links">
                        <a href="/">"К вишлисту"</a>
                        <button class="logout-button" on:click=move |_| ctx.logout()>"Выйти"</button>
                    </div>
                    <div class="gift-list">
                        <For
                            each=move || store.gifts().get()
                            key=|gift| gift.id
                            children=move |gift| {
                                let for_edit = gift.clone();
                                let for_delete = gift.clone();
                                view! {
                                    <div class="gift-list-item">
                                        <span class="gift-list-item-name">{gift.name.clone()}</span>
                                        <div class="actions">
                                            <button
                                                class="modal-button"
                                                on:click=move |_| editor.set(Some(GiftEditor::edit(&for_edit)))
                                            >
                                                "✎"
                                            </button>
                                            <button
                                                class="modal-button"
                                                on:click=move |_| deleting.update(|d| d.open(for_delete.clone()))
                                            >
                                                "྾"
                                            </button>
                                        </div>
                                    </div>
                                }
                            }
                        />
                    </div>
                    <button class="form-button" on:click=move |_| editor.set(Some(GiftEditor::add()))>
                        "Добавить"
                    </button>
                </div>
            </div>
        </Show>

        {move || editor.get().map(|current| view! {
            <GiftFormModal editor=current on_cancel=close_editor on_saved=on_saved />
        })}

        <Show when=move || deleting.with(|d| d.is_open())>
            <Modal
                message=DELETE_PROMPT.to_string()
                confirm_text="Да"
                cancel_text="Нет"
                on_confirm=confirm_delete
                on_cancel=cancel_delete
                busy=Signal::derive(move || deleting.with(|d| d.is_removing()))
            />
        </Show>
    }
}
