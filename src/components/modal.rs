//! Modal Component
//!
//! Centered dialog over a dimming overlay, used for reservation prompts,
//! the conflict notice and delete confirmation.

use leptos::prelude::*;

/// Yes/no (or single-button) dialog
///
/// # Arguments
/// * `message` - Text shown in the dialog body
/// * `confirm_text` - Label of the confirm button
/// * `cancel_text` - Label of the cancel button; `None` hides it
/// * `on_confirm` - Runs when the confirm button is clicked
/// * `on_cancel` - Runs when the cancel button or the overlay is clicked
/// * `busy` - Disables the confirm button while true
#[component]
pub fn Modal(
    #[prop(into)] message: Signal<String>,
    #[prop(into)] confirm_text: String,
    #[prop(optional, into)] cancel_text: Option<String>,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(optional, into)] on_cancel: Option<Callback<()>>,
    #[prop(optional, into)] busy: Option<Signal<bool>>,
) -> impl IntoView {
    let is_busy = move || busy.map(|b| b.get()).unwrap_or(false);
    let cancel = move || {
        if let Some(cb) = on_cancel {
            cb.run(());
        }
    };

    view! {
        <div class="modal-overlay" on:click=move |_| cancel()>
            <div class="modal" on:click=|ev| ev.stop_propagation()>
                <p>{move || message.get()}</p>
                <div class="modal-buttons">
                    <button
                        class="modal-button"
                        disabled=is_busy
                        on:click=move |ev| {
                            ev.stop_propagation();
                            if !is_busy() {
                                on_confirm.run(());
                            }
                        }
                    >
                        {confirm_text}
                    </button>
                    {cancel_text.map(|text| view! {
                        <button
                            class="modal-button"
                            on:click=move |ev| {
                                ev.stop_propagation();
                                cancel();
                            }
                        >
                            {text}
                        </button>
                    })}
                </div>
            </div>
        </div>
    }
}
