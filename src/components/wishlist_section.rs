//! Wishlist Section Component
//!
//! Gift cards with a reservation checkbox. Confirmed toggles are sent to the
//! server and patched into the store; a 409 shows the conflict dialog.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::browser::reload_page;
use crate::components::Modal;
use crate::context::use_app_context;
use crate::models::Gift;
use crate::reservation::{commit, PageEffect, ReservationFlow, CONFLICT_MESSAGE};
use crate::store::{store_patch_gift, use_wishlist_store, WishlistStateStoreFields};

/// Checkbox click: open the prompt unless a toggle or a conflict is pending
fn select_gift(flow: RwSignal<ReservationFlow>, gift: Gift) {
    let gift_id = gift.id;
    flow.update(|f| {
        if !f.select(gift) {
            log::debug!(target: "Wishlist", "selection of gift {} ignored", gift_id);
        }
    });
}

/// The yes/no prompt is up
fn prompt_visible(flow: &ReservationFlow) -> bool {
    flow.pending().is_some() && !flow.in_conflict()
}

#[component]
pub fn WishlistSection() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_wishlist_store();
    let flow = RwSignal::new(ReservationFlow::default());

    let on_select = Callback::new(move |gift: Gift| select_gift(flow, gift));

    let on_confirm = Callback::new(move |_: ()| {
        // None when a toggle is already in flight
        let Some(gift) = flow.try_update(|f| f.begin_commit()).flatten() else { return };
        let api = ctx.api();
        let token = ctx.token();
        spawn_local(async move {
            let outcome = commit(&api, &token, &gift).await;
            let patch = flow.try_update(|f| f.resolve(&outcome)).flatten();
            if let Some(patch) = patch {
                store_patch_gift(&store, patch.gift_id, patch.reserved);
            }
        });
    });

    let on_cancel = Callback::new(move |_: ()| flow.update(|f| f.cancel()));

    let on_conflict_ok = Callback::new(move |_: ()| {
        if let Some(PageEffect::Reload) = flow.with_untracked(|f| f.acknowledge_conflict()) {
            reload_page();
        }
    });

    view! {
        <div class="wishlist">
            <For
                each=move || store.gifts().get()
                // The reserved flag is part of the key so a toggled card re-renders
                key=|gift| (gift.id, gift.reserved)
                children=move |gift| {
                    view! { <GiftCard gift=gift on_select=on_select /> }
                }
            />

            <Show when=move || flow.with(prompt_visible)>
                <Modal
                    message=Signal::derive(move || flow.with(|f| f.prompt().unwrap_or_default().to_string()))
                    confirm_text="Да"
                    cancel_text="Нет"
                    on_confirm=on_confirm
                    on_cancel=on_cancel
                    busy=Signal::derive(move || flow.with(|f| f.is_submitting()))
                />
            </Show>

            <Show when=move || flow.with(|f| f.in_conflict())>
                <Modal
                    message=CONFLICT_MESSAGE.to_string()
                    confirm_text="ОК"
                    on_confirm=on_conflict_ok
                />
            </Show>
        </div>
    }
}

/// One gift card
#[component]
fn GiftCard(gift: Gift, on_select: Callback<Gift>) -> impl IntoView {
    let card_class = if gift.reserved { "gift-card gift-disabled" } else { "gift-card" };
    let frame_class = gift.grade_class();
    let reserved = gift.reserved;
    let image = gift.image_src().map(str::to_string);
    let name = gift.name.clone();
    let details = gift.details.clone().filter(|d| !d.is_empty());
    let link = gift.link.clone().filter(|l| !l.is_empty());
    let alt = name.clone();

    view! {
        <div class=card_class>
            <div class=frame_class>
                <div class="glow"></div>
                {image.map(|src| view! { <img src=src alt=alt /> })}
            </div>
            <div class="gift-info">
                <p class="gift-name">{name}</p>
                {details.map(|details| view! { <p class="gift-details">{details}</p> })}
                {link.map(|link| view! {
                    <a href=link.clone() target="_blank" class="gift-link">{link.clone()}</a>
                })}
            </div>
            <div
                class="gift-checkbox"
                on:click=move |ev| {
                    ev.stop_propagation();
                    on_select.run(gift.clone());
                }
            >
                {reserved.then(|| view! { <div class="gift-checkbox-mark"></div> })}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sample_gift;
    use crate::reservation::CommitOutcome;

    #[test]
    fn test_conflict_blocks_card_selection() {
        let owner = Owner::new();
        owner.set();
        let flow = RwSignal::new(ReservationFlow::default());

        select_gift(flow, sample_gift(1, "a", false));
        assert!(flow.with_untracked(prompt_visible));
        flow.update(|f| {
            f.begin_commit();
            f.resolve(&CommitOutcome::Conflict { gift_id: 1 });
        });
        assert!(!flow.with_untracked(prompt_visible));

        select_gift(flow, sample_gift(2, "b", false));

        assert!(!flow.with_untracked(prompt_visible));
        assert!(flow.with_untracked(|f| f.in_conflict()));
        assert_eq!(flow.with_untracked(|f| f.acknowledge_conflict()), Some(PageEffect::Reload));
    }

    #[test]
    fn test_second_click_while_in_flight_is_ignored() {
        let owner = Owner::new();
        owner.set();
        let flow = RwSignal::new(ReservationFlow::default());

        select_gift(flow, sample_gift(1, "a", false));
        let first = flow.try_update(|f| f.begin_commit()).flatten();
        let second = flow.try_update(|f| f.begin_commit()).flatten();

        assert_eq!(first.map(|g| g.id), Some(1));
        assert_eq!(second, None);
        assert!(flow.with_untracked(prompt_visible));
        assert!(flow.with_untracked(|f| f.is_submitting()));
    }
}
