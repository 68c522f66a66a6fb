//! Page State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{patch_reserved, EventInfo, Gift};

/// Cached copy of the server's event data
#[derive(Clone, Debug, Default, Store)]
pub struct WishlistState {
    pub gifts: Vec<Gift>,
    /// Raw HTML, sanitized at render time
    pub place_info: String,
    pub dress_code_info: String,
    /// True while a fetch is in flight
    pub loading: bool,
}

/// Type alias for the store
pub type WishlistStore = Store<WishlistState>;

/// Get the store from context
pub fn use_wishlist_store() -> WishlistStore {
    expect_context::<WishlistStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the whole gift list
pub fn store_replace_gifts(store: &WishlistStore, gifts: Vec<Gift>) {
    *store.gifts().write() = gifts;
}

/// Replace gifts and event texts from a fresh `get_info`
pub fn store_replace_info(store: &WishlistStore, info: EventInfo) {
    store_replace_gifts(store, info.gifts);
    *store.place_info().write() = info.place_info;
    *store.dress_code_info().write() = info.dress_code_info;
}

/// Set the reservation flag of one gift
pub fn store_patch_gift(store: &WishlistStore, gift_id: u32, reserved: bool) {
    let gifts_field = store.gifts();
    let mut gifts = gifts_field.write();
    if !patch_reserved(&mut gifts, gift_id, reserved) {
        log::warn!(target: "store", "patch for unknown gift {}", gift_id);
    }
}

pub fn store_set_loading(store: &WishlistStore, loading: bool) {
    *store.loading().write() = loading;
}
