//! Tabs Component
//!
//! Folder-style tab strip for the main page. Tabs further from the active
//! one sit lower in the stack.

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TabKey {
    #[default]
    Wishlist,
    Place,
    Dress,
}

/// Tab order and labels
pub const TABS: &[(TabKey, &str)] = &[
    (TabKey::Wishlist, "вишлист"),
    (TabKey::Place, "место и время"),
    (TabKey::Dress, "дресс-код"),
];

impl TabKey {
    pub fn index(self) -> usize {
        TABS.iter().position(|(key, _)| *key == self).unwrap_or(0)
    }

    pub fn label(self) -> &'static str {
        TABS[self.index()].1
    }
}

/// Stacking order for the tab at `index` when `active` is selected
pub fn tab_z_index(index: usize, active: usize) -> i32 {
    if index == active {
        4
    } else {
        3 - index.abs_diff(active) as i32
    }
}

#[component]
pub fn Tabs(active: ReadSignal<TabKey>, set_active: WriteSignal<TabKey>) -> impl IntoView {
    view! {
        <div class="tabs">
            {TABS.iter().enumerate().map(|(index, (key, _))| {
                let key = *key;
                let is_active = move || active.get() == key;
                let tab_class = move || if is_active() { "tab active" } else { "tab" };
                let style = move || format!("z-index: {}", tab_z_index(index, active.get().index()));
                view! {
                    <button class=tab_class style=style on:click=move |_| set_active.set(key)>
                        {key.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
