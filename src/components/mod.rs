//! UI Components
//!
//! Reusable Leptos components.

mod gift_form;
mod loader;
mod modal;
mod rich_text_section;
mod tabs;
mod wishlist_section;

pub use gift_form::GiftFormModal;
pub use loader::Loader;
pub use modal::Modal;
pub use rich_text_section::RichTextSection;
pub use tabs::{TabKey, Tabs};
pub use wishlist_section::WishlistSection;
