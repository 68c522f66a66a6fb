//! Pages
//!
//! One component per top-level screen.

mod admin_page;
mod auth_page;
mod main_page;

pub use admin_page::AdminPage;
pub use auth_page::AuthPage;
pub use main_page::MainPage;

pub const LOGO: &str = "/assets/logo.svg";
