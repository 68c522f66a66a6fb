//! Session Token Storage
//!
//! The access token is the only thing the client persists. All reads and
//! writes go through `Session`, which wraps a `TokenStorage` backend.

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

/// Durable storage for a single token
pub trait TokenStorage {
    fn load(&self) -> Option<String>;
    fn store(&self, token: &str);
    fn remove(&self);
}

/// `window.localStorage` under a fixed key
#[derive(Debug, Clone, PartialEq)]
pub struct LocalTokenStorage {
    key: String,
}

impl LocalTokenStorage {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|win| win.local_storage().ok().flatten())
    }
}

impl TokenStorage for LocalTokenStorage {
    fn load(&self) -> Option<String> {
        Self::storage().and_then(|s| s.get_item(&self.key).ok().flatten())
    }

    fn store(&self, token: &str) {
        match Self::storage() {
            Some(s) => {
                if s.set_item(&self.key, token).is_err() {
                    log::warn!(target: "session", "localStorage rejected the token");
                }
            }
            None => log::warn!(target: "session", "localStorage unavailable, token not persisted"),
        }
    }

    fn remove(&self) {
        if let Some(s) = Self::storage() {
            let _ = s.remove_item(&self.key);
        }
    }
}

/// In-memory storage, shared between clones
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct MemoryTokenStorage {
    token: Rc<RefCell<Option<String>>>,
}

#[cfg(test)]
impl MemoryTokenStorage {
    pub fn with_token(token: &str) -> Self {
        Self { token: Rc::new(RefCell::new(Some(token.to_string()))) }
    }
}

#[cfg(test)]
impl TokenStorage for MemoryTokenStorage {
    fn load(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn store(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_string());
    }

    fn remove(&self) {
        *self.token.borrow_mut() = None;
    }
}

/// Token access for views and flows
#[derive(Debug, Clone)]
pub struct Session<S: TokenStorage> {
    storage: S,
}

impl<S: TokenStorage> Session<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Stored token, empty tokens count as absent
    pub fn token(&self) -> Option<String> {
        self.storage.load().filter(|t| !t.is_empty())
    }

    /// Token for request headers (empty when logged out)
    pub fn header_token(&self) -> String {
        self.token().unwrap_or_default()
    }

    pub fn set_token(&self, token: &str) {
        self.storage.store(token);
    }

    pub fn clear_token(&self) {
        self.storage.remove();
    }
}
