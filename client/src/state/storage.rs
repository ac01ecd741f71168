//! Durable session-token persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! The in-memory session owns the token; `localStorage["token"]` is its
//! durable mirror so a reload can restore the session. The API client reads
//! the store on every request, so writes made here are visible to the next
//! request without any cache invalidation.
//!
//! TRADE-OFFS
//! ==========
//! Storage access is best-effort: a blocked or missing `localStorage` reads
//! as "no token" and writes are dropped with a warning.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::sync::{Mutex, PoisonError};

/// `localStorage` key holding the bearer token.
pub const TOKEN_STORAGE_KEY: &str = "token";

/// Point reads and writes of the persisted token.
pub trait TokenStore: Send + Sync {
    /// Current persisted token, if any.
    fn load(&self) -> Option<String>;
    /// Persist `token`, replacing any previous value.
    fn save(&self, token: &str);
    /// Remove the persisted token.
    fn clear(&self);
}

/// Browser `localStorage` store. A no-op outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalTokenStore;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Log a rejected `localStorage` write. Returns whether the write succeeded.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn check_storage_write<E: std::fmt::Debug>(action: &str, result: Result<(), E>) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            log::warn!("failed to {action} session token: {e:?}");
            false
        }
    }
}

impl TokenStore for LocalTokenStore {
    fn load(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .get_item(TOKEN_STORAGE_KEY)
                .ok()
                .flatten()
                .filter(|token| !token.is_empty())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn save(&self, token: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = local_storage() else {
                log::warn!("localStorage unavailable; session token not persisted");
                return;
            };
            check_storage_write("persist", storage.set_item(TOKEN_STORAGE_KEY, token));
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = local_storage() else {
                log::warn!("localStorage unavailable; session token not cleared");
                return;
            };
            check_storage_write("clear", storage.remove_item(TOKEN_STORAGE_KEY));
        }
    }
}

/// Process-memory store used by tests and non-browser builds.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with `token`.
    pub fn with_token(token: &str) -> Self {
        Self { token: Mutex::new(Some(token.to_owned())) }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn save(&self, token: &str) {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = Some(token.to_owned());
    }

    fn clear(&self) {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}
