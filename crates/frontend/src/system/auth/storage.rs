use std::cell::RefCell;

use web_sys::window;

/// A single persistent string slot holding the access token.
pub trait TokenStore {
    fn get(&self) -> Option<String>;
    fn set(&self, token: &str);
    fn remove(&self);
}

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Token slot backed by `window.localStorage`.
///
/// Storage failures (private mode, quota, no window) are logged and the slot
/// reads as empty.
#[derive(Clone, Debug)]
pub struct LocalStorageStore {
    key: String,
}

impl LocalStorageStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl TokenStore for LocalStorageStore {
    fn get(&self) -> Option<String> {
        get_local_storage()?.get_item(&self.key).ok()?
    }

    fn set(&self, token: &str) {
        match get_local_storage() {
            Some(storage) => {
                if storage.set_item(&self.key, token).is_err() {
                    log::error!("Failed to write '{}' to localStorage", self.key);
                }
            }
            None => log::warn!("localStorage unavailable, token not saved"),
        }
    }

    fn remove(&self) {
        if let Some(storage) = get_local_storage() {
            if storage.remove_item(&self.key).is_err() {
                log::error!("Failed to remove '{}' from localStorage", self.key);
            }
        }
    }
}

/// In-memory slot for tests and hosts without `localStorage`.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    slot: RefCell<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        Self {
            slot: RefCell::new(Some(token.to_string())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.slot.borrow().clone()
    }

    fn set(&self, token: &str) {
        *self.slot.borrow_mut() = Some(token.to_string());
    }

    fn remove(&self) {
        self.slot.borrow_mut().take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_then_get_returns_same_value() {
        let store = MemoryTokenStore::new();
        for token in ["abc", "", "eyJhbGciOi.x.y", "with spaces"] {
            store.set(token);
            assert_eq!(store.get().as_deref(), Some(token));
        }
    }

    #[test]
    fn test_remove_is_idempotent() {
        let store = MemoryTokenStore::with_token("abc");
        store.remove();
        assert_eq!(store.get(), None);
        store.remove();
        assert_eq!(store.get(), None);
    }
}
