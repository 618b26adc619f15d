//! Browser Storage
//!
//! `localStorage` behind the core `KeyValueStore` trait. When the browser
//! refuses storage (private mode, disabled cookies) values live in memory
//! for the rest of the page session.

use skate_core::{KeyValueStore, MemoryStore, StorageError};
use web_sys::Storage;

thread_local! {
    static FALLBACK: MemoryStore = MemoryStore::new();
}

#[derive(Clone)]
pub struct BrowserStorage {
    local: Option<Storage>,
}

impl BrowserStorage {
    pub fn open() -> Self {
        let local = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if local.is_none() {
            tracing::warn!("localStorage unavailable, using in-memory storage");
        }
        Self { local }
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        match &self.local {
            Some(storage) => storage.get_item(key).ok().flatten(),
            None => FALLBACK.with(|m| m.get(key)),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        match &self.local {
            Some(storage) => storage
                .set_item(key, value)
                .map_err(|e| StorageError::WriteFailed(format!("{e:?}"))),
            None => FALLBACK.with(|m| m.set(key, value)),
        }
    }

    fn remove(&self, key: &str) {
        match &self.local {
            Some(storage) => {
                if let Err(e) = storage.remove_item(key) {
                    tracing::warn!("failed to remove {key}: {e:?}");
                }
            }
            None => FALLBACK.with(|m| m.remove(key)),
        }
    }
}
