//! Key-Value Persistence
//!
//! Abstracts browser `localStorage` so the persistence helpers
//! (favorites, upload flags, install prompt, session) run in tests
//! against an in-memory map.

use std::cell::RefCell;
use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::StorageError;

/// String key-value store with `localStorage` semantics
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove(&self, key: &str);
}

/// In-memory store used by tests and as a fallback when the browser
/// refuses to hand out `localStorage`
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Read and decode a JSON value; corrupt or missing entries read as `None`
pub fn read_json<T: DeserializeOwned>(store: &impl KeyValueStore, key: &str) -> Option<T> {
    let raw = store.get(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!("discarding unreadable {key} entry: {e}");
            None
        }
    }
}

pub fn write_json<T: Serialize>(store: &impl KeyValueStore, key: &str, value: &T) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_round_trip() {
        let store = MemoryStore::new();
        write_json(&store, "numbers", &vec![1, 2, 3]).unwrap();
        let back: Option<Vec<i32>> = read_json(&store, "numbers");
        assert_eq!(back, Some(vec![1, 2, 3]));
    }

    #[test]
    fn test_corrupt_entry_reads_as_none() {
        let store = MemoryStore::new();
        store.set("numbers", "{not json").unwrap();
        let back: Option<Vec<i32>> = read_json(&store, "numbers");
        assert!(back.is_none());
    }

    #[test]
    fn test_remove() {
        let store = MemoryStore::new();
        store.set("a", "1").unwrap();
        store.remove("a");
        assert!(store.is_empty());
    }
}
