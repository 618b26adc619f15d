//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use skate_core::favorites::{self, FavoriteItem, FavoriteKind, FavoriteParams};
use skate_core::StorageError;

use crate::storage::BrowserStorage;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Favorites as last read from local storage
    pub favorites: Vec<FavoriteItem>,
    /// Received tossies still waiting to be opened (nav badge)
    pub unopened_tossies: usize,
}

impl AppState {
    pub fn load() -> Self {
        Self {
            favorites: favorites::load_favorites(&BrowserStorage::open()),
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_is_favorite(store: &AppStore, params: &FavoriteParams) -> bool {
    let id = params.id();
    store.favorites().read().iter().any(|item| item.matches(params.kind(), &id))
}

/// Toggle in local storage and mirror the result; returns the new membership
pub fn store_toggle_favorite(store: &AppStore, params: &FavoriteParams, name: &str) -> Result<bool, StorageError> {
    let storage = BrowserStorage::open();
    let now_favorite = favorites::toggle_favorite(&storage, params, name)?;
    *store.favorites().write() = favorites::load_favorites(&storage);
    Ok(now_favorite)
}

pub fn store_remove_favorite(store: &AppStore, kind: FavoriteKind, id: &str) -> Result<(), StorageError> {
    let items = favorites::remove_favorite(&BrowserStorage::open(), kind, id)?;
    *store.favorites().write() = items;
    Ok(())
}

pub fn store_set_unopened(store: &AppStore, count: usize) {
    *store.unopened_tossies().write() = count;
}
