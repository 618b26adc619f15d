//! Favorites
//!
//! Bookmarked competitions, events and skaters, kept in local storage as a
//! JSON array under one key. Each entry records the schema version it was
//! written with; older entries are upgraded when the list is read.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::StorageError;
use crate::routes::Page;
use crate::storage::{read_json, write_json, KeyValueStore};

pub const FAVORITES_KEY: &str = "favorites";
pub const FAVORITES_VERSION: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FavoriteKind {
    Competition,
    Event,
    Skater,
}

impl FavoriteKind {
    pub fn label(&self) -> &'static str {
        match self {
            FavoriteKind::Competition => "Competitions",
            FavoriteKind::Event => "Events",
            FavoriteKind::Skater => "Skaters",
        }
    }
}

/// Natural key of a favorite target
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FavoriteParams {
    Competition { year: i32, ijs_id: String },
    Event { year: i32, ijs_id: String, event_id: String },
    Skater { skater_id: u64 },
}

impl FavoriteParams {
    pub fn kind(&self) -> FavoriteKind {
        match self {
            FavoriteParams::Competition { .. } => FavoriteKind::Competition,
            FavoriteParams::Event { .. } => FavoriteKind::Event,
            FavoriteParams::Skater { .. } => FavoriteKind::Skater,
        }
    }

    /// Deterministic id: `{year}-{ijsId}`, `{year}-{ijsId}-{eventId}` or `{skaterId}`
    pub fn id(&self) -> String {
        match self {
            FavoriteParams::Competition { year, ijs_id } => format!("{year}-{ijs_id}"),
            FavoriteParams::Event { year, ijs_id, event_id } => format!("{year}-{ijs_id}-{event_id}"),
            FavoriteParams::Skater { skater_id } => skater_id.to_string(),
        }
    }

    pub fn page(&self) -> Page {
        match self.clone() {
            FavoriteParams::Competition { year, ijs_id } => Page::Competition { year, ijs_id },
            FavoriteParams::Event { year, ijs_id, event_id } => Page::Event { year, ijs_id, event_id },
            FavoriteParams::Skater { skater_id } => Page::Skater { id: skater_id },
        }
    }

    /// Recover params from a stored id. Event ids split on the last dash,
    /// so IJS ids containing dashes still parse.
    pub fn from_id(kind: FavoriteKind, id: &str) -> Option<Self> {
        match kind {
            FavoriteKind::Competition => {
                let (year, ijs_id) = id.split_once('-')?;
                Some(FavoriteParams::Competition { year: year.parse().ok()?, ijs_id: non_empty(ijs_id)? })
            }
            FavoriteKind::Event => {
                let (rest, event_id) = id.rsplit_once('-')?;
                let (year, ijs_id) = rest.split_once('-')?;
                Some(FavoriteParams::Event {
                    year: year.parse().ok()?,
                    ijs_id: non_empty(ijs_id)?,
                    event_id: non_empty(event_id)?,
                })
            }
            FavoriteKind::Skater => Some(FavoriteParams::Skater { skater_id: id.parse().ok()? }),
        }
    }

    /// Params from the v1 `params` object (`year`, `ijsId`, `eventId`, `skaterId`)
    fn from_legacy_params(kind: FavoriteKind, params: &Value) -> Option<Self> {
        let year = || value_string(params.get("year")?)?.parse().ok();
        let ijs_id = || value_string(params.get("ijsId")?);
        match kind {
            FavoriteKind::Competition => Some(FavoriteParams::Competition { year: year()?, ijs_id: ijs_id()? }),
            FavoriteKind::Event => Some(FavoriteParams::Event {
                year: year()?,
                ijs_id: ijs_id()?,
                event_id: value_string(params.get("eventId")?)?,
            }),
            FavoriteKind::Skater => {
                let raw = params.get("skaterId").or_else(|| params.get("id"))?;
                Some(FavoriteParams::Skater { skater_id: value_string(raw)?.parse().ok()? })
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoriteItem {
    #[serde(rename = "type")]
    pub kind: FavoriteKind,
    pub id: String,
    pub name: String,
    pub url: String,
    pub version: u32,
}

impl FavoriteItem {
    pub fn new(params: &FavoriteParams, name: impl Into<String>) -> Self {
        Self {
            kind: params.kind(),
            id: params.id(),
            name: name.into(),
            url: params.page().path(),
            version: FAVORITES_VERSION,
        }
    }

    pub fn matches(&self, kind: FavoriteKind, id: &str) -> bool {
        self.kind == kind && self.id == id
    }
}

pub fn favorite_id(params: &FavoriteParams) -> String {
    params.id()
}

pub fn favorite_url(params: &FavoriteParams) -> String {
    params.page().path()
}

/// Load the list, upgrading old entries and dropping unreadable ones.
/// The upgraded list is written back so migration runs once.
pub fn load_favorites(store: &impl KeyValueStore) -> Vec<FavoriteItem> {
    let raw: Vec<Value> = match read_json::<Value>(store, FAVORITES_KEY) {
        Some(Value::Array(entries)) => entries,
        Some(_) => {
            tracing::warn!("favorites entry is not a list, resetting");
            Vec::new()
        }
        None => return Vec::new(),
    };

    let raw_len = raw.len();
    let mut migrated = false;
    let mut items: Vec<FavoriteItem> = Vec::with_capacity(raw_len);
    for entry in raw {
        let Some((item, changed)) = migrate_entry(entry) else {
            continue;
        };
        migrated |= changed;
        if !items.iter().any(|existing| existing.matches(item.kind, &item.id)) {
            items.push(item);
        }
    }

    if migrated || items.len() != raw_len {
        tracing::info!("migrated favorites: {} stored, {} kept", raw_len, items.len());
        if let Err(e) = save_favorites(store, &items) {
            tracing::warn!("failed to write migrated favorites: {e}");
        }
    }
    items
}

pub fn save_favorites(store: &impl KeyValueStore, items: &[FavoriteItem]) -> Result<(), StorageError> {
    write_json(store, FAVORITES_KEY, &items)
}

/// Add or rename a favorite; returns the updated list
pub fn add_favorite(
    store: &impl KeyValueStore,
    params: &FavoriteParams,
    name: &str,
) -> Result<Vec<FavoriteItem>, StorageError> {
    let mut items = load_favorites(store);
    let id = params.id();
    match items.iter_mut().find(|item| item.matches(params.kind(), &id)) {
        Some(existing) => existing.name = name.to_string(),
        None => items.push(FavoriteItem::new(params, name)),
    }
    save_favorites(store, &items)?;
    Ok(items)
}

pub fn remove_favorite(
    store: &impl KeyValueStore,
    kind: FavoriteKind,
    id: &str,
) -> Result<Vec<FavoriteItem>, StorageError> {
    let mut items = load_favorites(store);
    items.retain(|item| !item.matches(kind, id));
    save_favorites(store, &items)?;
    Ok(items)
}

pub fn is_favorite(store: &impl KeyValueStore, kind: FavoriteKind, id: &str) -> bool {
    load_favorites(store).iter().any(|item| item.matches(kind, id))
}

/// Flip membership; returns whether the target is a favorite afterwards
pub fn toggle_favorite(store: &impl KeyValueStore, params: &FavoriteParams, name: &str) -> Result<bool, StorageError> {
    if is_favorite(store, params.kind(), &params.id()) {
        remove_favorite(store, params.kind(), &params.id())?;
        Ok(false)
    } else {
        add_favorite(store, params, name)?;
        Ok(true)
    }
}

/// Upgrade one stored entry; `(item, changed)` or `None` when unrecoverable
fn migrate_entry(entry: Value) -> Option<(FavoriteItem, bool)> {
    let version = entry.get("version").and_then(Value::as_u64).unwrap_or(0);
    if version == u64::from(FAVORITES_VERSION) {
        if let Ok(item) = serde_json::from_value::<FavoriteItem>(entry.clone()) {
            return Some((item, false));
        }
    }

    let kind: FavoriteKind = serde_json::from_value(entry.get("type")?.clone()).ok()?;
    let params = match entry.get("params") {
        Some(params) => FavoriteParams::from_legacy_params(kind, params),
        None => None,
    }
    .or_else(|| FavoriteParams::from_id(kind, &value_string(entry.get("id")?)?))?;

    let name = entry
        .get("name")
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| params.id());
    Some((FavoriteItem::new(&params, name), true))
}

fn value_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => non_empty(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn non_empty(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use serde_json::json;

    fn competition() -> FavoriteParams {
        FavoriteParams::Competition { year: 2024, ijs_id: "35".into() }
    }

    #[test]
    fn test_ids_and_urls() {
        let item = FavoriteItem::new(&competition(), "Sectionals");
        assert_eq!(item.id, "2024-35");
        assert_eq!(item.url, "/competitions/2024/35");
        assert_eq!(item.version, FAVORITES_VERSION);

        let event = FavoriteParams::Event { year: 2019, ijs_id: "nqs-2".into(), event_id: "14".into() };
        assert_eq!(event.id(), "2019-nqs-2-14");
        assert_eq!(FavoriteParams::from_id(FavoriteKind::Event, &event.id()), Some(event));
        assert_eq!(FavoriteParams::Skater { skater_id: 88 }.id(), "88");
        assert_eq!(favorite_id(&competition()), "2024-35");
        assert_eq!(favorite_url(&FavoriteParams::Skater { skater_id: 88 }), "/skaters/88");
    }

    #[test]
    fn test_adding_twice_stores_one_entry() {
        let store = MemoryStore::new();
        add_favorite(&store, &competition(), "Sectionals").unwrap();
        let items = add_favorite(&store, &competition(), "Sectional Final").unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Sectional Final");
        assert_eq!(load_favorites(&store).len(), 1);
    }

    #[test]
    fn test_same_id_different_kind_are_distinct() {
        let store = MemoryStore::new();
        add_favorite(&store, &FavoriteParams::Skater { skater_id: 2024 }, "Skater").unwrap();
        add_favorite(&store, &competition(), "Comp").unwrap();
        assert_eq!(load_favorites(&store).len(), 2);
    }

    #[test]
    fn test_toggle_and_remove() {
        let store = MemoryStore::new();
        let skater = FavoriteParams::Skater { skater_id: 7 };
        assert!(toggle_favorite(&store, &skater, "Kaori").unwrap());
        assert!(is_favorite(&store, FavoriteKind::Skater, "7"));
        assert!(!toggle_favorite(&store, &skater, "Kaori").unwrap());
        assert!(!is_favorite(&store, FavoriteKind::Skater, "7"));
        assert!(remove_favorite(&store, FavoriteKind::Skater, "7").unwrap().is_empty());
    }

    #[test]
    fn test_migrates_legacy_entries_on_read() {
        let store = MemoryStore::new();
        let legacy = json!([
            {"type": "competition", "params": {"year": 2022, "ijsId": 41}, "name": "Old Comp"},
            {"type": "skater", "id": "15", "name": "Old Skater"},
            {"type": "event", "params": {"year": "2021", "ijsId": "9", "eventId": 3}},
            {"type": "event", "id": "garbage"},
            {"type": "spaceship", "id": "1"},
            "not even an object"
        ]);
        store.set(FAVORITES_KEY, &legacy.to_string()).unwrap();

        let items = load_favorites(&store);
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].id, "2022-41");
        assert_eq!(items[0].url, "/competitions/2022/41");
        assert_eq!(items[1].url, "/skaters/15");
        assert_eq!(items[2].id, "2021-9-3");
        assert_eq!(items[2].name, "2021-9-3");
        assert!(items.iter().all(|i| i.version == FAVORITES_VERSION));

        // written back in the current schema
        let stored: Vec<FavoriteItem> = read_json(&store, FAVORITES_KEY).unwrap();
        assert_eq!(stored, items);
    }

    #[test]
    fn test_duplicate_entries_collapse_on_read() {
        let store = MemoryStore::new();
        let item = FavoriteItem::new(&competition(), "A");
        save_favorites(&store, &[item.clone(), item.clone()]).unwrap();
        assert_eq!(load_favorites(&store), vec![item]);
    }

    #[test]
    fn test_non_list_value_resets() {
        let store = MemoryStore::new();
        store.set(FAVORITES_KEY, r#"{"oops": true}"#).unwrap();
        assert!(load_favorites(&store).is_empty());
    }
}
