//! Recently Uploaded Images
//!
//! Thumbnails are generated asynchronously after an upload, so for a short
//! while the thumbnail URL 404s. Freshly uploaded URLs are flagged with an
//! expiry; while flagged, the original image is shown instead.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::StorageError;
use crate::storage::{read_json, write_json, KeyValueStore};

pub const RECENT_UPLOADS_KEY: &str = "recentUploads";
pub const RECENT_UPLOADS_VERSION: u32 = 1;

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "gif", "avif"];
const THUMBNAIL_DIR: &str = "thumbnails";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
struct RecentUploads {
    version: u32,
    /// url -> expiry (unix millis)
    entries: BTreeMap<String, i64>,
}

fn load(store: &impl KeyValueStore) -> RecentUploads {
    match read_json::<Value>(store, RECENT_UPLOADS_KEY) {
        Some(value) if value.get("version").and_then(Value::as_u64) == Some(u64::from(RECENT_UPLOADS_VERSION)) => {
            serde_json::from_value(value).unwrap_or_default()
        }
        // legacy bare URL arrays carried no expiry; treat them as expired
        Some(_) | None => RecentUploads::default(),
    }
}

/// Serve `url` at full size until `ttl` from `now` has elapsed
pub fn flag_recently_uploaded(
    store: &impl KeyValueStore,
    url: &str,
    ttl: Duration,
    now: DateTime<Utc>,
) -> Result<(), StorageError> {
    let mut uploads = load(store);
    let now_ms = now.timestamp_millis();
    uploads.entries.retain(|_, expires| *expires > now_ms);
    uploads.entries.insert(url.to_string(), (now + ttl).timestamp_millis());
    uploads.version = RECENT_UPLOADS_VERSION;
    write_json(store, RECENT_UPLOADS_KEY, &uploads)
}

pub fn is_recently_uploaded(store: &impl KeyValueStore, url: &str, now: DateTime<Utc>) -> bool {
    load(store)
        .entries
        .get(url)
        .is_some_and(|expires| *expires > now.timestamp_millis())
}

/// Thumbnail location: `.../dir/name.jpg` → `.../dir/thumbnails/name.jpg`.
/// Non-http(s) URLs and non-image files are returned unchanged.
pub fn thumbnail_url(url: &str) -> String {
    if !(url.starts_with("https://") || url.starts_with("http://")) {
        return url.to_string();
    }
    let path_end = url.find(['?', '#']).unwrap_or(url.len());
    let (path, suffix) = url.split_at(path_end);
    let Some(slash) = path.rfind('/') else {
        return url.to_string();
    };
    let (dir, file) = path.split_at(slash + 1);

    let is_image = file
        .rsplit_once('.')
        .is_some_and(|(_, ext)| IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()));
    let scheme_only = dir.matches('/').count() < 3;
    if !is_image || scheme_only || dir.ends_with(&format!("/{THUMBNAIL_DIR}/")) {
        return url.to_string();
    }
    format!("{dir}{THUMBNAIL_DIR}/{file}{suffix}")
}

/// URL to render for an image: the original while recently uploaded, else the thumbnail
pub fn get_thumbnail_url(store: &impl KeyValueStore, url: &str, now: DateTime<Utc>) -> String {
    if is_recently_uploaded(store, url, now) {
        url.to_string()
    } else {
        thumbnail_url(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use chrono::TimeZone;

    const AVATAR: &str = "https://cdn.example.org/avatars/42/me.jpg";

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_thumbnail_url() {
        assert_eq!(thumbnail_url(AVATAR), "https://cdn.example.org/avatars/42/thumbnails/me.jpg");
        assert_eq!(
            thumbnail_url("https://cdn.example.org/a/b.PNG?v=3"),
            "https://cdn.example.org/a/thumbnails/b.PNG?v=3"
        );
        assert_eq!(thumbnail_url("https://cdn.example.org/a/thumbnails/b.png"), "https://cdn.example.org/a/thumbnails/b.png");
        assert_eq!(thumbnail_url("https://cdn.example.org/doc.pdf"), "https://cdn.example.org/doc.pdf");
        assert_eq!(thumbnail_url("https://cdn.example.org"), "https://cdn.example.org");
        assert_eq!(thumbnail_url("data:image/png;base64,AAAA"), "data:image/png;base64,AAAA");
    }

    #[test]
    fn test_flag_serves_original_until_ttl() {
        let store = MemoryStore::new();
        flag_recently_uploaded(&store, AVATAR, Duration::minutes(10), t0()).unwrap();

        assert_eq!(get_thumbnail_url(&store, AVATAR, t0() + Duration::minutes(9)), AVATAR);
        assert_eq!(
            get_thumbnail_url(&store, AVATAR, t0() + Duration::minutes(10)),
            thumbnail_url(AVATAR)
        );
    }

    #[test]
    fn test_unflagged_url_gets_thumbnail() {
        let store = MemoryStore::new();
        assert_eq!(get_thumbnail_url(&store, AVATAR, t0()), thumbnail_url(AVATAR));
    }

    #[test]
    fn test_expired_flags_pruned_on_write() {
        let store = MemoryStore::new();
        flag_recently_uploaded(&store, "https://cdn.example.org/a/old.jpg", Duration::seconds(1), t0()).unwrap();
        flag_recently_uploaded(&store, AVATAR, Duration::minutes(5), t0() + Duration::minutes(1)).unwrap();
        assert_eq!(load(&store).entries.len(), 1);
    }

    #[test]
    fn test_legacy_array_is_dropped() {
        let store = MemoryStore::new();
        store.set(RECENT_UPLOADS_KEY, &format!("[\"{AVATAR}\"]")).unwrap();
        assert!(!is_recently_uploaded(&store, AVATAR, t0()));
        flag_recently_uploaded(&store, AVATAR, Duration::minutes(1), t0()).unwrap();
        assert!(is_recently_uploaded(&store, AVATAR, t0()));
    }
}
