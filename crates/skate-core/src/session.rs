//! Signed-in Session
//!
//! Bearer token and user, persisted so a reload keeps the user signed in.

use serde::{Deserialize, Serialize};

use crate::error::StorageError;
use crate::models::{AuthResponse, User};
use crate::storage::{read_json, write_json, KeyValueStore};

pub const SESSION_KEY: &str = "session";
pub const SESSION_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub version: u32,
    pub token: String,
    pub user: User,
}

impl From<AuthResponse> for Session {
    fn from(auth: AuthResponse) -> Self {
        Self { version: SESSION_VERSION, token: auth.token, user: auth.user }
    }
}

impl Session {
    /// Stored session; records from another schema version are discarded
    pub fn load(store: &impl KeyValueStore) -> Option<Self> {
        let session: Session = read_json(store, SESSION_KEY)?;
        if session.version != SESSION_VERSION || session.token.is_empty() {
            store.remove(SESSION_KEY);
            return None;
        }
        Some(session)
    }

    pub fn save(&self, store: &impl KeyValueStore) -> Result<(), StorageError> {
        write_json(store, SESSION_KEY, self)
    }

    pub fn clear(store: &impl KeyValueStore) {
        store.remove(SESSION_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn auth() -> AuthResponse {
        AuthResponse {
            token: "tok".into(),
            user: User { id: 5, username: "lutz".into(), display_name: None, avatar_url: None },
        }
    }

    #[test]
    fn test_save_load_clear() {
        let store = MemoryStore::new();
        assert!(Session::load(&store).is_none());

        let session = Session::from(auth());
        session.save(&store).unwrap();
        assert_eq!(Session::load(&store), Some(session));

        Session::clear(&store);
        assert!(Session::load(&store).is_none());
    }

    #[test]
    fn test_other_version_discarded() {
        let store = MemoryStore::new();
        let mut session = Session::from(auth());
        session.version = 0;
        session.save(&store).unwrap();
        assert!(Session::load(&store).is_none());
        assert!(store.get(SESSION_KEY).is_none());
    }
}
