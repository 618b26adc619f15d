//! PWA Install Banner Heuristic
//!
//! Decides when to offer "Add to home screen". Returning visitors see the
//! banner; each dismissal doubles the quiet period, and after enough
//! dismissals it stops appearing.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::StorageError;
use crate::storage::{read_json, write_json, KeyValueStore};

pub const INSTALL_PROMPT_KEY: &str = "pwaInstallPrompt";
pub const INSTALL_PROMPT_VERSION: u32 = 1;

/// Page visits before the banner is offered
pub const MIN_VISITS: u32 = 3;
/// Dismissals after which the banner is never shown again
pub const MAX_DISMISSALS: u32 = 3;
const BASE_COOLDOWN_DAYS: i64 = 7;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InstallPromptState {
    /// 0 for records written before versioning
    #[serde(default)]
    pub version: u32,
    pub visits: u32,
    pub dismiss_count: u32,
    pub last_dismissed_at: Option<DateTime<Utc>>,
    pub installed: bool,
}

impl Default for InstallPromptState {
    fn default() -> Self {
        Self {
            version: INSTALL_PROMPT_VERSION,
            visits: 0,
            dismiss_count: 0,
            last_dismissed_at: None,
            installed: false,
        }
    }
}

impl InstallPromptState {
    pub fn load(store: &impl KeyValueStore) -> Self {
        let mut state: Self = read_json(store, INSTALL_PROMPT_KEY).unwrap_or_default();
        // pre-versioned records only counted visits
        if state.version < INSTALL_PROMPT_VERSION {
            state.version = INSTALL_PROMPT_VERSION;
        }
        state
    }

    pub fn save(&self, store: &impl KeyValueStore) -> Result<(), StorageError> {
        write_json(store, INSTALL_PROMPT_KEY, self)
    }

    pub fn record_visit(&mut self) {
        self.visits = self.visits.saturating_add(1);
    }

    pub fn record_dismiss(&mut self, now: DateTime<Utc>) {
        self.dismiss_count = self.dismiss_count.saturating_add(1);
        self.last_dismissed_at = Some(now);
    }

    pub fn record_installed(&mut self) {
        self.installed = true;
    }

    /// Quiet period after the latest dismissal: 7d, 14d, 28d, ...
    pub fn cooldown(&self) -> Duration {
        let doublings = self.dismiss_count.saturating_sub(1).min(10);
        Duration::days(BASE_COOLDOWN_DAYS * (1_i64 << doublings))
    }

    pub fn should_show(&self, now: DateTime<Utc>, is_standalone: bool, prompt_available: bool) -> bool {
        if !prompt_available || is_standalone || self.installed {
            return false;
        }
        if self.visits < MIN_VISITS || self.dismiss_count >= MAX_DISMISSALS {
            return false;
        }
        match self.last_dismissed_at {
            Some(at) => now - at >= self.cooldown(),
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use chrono::TimeZone;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 10, 8, 0, 0).unwrap()
    }

    fn visited(n: u32) -> InstallPromptState {
        let mut state = InstallPromptState::default();
        (0..n).for_each(|_| state.record_visit());
        state
    }

    #[test]
    fn test_needs_visits_and_prompt() {
        assert!(!visited(2).should_show(t0(), false, true));
        assert!(visited(3).should_show(t0(), false, true));
        assert!(!visited(3).should_show(t0(), false, false));
        assert!(!visited(3).should_show(t0(), true, true));
    }

    #[test]
    fn test_dismiss_cooldown_doubles() {
        let mut state = visited(5);
        state.record_dismiss(t0());
        assert_eq!(state.cooldown(), Duration::days(7));
        assert!(!state.should_show(t0() + Duration::days(6), false, true));
        assert!(state.should_show(t0() + Duration::days(7), false, true));

        let second = t0() + Duration::days(8);
        state.record_dismiss(second);
        assert_eq!(state.cooldown(), Duration::days(14));
        assert!(!state.should_show(second + Duration::days(13), false, true));
        assert!(state.should_show(second + Duration::days(14), false, true));
    }

    #[test]
    fn test_stops_after_max_dismissals_or_install() {
        let mut state = visited(5);
        for _ in 0..MAX_DISMISSALS {
            state.record_dismiss(t0());
        }
        assert!(!state.should_show(t0() + Duration::days(365), false, true));

        let mut installed = visited(5);
        installed.record_installed();
        assert!(!installed.should_show(t0(), false, true));
    }

    #[test]
    fn test_persists_and_loads_legacy_record() {
        let store = MemoryStore::new();
        store.set(INSTALL_PROMPT_KEY, r#"{"visits": 4}"#).unwrap();
        let raw: InstallPromptState = serde_json::from_str(r#"{"visits": 4}"#).unwrap();
        assert_eq!(raw.version, 0);

        let mut state = InstallPromptState::load(&store);
        assert_eq!(state.visits, 4);
        assert_eq!(state.version, INSTALL_PROMPT_VERSION);

        state.record_visit();
        state.save(&store).unwrap();
        assert_eq!(InstallPromptState::load(&store).visits, 5);
    }
}
