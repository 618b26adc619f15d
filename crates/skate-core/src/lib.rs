//! Skate Core
//!
//! Domain layer for the skating results browser:
//! - models: JSON shapes consumed from the results API
//! - pure helpers: names, scoring, stats, timezones, calendar links
//! - local persistence: favorites, upload flags, install prompt, session
//!
//! Nothing here touches the DOM, so the whole crate is tested natively.

pub mod calendar;
pub mod config;
pub mod error;
pub mod favorites;
pub mod format;
pub mod install_prompt;
pub mod models;
pub mod names;
pub mod profile;
pub mod routes;
pub mod scoring;
pub mod session;
pub mod stats;
pub mod storage;
pub mod timezones;
pub mod tossies;
pub mod uploads;

pub use config::AppConfig;
pub use error::{ConfigError, StorageError};
pub use routes::Page;
pub use storage::{KeyValueStore, MemoryStore};
