//! Domain-level errors

use thiserror::Error;

/// Errors from the key-value persistence layer
#[derive(Debug, Error)]
pub enum StorageError {
    /// Browser storage missing (private mode, disabled, SSR)
    #[error("storage unavailable")]
    Unavailable,

    /// The backend refused the write (quota, security error)
    #[error("storage write failed: {0}")]
    WriteFailed(String),

    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Errors while resolving the compiled-in configuration
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("API base URL must start with http:// or https://, got {0:?}")]
    InvalidBaseUrl(String),

    #[error("invalid value for {name}: {value:?}")]
    InvalidValue { name: &'static str, value: String },
}
