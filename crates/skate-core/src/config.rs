//! Application Configuration
//!
//! Values are baked in at build time from environment variables
//! (`SKATE_API_URL`, `SKATE_GOOGLE_CLIENT_ID`, `SKATE_UPLOAD_FLAG_TTL_SECS`,
//! `SKATE_LOG_LEVEL`); a static bundle has no runtime environment.

use chrono::Duration;
use tracing::Level;

use crate::error::ConfigError;

const DEFAULT_API_URL: &str = "http://localhost:8000/api";
const DEFAULT_UPLOAD_FLAG_TTL_SECS: i64 = 600;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// REST API root, without trailing slash
    pub api_base_url: String,
    /// Google Identity Services client id; sign-in is hidden when absent
    pub google_client_id: Option<String>,
    /// How long a freshly uploaded image is served at full size
    pub upload_flag_ttl: Duration,
    pub log_level: Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            google_client_id: None,
            upload_flag_ttl: Duration::seconds(DEFAULT_UPLOAD_FLAG_TTL_SECS),
            log_level: Level::INFO,
        }
    }
}

impl AppConfig {
    /// Configuration captured from the build environment
    pub fn compiled() -> Result<Self, ConfigError> {
        Self::from_values(
            option_env!("SKATE_API_URL"),
            option_env!("SKATE_GOOGLE_CLIENT_ID"),
            option_env!("SKATE_UPLOAD_FLAG_TTL_SECS"),
            option_env!("SKATE_LOG_LEVEL"),
        )
    }

    /// Build from raw optional values; blanks fall back to defaults
    pub fn from_values(
        api_url: Option<&str>,
        google_client_id: Option<&str>,
        upload_ttl_secs: Option<&str>,
        log_level: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(url) = non_blank(api_url) {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::InvalidBaseUrl(url.to_string()));
            }
            config.api_base_url = url.trim_end_matches('/').to_string();
        }

        config.google_client_id = non_blank(google_client_id).map(str::to_string);

        if let Some(raw) = non_blank(upload_ttl_secs) {
            let secs: i64 = raw
                .parse()
                .ok()
                .filter(|s| *s >= 0)
                .ok_or_else(|| ConfigError::InvalidValue {
                    name: "SKATE_UPLOAD_FLAG_TTL_SECS",
                    value: raw.to_string(),
                })?;
            config.upload_flag_ttl = Duration::seconds(secs);
        }

        if let Some(raw) = non_blank(log_level) {
            config.log_level = raw.parse().map_err(|_| ConfigError::InvalidValue {
                name: "SKATE_LOG_LEVEL",
                value: raw.to_string(),
            })?;
        }

        Ok(config)
    }

    /// Join an API path onto the base URL
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url, path.trim_start_matches('/'))
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        let config = AppConfig::from_values(None, None, None, Some("  ")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let config = AppConfig::from_values(Some("https://api.example.org/v1/"), None, None, None).unwrap();
        assert_eq!(config.api_base_url, "https://api.example.org/v1");
        assert_eq!(config.endpoint("/skaters/12"), "https://api.example.org/v1/skaters/12");
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            AppConfig::from_values(Some("ftp://x"), None, None, None),
            Err(ConfigError::InvalidBaseUrl(_))
        ));
        assert!(AppConfig::from_values(None, None, Some("-5"), None).is_err());
        assert!(AppConfig::from_values(None, None, None, Some("chatty")).is_err());
    }

    #[test]
    fn test_parses_ttl_and_level() {
        let config = AppConfig::from_values(None, Some("abc.apps.googleusercontent.com"), Some("30"), Some("debug")).unwrap();
        assert_eq!(config.upload_flag_ttl, Duration::seconds(30));
        assert_eq!(config.log_level, Level::DEBUG);
        assert_eq!(config.google_client_id.as_deref(), Some("abc.apps.googleusercontent.com"));
    }
}
