//! Site configuration.
//!
//! The landing bundle embeds `site.toml` at build time; every key is
//! optional and falls back to the defaults below.

use serde::Deserialize;
use tracing::warn;

use crate::error::ConfigError;

/// Table leads are inserted into when none is configured.
pub const DEFAULT_LEADS_TABLE: &str = "contact_submissions";

/// Root configuration structure
#[derive(Debug, Default, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SiteConfig {
    /// Hosted table the form writes to
    pub backend: BackendConfig,
    /// Browser console logging
    pub logging: LoggingConfig,
}

/// Hosted Postgres REST endpoint
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BackendConfig {
    /// Project base URL, e.g. `https://abc.supabase.co`. Empty disables submission.
    pub url: String,
    /// Public (anon) API key. Sent as both `apikey` and bearer token.
    pub anon_key: String,
    /// Target table.
    pub table: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            anon_key: String::new(),
            table: DEFAULT_LEADS_TABLE.to_string(),
        }
    }
}

impl BackendConfig {
    /// A backend is usable once it has a URL.
    pub fn is_configured(&self) -> bool {
        !self.url.trim().is_empty()
    }

    /// Replace url/key with non-empty overrides (build-time env in the bundle).
    pub fn with_overrides(mut self, url: Option<&str>, anon_key: Option<&str>) -> Self {
        if let Some(url) = url.filter(|u| !u.trim().is_empty()) {
            self.url = url.trim().to_string();
        }
        if let Some(key) = anon_key.filter(|k| !k.trim().is_empty()) {
            self.anon_key = key.trim().to_string();
        }
        self
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing` filter directive (trace, debug, info, warn, error, or a full EnvFilter string)
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl SiteConfig {
    /// Parse TOML source.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Parse TOML source, logging and falling back to defaults when invalid.
    pub fn load_or_default(source: &str) -> Self {
        match Self::from_toml_str(source) {
            Ok(config) => config,
            Err(e) => {
                warn!("[leadform][config] {e}; using defaults");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert!(!config.backend.is_configured());
        assert_eq!(config.backend.table, DEFAULT_LEADS_TABLE);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_empty_source_is_default() {
        let config = SiteConfig::from_toml_str("").unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_load_valid_config() {
        let config = SiteConfig::from_toml_str(
            r#"
[backend]
url = "https://abc.supabase.co"
anon_key = "public-anon"

[logging]
level = "debug"
"#,
        )
        .unwrap();
        assert!(config.backend.is_configured());
        assert_eq!(config.backend.url, "https://abc.supabase.co");
        assert_eq!(config.backend.anon_key, "public-anon");
        assert_eq!(config.backend.table, DEFAULT_LEADS_TABLE);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_malformed_config_errors() {
        let err = SiteConfig::from_toml_str("[backend]\nurl = 42").unwrap_err();
        assert!(err.to_string().starts_with("failed to parse site config"));
    }

    #[test]
    fn test_load_or_default_recovers() {
        let config = SiteConfig::load_or_default("this is not toml = = =");
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_overrides_skip_blank_values() {
        let backend = BackendConfig::default()
            .with_overrides(Some("https://xyz.supabase.co"), Some("  "));
        assert_eq!(backend.url, "https://xyz.supabase.co");
        assert!(backend.anon_key.is_empty());

        let backend = backend.with_overrides(None, Some("key"));
        assert_eq!(backend.url, "https://xyz.supabase.co");
        assert_eq!(backend.anon_key, "key");
    }
}
