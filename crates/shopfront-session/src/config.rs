//! # Session Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     SHOPFRONT_REJECT_NESTED_NAMES=false                                │
//! │     SHOPFRONT_LOG=debug                                                │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/shopfront/shopfront.toml (Linux)                         │
//! │     ~/Library/Application Support/com.shopfront.shopfront/... (macOS)  │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # shopfront.toml
//! [catalog]
//! reject_nested_names = true
//!
//! [log]
//! filter = "info,shopfront=debug"
//! ```

use serde::{Deserialize, Serialize};
use shopfront_core::StoreOptions;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use crate::error::{SessionError, SessionResult};

/// Default log filter when neither `RUST_LOG` nor the config sets one.
pub const DEFAULT_LOG_FILTER: &str = "info,shopfront=debug";

// =============================================================================
// Catalog Settings
// =============================================================================

/// How the catalog is checked when a session opens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSettings {
    /// Refuse catalogs where one item name contains another.
    #[serde(default = "default_reject_nested_names")]
    pub reject_nested_names: bool,
}

fn default_reject_nested_names() -> bool {
    true
}

impl Default for CatalogSettings {
    fn default() -> Self {
        CatalogSettings {
            reject_nested_names: default_reject_nested_names(),
        }
    }
}

// =============================================================================
// Log Settings
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogSettings {
    /// `EnvFilter` directive string. `RUST_LOG` still wins when set.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

impl Default for LogSettings {
    fn default() -> Self {
        LogSettings {
            filter: default_log_filter(),
        }
    }
}

// =============================================================================
// Session Config
// =============================================================================

/// Complete session configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default)]
    pub catalog: CatalogSettings,

    #[serde(default)]
    pub log: LogSettings,
}

impl SessionConfig {
    /// Loads configuration from file (if present) and environment.
    ///
    /// ## Arguments
    /// * `config_path` - Explicit file; falls back to the platform config dir
    pub fn load(config_path: Option<PathBuf>) -> SessionResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading session config from file");
                config = Self::from_file(&path)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load session config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Parses a TOML file without applying overrides.
    pub fn from_file(path: &Path) -> SessionResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Saves configuration to file.
    pub fn save(&self, config_path: Option<PathBuf>) -> SessionResult<()> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or_else(|| SessionError::ConfigSaveFailed("No config path available".into()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| SessionError::ConfigSaveFailed(e.to_string()))?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents).map_err(|e| SessionError::ConfigSaveFailed(e.to_string()))?;

        info!(?path, "Session config saved");
        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> SessionResult<()> {
        let filter = self.log.filter.trim();
        if filter.is_empty() {
            return Err(SessionError::InvalidConfig(
                "log filter must not be empty".to_string(),
            ));
        }

        EnvFilter::try_new(filter).map_err(|e| {
            SessionError::InvalidConfig(format!("invalid log filter '{}': {}", filter, e))
        })?;

        Ok(())
    }

    /// Options handed to `Store` when the catalog is built.
    pub fn store_options(&self) -> StoreOptions {
        StoreOptions {
            reject_nested_names: self.catalog.reject_nested_names,
        }
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies `SHOPFRONT_*` overrides read through `lookup`.
    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup("SHOPFRONT_REJECT_NESTED_NAMES") {
            match parse_flag(&value) {
                Some(flag) => {
                    debug!(reject_nested_names = flag, "Overriding catalog check from environment");
                    self.catalog.reject_nested_names = flag;
                }
                None => warn!(value = %value, "Ignoring SHOPFRONT_REJECT_NESTED_NAMES"),
            }
        }

        if let Some(filter) = lookup("SHOPFRONT_LOG") {
            debug!(filter = %filter, "Overriding log filter from environment");
            self.log.filter = filter;
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "shopfront", "shopfront")
            .map(|dirs| dirs.config_dir().join("shopfront.toml"))
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn temp_config_path() -> PathBuf {
        std::env::temp_dir()
            .join(format!("shopfront-{}", uuid::Uuid::new_v4()))
            .join("shopfront.toml")
    }

    #[test]
    fn test_default_config() {
        let config = SessionConfig::default();
        assert!(config.catalog.reject_nested_names);
        assert_eq!(config.log.filter, DEFAULT_LOG_FILTER);
        assert!(config.validate().is_ok());
        assert!(config.store_options().reject_nested_names);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: SessionConfig = toml::from_str("[catalog]\nreject_nested_names = false\n").unwrap();
        assert!(!config.catalog.reject_nested_names);
        assert_eq!(config.log.filter, DEFAULT_LOG_FILTER);

        let empty: SessionConfig = toml::from_str("").unwrap();
        assert_eq!(empty, SessionConfig::default());
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [
            ("SHOPFRONT_REJECT_NESTED_NAMES", "no"),
            ("SHOPFRONT_LOG", "warn"),
        ]
        .into_iter()
        .collect();

        let mut config = SessionConfig::default();
        config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert!(!config.catalog.reject_nested_names);
        assert_eq!(config.log.filter, "warn");
    }

    #[test]
    fn test_bad_flag_override_is_ignored() {
        let mut config = SessionConfig::default();
        config.apply_overrides(|key| {
            (key == "SHOPFRONT_REJECT_NESTED_NAMES").then(|| "maybe".to_string())
        });
        assert!(config.catalog.reject_nested_names);
    }

    #[test]
    fn test_config_validation() {
        let mut config = SessionConfig::default();

        config.log.filter = "   ".to_string();
        assert!(matches!(config.validate(), Err(SessionError::InvalidConfig(_))));

        config.log.filter = "shopfront=loud".to_string();
        assert!(config.validate().is_err());

        config.log.filter = "debug".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_save_then_read_back() {
        let path = temp_config_path();
        let mut config = SessionConfig::default();
        config.catalog.reject_nested_names = false;

        config.save(Some(path.clone())).unwrap();
        let loaded = SessionConfig::from_file(&path).unwrap();

        assert_eq!(loaded, config);
        if let Some(dir) = path.parent() {
            let _ = std::fs::remove_dir_all(dir);
        }
    }

    #[test]
    fn test_load_malformed_file_fails() {
        let path = temp_config_path();
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir).unwrap();
        }
        std::fs::write(&path, "[catalog]\nreject_nested_names = \"sometimes\"\n").unwrap();

        let err = SessionConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, SessionError::ConfigLoadFailed(_)));

        if let Some(dir) = path.parent() {
            let _ = std::fs::remove_dir_all(dir);
        }
    }

    #[test]
    fn test_toml_serialization() {
        let toml_str = toml::to_string_pretty(&SessionConfig::default()).unwrap();
        assert!(toml_str.contains("[catalog]"));
        assert!(toml_str.contains("[log]"));
    }
}
