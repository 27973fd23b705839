//! # Session Error Types
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Session Error Categories                            │
//! │                                                                         │
//! │  ┌──────────────────────┐        ┌──────────────────────┐              │
//! │  │    Configuration     │        │       Catalog        │              │
//! │  │                      │        │                      │              │
//! │  │  InvalidConfig       │        │  Catalog(CatalogErr) │              │
//! │  │  ConfigLoadFailed    │        │                      │              │
//! │  │  ConfigSaveFailed    │        │                      │              │
//! │  └──────────────────────┘        └──────────────────────┘              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Cart errors are not wrapped: `Session` returns `CartError` unchanged.

use shopfront_core::CatalogError;
use thiserror::Error;

/// Result type alias for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Errors raised while configuring or opening a session.
#[derive(Debug, Error)]
pub enum SessionError {
    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// Config values are present but unusable.
    #[error("Invalid session configuration: {0}")]
    InvalidConfig(String),

    /// Failed to read or parse the config file.
    #[error("Failed to load config: {0}")]
    ConfigLoadFailed(String),

    /// Failed to write the config file.
    #[error("Failed to save config: {0}")]
    ConfigSaveFailed(String),

    /// A global tracing subscriber was already installed.
    #[error("Failed to initialize tracing: {0}")]
    TracingInit(String),

    // =========================================================================
    // Catalog Errors
    // =========================================================================
    /// The catalog could not be turned into a store.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

// =============================================================================
// Error Conversions
// =============================================================================

impl From<std::io::Error> for SessionError {
    fn from(err: std::io::Error) -> Self {
        SessionError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::de::Error> for SessionError {
    fn from(err: toml::de::Error) -> Self {
        SessionError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::ser::Error> for SessionError {
    fn from(err: toml::ser::Error) -> Self {
        SessionError::ConfigSaveFailed(err.to_string())
    }
}

impl SessionError {
    /// Returns true if this error indicates a configuration problem.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            SessionError::InvalidConfig(_)
                | SessionError::ConfigLoadFailed(_)
                | SessionError::ConfigSaveFailed(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_category() {
        assert!(SessionError::InvalidConfig("bad".into()).is_config_error());
        assert!(SessionError::ConfigLoadFailed("io".into()).is_config_error());
        assert!(!SessionError::Catalog(CatalogError::DuplicateName("a".into())).is_config_error());
    }

    #[test]
    fn test_catalog_error_is_transparent() {
        let err: SessionError = CatalogError::DuplicateName("soap".into()).into();
        assert_eq!(
            err.to_string(),
            "Item name 'soap' appears more than once in the catalog"
        );
    }

    #[test]
    fn test_toml_error_maps_to_load_failure() {
        let parse_err = toml::from_str::<toml::Value>("not = [valid").unwrap_err();
        let err: SessionError = parse_err.into();
        assert!(matches!(err, SessionError::ConfigLoadFailed(_)));
    }
}
