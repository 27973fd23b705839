//! # Logging Setup
//!
//! Installs the global `tracing` subscriber.
//!
//! ## Filter Resolution
//! ```text
//! RUST_LOG set and valid? ──yes──► use it
//!        │ no
//!        ▼
//! [log] filter from SessionConfig (default "info,shopfront=debug")
//! ```
//!
//! shopfront-core only emits events; it never installs a subscriber.

use tracing_subscriber::EnvFilter;

use crate::config::LogSettings;
use crate::error::{SessionError, SessionResult};

/// Builds the `EnvFilter` that `init_tracing` would install.
pub fn build_filter(settings: &LogSettings) -> SessionResult<EnvFilter> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.filter))
        .map_err(|e| {
            SessionError::InvalidConfig(format!("invalid log filter '{}': {}", settings.filter, e))
        })
}

/// Initializes tracing (logging) for the process.
///
/// Fails if a global subscriber is already installed.
pub fn init_tracing(settings: &LogSettings) -> SessionResult<()> {
    let filter = build_filter(settings)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| SessionError::TracingInit(e.to_string()))
}
