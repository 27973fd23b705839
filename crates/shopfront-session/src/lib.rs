//! # shopfront-session: Customer Sessions for Shopfront
//!
//! Wraps `shopfront-core` with the parts that touch the outside world:
//! configuration files, environment variables and the tracing subscriber.
//!
//! ## Module Organization
//! ```text
//! shopfront_session/
//! ├── lib.rs       ◄─── You are here (re-exports)
//! ├── config.rs    ◄─── SessionConfig: TOML + SHOPFRONT_* overrides
//! ├── logging.rs   ◄─── tracing-subscriber setup
//! ├── session.rs   ◄─── Session: one customer, one Store
//! └── error.rs     ◄─── SessionError
//! ```
//!
//! ## Example Usage
//! ```rust,no_run
//! use serde_json::json;
//! use shopfront_session::{init_tracing, Session, SessionConfig};
//!
//! let config = SessionConfig::load_or_default(None);
//! init_tracing(&config.log).ok();
//!
//! // Records come from whatever loader the application uses
//! let records = vec![json!({
//!     "name": "dish soap",
//!     "price": 10,
//!     "hashtags": ["kitchen"],
//!     "description": "Lemon dish liquid",
//! })];
//!
//! let mut session = Session::open(&config, records)?;
//! session.add_item("dish")?;
//! println!("total: {}", session.checkout());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod session;

pub use config::{CatalogSettings, LogSettings, SessionConfig, DEFAULT_LOG_FILTER};
pub use error::{SessionError, SessionResult};
pub use logging::init_tracing;
pub use session::Session;
