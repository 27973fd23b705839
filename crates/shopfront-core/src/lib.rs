//! # shopfront-core: Catalog and Cart Logic for Shopfront
//!
//! This crate holds the catalog, the search/ranking rules and the shopping
//! cart as plain in-memory logic with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Shopfront Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Catalog loader (caller-provided)                   │   │
//! │  │        YAML / JSON / DB rows  ──►  Vec<RawItem> or Values       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                shopfront-session (config, logging)              │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ shopfront-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   store   │  │   cart    │  │ validation│  │   │
//! │  │   │   Item    │  │  search   │  │ Shopping  │  │  records  │  │   │
//! │  │   │  RawItem  │  │  ranking  │  │   Cart    │  │  catalog  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO FILES • NO NETWORK • DETERMINISTIC                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - `Item` and the raw record types it is built from
//! - [`money`] - Wide integer amount for prices and subtotals
//! - [`cart`] - `ShoppingCart` and `CartSummary`
//! - [`store`] - `Store`: catalog, search, ranking, fuzzy add/remove
//! - [`validation`] - Record and catalog rules
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use shopfront_core::{RawItem, RawPrice, Store};
//!
//! let record = |name: &str, price: i64, tag: &str| RawItem {
//!     name: name.into(),
//!     price: RawPrice::Integer(price),
//!     hashtags: vec![tag.into()],
//!     description: String::new(),
//! };
//!
//! let mut store = Store::new(vec![
//!     record("body soap", 20, "bath"),
//!     record("dish soap", 10, "kitchen"),
//!     record("paper towel", 5, "kitchen"),
//! ])
//! .unwrap();
//!
//! store.add_item("towel").unwrap();
//!
//! // dish soap shares "kitchen" with the cart, so it ranks first
//! let hits = store.search_by_name("soap");
//! assert_eq!(hits[0].name(), "dish soap");
//!
//! assert_eq!(store.checkout().units(), 5);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod store;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{CartSummary, ShoppingCart};
pub use error::{CartError, CartResult, CatalogError, CatalogResult, ValidationError};
pub use money::Money;
pub use store::{Store, StoreOptions};
pub use types::*;
