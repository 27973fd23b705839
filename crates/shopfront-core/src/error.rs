//! # Error Types
//!
//! Domain-specific error types for shopfront-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  shopfront-core errors (this file)                                      │
//! │  ├── CartError        - Add/remove failures a shopper can fix           │
//! │  ├── CatalogError     - Store construction failures (fatal for load)    │
//! │  └── ValidationError  - Field-level rule violations inside a record     │
//! │                                                                         │
//! │  shopfront-session errors (separate crate)                              │
//! │  └── SessionError     - Config + CatalogError wrapper                   │
//! │                                                                         │
//! │  Flow: ValidationError → CatalogError → SessionError                    │
//! │        CartError is returned straight to the caller                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `CartError` and `CatalogError` are deliberately separate types: a bad
//! query during shopping must never look like a broken catalog.

use thiserror::Error;

// =============================================================================
// Cart Error
// =============================================================================

/// Errors raised by cart mutations.
///
/// All of these are recoverable: the cart is left exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    /// Nothing matched the name or query.
    ///
    /// ## When This Occurs
    /// - `Store::add_item` with a query no catalog name contains
    /// - `Store::remove_item` with a query no cart name contains
    /// - `ShoppingCart::remove_item` with a name that is not in the cart
    #[error("No item matches '{query}'")]
    ItemNotExist { query: String },

    /// The query is contained in more than one name.
    ///
    /// ## User Workflow
    /// ```text
    /// add_item("soap")
    ///      │
    ///      ▼
    /// Catalog: "body soap", "dish soap"
    ///      │
    ///      ▼
    /// TooManyMatches { query: "soap", matches: ["body soap", "dish soap"] }
    ///      │
    ///      ▼
    /// UI asks: "Did you mean body soap or dish soap?"
    /// ```
    #[error("'{query}' matches more than one item: {matches:?}")]
    TooManyMatches { query: String, matches: Vec<String> },

    /// An item with this name is already in the cart.
    #[error("Item '{name}' is already in the cart")]
    ItemAlreadyExists { name: String },
}

impl CartError {
    /// Returns the names involved in the error, if any.
    pub fn matches(&self) -> &[String] {
        match self {
            CartError::TooManyMatches { matches, .. } => matches,
            _ => &[],
        }
    }
}

// =============================================================================
// Catalog Error
// =============================================================================

/// Errors raised while building a `Store` from raw records.
///
/// These are fatal for the load: no partially built store is returned.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Record could not be read as an item (missing field, wrong type).
    #[error("Catalog record {index} is malformed: {reason}")]
    MalformedRecord { index: usize, reason: String },

    /// Record was readable but broke a field rule.
    #[error("Catalog record {index} is invalid: {source}")]
    InvalidRecord {
        index: usize,
        #[source]
        source: ValidationError,
    },

    /// Two records share a name.
    #[error("Item name '{0}' appears more than once in the catalog")]
    DuplicateName(String),

    /// One name is contained in another, which makes fuzzy matching ambiguous.
    #[error("Item name '{inner}' is contained in '{outer}'")]
    NestedNames { inner: String, outer: String },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Field-level validation errors.
///
/// Used while converting a raw record into an `Item`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i128, max: i128 },

    /// Invalid format (e.g. a price string that is not an integer).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for cart operations.
pub type CartResult<T> = Result<T, CartError>;

/// Convenience type alias for catalog construction.
pub type CatalogResult<T> = Result<T, CatalogError>;

// =============================================================================
// Unit Tests
// =============================================================================
