//! # Validation Module
//!
//! Load-time validation for catalog records.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Record shape (serde)                                         │
//! │  └── All four keys present with the right types                        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Field rules (THIS MODULE)                                    │
//! │  ├── validate_item_name: non-empty                                     │
//! │  └── validate_price_units: 0 ..= u64::MAX                              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Catalog rules (THIS MODULE)                                  │
//! │  ├── names are unique                                                  │
//! │  └── no name contains another (fuzzy add/remove needs this)            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Queries are never validated here. An empty query is a legal substring
//! of every name.

use crate::error::{CatalogError, CatalogResult, ValidationError};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Field Validators
// =============================================================================

/// Validates an item name.
///
/// ## Rules
/// - Must not be empty or whitespace only
///
/// The name is not trimmed: it is stored exactly as given.
///
/// ## Example
/// ```rust
/// use shopfront_core::validation::validate_item_name;
///
/// assert!(validate_item_name("dish soap").is_ok());
/// assert!(validate_item_name("").is_err());
/// ```
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    Ok(())
}

/// Validates a coerced price and narrows it to `u64`.
///
/// ## Rules
/// - Must be non-negative (zero is allowed: free items)
/// - Must fit in a u64
///
/// ## Example
/// ```rust
/// use shopfront_core::validation::validate_price_units;
///
/// assert_eq!(validate_price_units(1099).unwrap(), 1099);
/// assert!(validate_price_units(-100).is_err());
/// ```
pub fn validate_price_units(value: i128) -> ValidationResult<u64> {
    u64::try_from(value).map_err(|_| ValidationError::OutOfRange {
        field: "price".to_string(),
        min: 0,
        max: i128::from(u64::MAX),
    })
}

// =============================================================================
// Catalog Validators
// =============================================================================

/// Validates the names of a whole catalog.
///
/// ## Rules
/// - Every name appears once (always enforced)
/// - No name is a substring of another (only when `reject_nested` is set)
///
/// ## Why Nested Names Matter
/// ```text
/// Catalog: "soap", "dish soap"
///
/// add_item("soap")
///      │
///      ▼
/// Both names contain "soap" ──► TooManyMatches
///
/// "soap" can never be added by its own name. Rejecting the catalog at load
/// time surfaces that instead of leaving an unreachable item.
/// ```
pub fn validate_catalog_names<'a, I>(names: I, reject_nested: bool) -> CatalogResult<()>
where
    I: IntoIterator<Item = &'a str>,
{
    let names: Vec<&str> = names.into_iter().collect();

    for (i, name) in names.iter().enumerate() {
        if names[..i].contains(name) {
            return Err(CatalogError::DuplicateName(name.to_string()));
        }
    }

    if reject_nested {
        for inner in &names {
            if let Some(outer) = names
                .iter()
                .find(|outer| outer != &inner && outer.contains(inner))
            {
                return Err(CatalogError::NestedNames {
                    inner: inner.to_string(),
                    outer: outer.to_string(),
                });
            }
        }
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_item_name() {
        assert!(validate_item_name("paper towel").is_ok());
        assert!(validate_item_name(" x ").is_ok());
        assert!(validate_item_name("").is_err());
        assert!(validate_item_name("   ").is_err());
    }

    #[test]
    fn test_validate_price_units() {
        assert_eq!(validate_price_units(0).unwrap(), 0);
        assert_eq!(validate_price_units(35).unwrap(), 35);
        assert!(validate_price_units(-1).is_err());
        assert!(validate_price_units(i128::from(u64::MAX) + 1).is_err());
    }

    #[test]
    fn test_duplicate_names_always_rejected() {
        let err = validate_catalog_names(["a", "b", "a"], false).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateName(name) if name == "a"));
    }

    #[test]
    fn test_nested_names() {
        let names = ["soap", "dish soap"];
        assert!(validate_catalog_names(names, false).is_ok());

        let err = validate_catalog_names(names, true).unwrap_err();
        match err {
            CatalogError::NestedNames { inner, outer } => {
                assert_eq!(inner, "soap");
                assert_eq!(outer, "dish soap");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_disjoint_names_pass() {
        assert!(validate_catalog_names(["body soap", "dish soap", "paper towel"], true).is_ok());
        assert!(validate_catalog_names(std::iter::empty(), true).is_ok());
    }
}
