//! # Domain Types
//!
//! Catalog item types used throughout Shopfront.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   into_item()   ┌─────────────────┐               │
//! │  │    RawItem      │ ──────────────► │      Item       │               │
//! │  │  ─────────────  │                 │  ─────────────  │               │
//! │  │  name           │                 │  name (key)     │               │
//! │  │  price: RawPrice│                 │  price: Money   │               │
//! │  │  hashtags       │                 │  hashtags       │               │
//! │  │  description    │                 │  description    │               │
//! │  └─────────────────┘                 └─────────────────┘               │
//! │                                                                         │
//! │  ┌─────────────────┐                                                    │
//! │  │    RawPrice     │  42 | 42.9 | "42"  →  42                           │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Name-Key Identity
//! An item is identified by its `name`. Two items with the same name are the
//! same item as far as the cart is concerned, whatever their other fields.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CatalogError, CatalogResult, ValidationError};
use crate::money::Money;
use crate::validation::{self, ValidationResult};

// =============================================================================
// Item
// =============================================================================

/// An immutable catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Item {
    name: String,
    price: Money,
    hashtags: Vec<String>,
    description: String,
}

impl Item {
    /// Creates a new item.
    pub fn new(
        name: impl Into<String>,
        price: Money,
        hashtags: Vec<String>,
        description: impl Into<String>,
    ) -> Self {
        Item {
            name: name.into(),
            price,
            hashtags,
            description: description.into(),
        }
    }

    /// Display name, also the item's identity key.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn price(&self) -> Money {
        self.price
    }

    /// Hashtags in catalog order. May contain repeats.
    #[inline]
    pub fn hashtags(&self) -> &[String] {
        &self.hashtags
    }

    #[inline]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Exact, case-sensitive name comparison.
    #[inline]
    pub fn has_name(&self, name: &str) -> bool {
        self.name == name
    }

    /// Name-key equality between two items.
    #[inline]
    pub fn same_name(&self, other: &Item) -> bool {
        self.has_name(&other.name)
    }

    /// Case-sensitive substring match used by fuzzy lookups.
    /// An exact name also matches.
    #[inline]
    pub fn name_contains(&self, query: &str) -> bool {
        self.name.contains(query)
    }

    /// True if one of the hashtags is exactly `tag`.
    ///
    /// `"tissue paper"` does not match `"paper"`.
    pub fn has_hashtag(&self, tag: &str) -> bool {
        self.hashtags.iter().any(|h| h == tag)
    }
}

// =============================================================================
// Raw Price
// =============================================================================

/// A price as it arrives from the catalog loader.
///
/// Loaders hand over whatever their format produced: an integer, a float or
/// a string. `RawPrice::to_units` coerces all of them to a unit count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawPrice {
    Integer(i64),
    Unsigned(u64),
    /// Truncated toward zero.
    Float(f64),
    /// Trimmed, then parsed as a signed decimal integer.
    Text(String),
}

impl RawPrice {
    /// Coerces the raw value into a non-negative unit count.
    ///
    /// ## Example
    /// ```rust
    /// use shopfront_core::types::RawPrice;
    ///
    /// assert_eq!(RawPrice::Text(" 12 ".into()).to_units().unwrap(), 12);
    /// assert_eq!(RawPrice::Float(12.9).to_units().unwrap(), 12);
    /// assert!(RawPrice::Integer(-1).to_units().is_err());
    /// assert!(RawPrice::Text("12.5".into()).to_units().is_err());
    /// ```
    pub fn to_units(&self) -> ValidationResult<u64> {
        let value: i128 = match self {
            RawPrice::Integer(v) => i128::from(*v),
            RawPrice::Unsigned(v) => i128::from(*v),
            RawPrice::Float(v) => {
                if !v.is_finite() {
                    return Err(ValidationError::InvalidFormat {
                        field: "price".to_string(),
                        reason: format!("{} is not a finite number", v),
                    });
                }
                // `as` saturates; anything past u64 is caught below.
                v.trunc() as i128
            }
            RawPrice::Text(s) => {
                s.trim()
                    .parse::<i128>()
                    .map_err(|_| ValidationError::InvalidFormat {
                        field: "price".to_string(),
                        reason: format!("'{}' is not an integer", s),
                    })?
            }
        };

        validation::validate_price_units(value)
    }
}

impl From<u64> for RawPrice {
    fn from(units: u64) -> Self {
        RawPrice::Unsigned(units)
    }
}

// =============================================================================
// Raw Item
// =============================================================================

/// One catalog record before conversion.
///
/// All four keys are required. Extra keys are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawItem {
    pub name: String,
    pub price: RawPrice,
    pub hashtags: Vec<String>,
    pub description: String,
}

impl RawItem {
    /// Reads an untyped key/value record.
    ///
    /// `index` is the record's position in the catalog, used in errors.
    pub fn from_record(index: usize, record: serde_json::Value) -> CatalogResult<Self> {
        serde_json::from_value(record).map_err(|e| CatalogError::MalformedRecord {
            index,
            reason: e.to_string(),
        })
    }

    /// Validates the record and converts it into an `Item`.
    pub fn into_item(self, index: usize) -> CatalogResult<Item> {
        let invalid = |source| CatalogError::InvalidRecord { index, source };

        validation::validate_item_name(&self.name).map_err(invalid)?;
        let units = self.price.to_units().map_err(invalid)?;

        Ok(Item::new(
            self.name,
            Money::from(units),
            self.hashtags,
            self.description,
        ))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn item(name: &str, tags: &[&str]) -> Item {
        Item::new(
            name,
            Money::from_units(1),
            tags.iter().map(|t| t.to_string()).collect(),
            "",
        )
    }

    #[test]
    fn test_name_key_equality() {
        let a = Item::new("dish soap", Money::from_units(5), vec![], "lemon");
        let b = Item::new("dish soap", Money::from_units(9), vec![], "other");
        assert!(a.same_name(&b));
        assert!(a.has_name("dish soap"));
        assert!(!a.has_name("Dish soap"));
    }

    #[test]
    fn test_name_contains_is_case_sensitive() {
        let soap = item("dish soap", &[]);
        assert!(soap.name_contains("soap"));
        assert!(soap.name_contains("dish soap"));
        assert!(!soap.name_contains("Soap"));
    }

    #[test]
    fn test_hashtag_is_exact_element_match() {
        let tissue = item("tissues", &["tissue paper"]);
        let towel = item("paper towel", &["kitchen", "paper"]);
        assert!(!tissue.has_hashtag("paper"));
        assert!(towel.has_hashtag("paper"));
    }

    #[test]
    fn test_raw_price_untagged_parsing() {
        let record = json!({
            "name": "a",
            "price": "7",
            "hashtags": [],
            "description": ""
        });
        let raw = RawItem::from_record(0, record).unwrap();
        assert_eq!(raw.price, RawPrice::Text("7".to_string()));

        let raw: RawItem = serde_json::from_value(json!({
            "name": "a",
            "price": 7,
            "hashtags": [],
            "description": ""
        }))
        .unwrap();
        assert_eq!(raw.price, RawPrice::Integer(7));
    }

    #[test]
    fn test_raw_price_coercion() {
        assert_eq!(RawPrice::Integer(0).to_units().unwrap(), 0);
        assert_eq!(RawPrice::Unsigned(u64::MAX).to_units().unwrap(), u64::MAX);
        assert_eq!(RawPrice::Text("+15".into()).to_units().unwrap(), 15);
        assert_eq!(RawPrice::Float(-0.5).to_units().unwrap(), 0);

        assert!(RawPrice::Float(f64::NAN).to_units().is_err());
        assert!(RawPrice::Float(1e30).to_units().is_err());
        assert!(RawPrice::Text("ten".into()).to_units().is_err());
        assert!(matches!(
            RawPrice::Integer(-3).to_units(),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_missing_field_is_malformed() {
        let err = RawItem::from_record(4, json!({"name": "a", "price": 1})).unwrap_err();
        match err {
            CatalogError::MalformedRecord { index, reason } => {
                assert_eq!(index, 4);
                assert!(reason.contains("hashtags"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_into_item_rejects_blank_name() {
        let raw = RawItem {
            name: "  ".to_string(),
            price: RawPrice::Integer(1),
            hashtags: vec![],
            description: String::new(),
        };
        assert!(matches!(
            raw.into_item(2),
            Err(CatalogError::InvalidRecord { index: 2, .. })
        ));
    }

    #[test]
    fn test_into_item_keeps_fields() {
        let raw = RawItem {
            name: "body soap".to_string(),
            price: RawPrice::Text("12".to_string()),
            hashtags: vec!["bath".to_string(), "bath".to_string()],
            description: "lavender".to_string(),
        };
        let item = raw.into_item(0).unwrap();
        assert_eq!(item.name(), "body soap");
        assert_eq!(item.price().units(), 12);
        assert_eq!(item.hashtags(), ["bath", "bath"]);
        assert_eq!(item.description(), "lavender");
    }
}
