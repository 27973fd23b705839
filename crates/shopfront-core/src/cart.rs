//! # Shopping Cart
//!
//! The customer's current selection.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Caller                    ShoppingCart             State Change         │
//! │  ──────                    ────────────             ────────────         │
//! │                                                                         │
//! │  Store::add_item ────────► add_item(item) ────────► items.push(item)    │
//! │                                                                         │
//! │  Store::remove_item ─────► remove_item(name) ─────► items.remove(i)     │
//! │                                                                         │
//! │  Store::checkout ────────► get_subtotal() ────────► (read only)         │
//! │                                                                         │
//! │  Store::search_* ────────► in_cart / hashtag_counts (read only)         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Shared Items
//! Entries are `Arc<Item>` handles to the catalog's own instances. Adding an
//! item to the cart never copies it.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CartError, CartResult};
use crate::money::Money;
use crate::types::Item;

/// An ordered set of items keyed by name.
///
/// ## Invariants
/// - No two entries share a name
/// - Entries keep insertion order
#[derive(Debug, Clone, Default)]
pub struct ShoppingCart {
    items: Vec<Arc<Item>>,
}

impl ShoppingCart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        ShoppingCart { items: Vec::new() }
    }

    /// Appends an item to the cart.
    ///
    /// ## Returns
    /// - `Ok(())` on success
    /// - `Err(CartError::ItemAlreadyExists)` if an entry with the same name
    ///   is present; the cart is unchanged
    pub fn add_item(&mut self, item: Arc<Item>) -> CartResult<()> {
        if self.items.iter().any(|entry| entry.same_name(&item)) {
            return Err(CartError::ItemAlreadyExists {
                name: item.name().to_string(),
            });
        }

        self.items.push(item);
        Ok(())
    }

    /// Removes the entry whose name equals `name` exactly.
    ///
    /// Order of the remaining entries is preserved.
    pub fn remove_item(&mut self, name: &str) -> CartResult<()> {
        let index = self
            .items
            .iter()
            .position(|entry| entry.has_name(name))
            .ok_or_else(|| CartError::ItemNotExist {
                query: name.to_string(),
            })?;

        self.items.remove(index);
        Ok(())
    }

    /// Sum of the prices of every entry. Zero for an empty cart.
    pub fn get_subtotal(&self) -> Money {
        self.items.iter().map(|entry| entry.price()).sum()
    }

    /// Checks whether an entry has exactly this name.
    pub fn in_cart(&self, name: &str) -> bool {
        self.items.iter().any(|entry| entry.has_name(name))
    }

    /// Entries in insertion order.
    pub fn items(&self) -> &[Arc<Item>] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Occurrence count of every hashtag across all entries.
    ///
    /// Repeats count, both across entries and within one entry's list:
    /// a cart holding `["kitchen", "kitchen"]` maps `kitchen` to 2.
    pub fn hashtag_counts(&self) -> HashMap<&str, usize> {
        let mut counts = HashMap::new();
        for tag in self.items.iter().flat_map(|entry| entry.hashtags()) {
            *counts.entry(tag.as_str()).or_insert(0) += 1;
        }
        counts
    }

    /// Serializable snapshot of the cart.
    pub fn summary(&self) -> CartSummary {
        CartSummary::from(self)
    }
}

/// Cart snapshot for API consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartSummary {
    pub item_count: usize,
    /// Names in insertion order.
    pub item_names: Vec<String>,
    pub subtotal: Money,
}

impl From<&ShoppingCart> for CartSummary {
    fn from(cart: &ShoppingCart) -> Self {
        CartSummary {
            item_count: cart.len(),
            item_names: cart.items.iter().map(|i| i.name().to_string()).collect(),
            subtotal: cart.get_subtotal(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_item(name: &str, price: u64) -> Arc<Item> {
        Arc::new(Item::new(name, Money::from(price), vec![], ""))
    }

    fn tagged_item(name: &str, tags: &[&str]) -> Arc<Item> {
        Arc::new(Item::new(
            name,
            Money::from_units(1),
            tags.iter().map(|t| t.to_string()).collect(),
            "",
        ))
    }

    #[test]
    fn test_add_item() {
        let mut cart = ShoppingCart::new();
        let soap = test_item("dish soap", 10);

        cart.add_item(soap).unwrap();

        assert!(cart.in_cart("dish soap"));
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.get_subtotal().units(), 10);
    }

    #[test]
    fn test_add_same_name_twice_fails() {
        let mut cart = ShoppingCart::new();
        cart.add_item(test_item("dish soap", 10)).unwrap();

        // A different instance with the same name is still a duplicate
        let err = cart.add_item(test_item("dish soap", 99)).unwrap_err();

        assert_eq!(
            err,
            CartError::ItemAlreadyExists {
                name: "dish soap".to_string()
            }
        );
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.get_subtotal().units(), 10);
    }

    #[test]
    fn test_remove_missing_fails_and_leaves_cart() {
        let mut cart = ShoppingCart::new();
        cart.add_item(test_item("dish soap", 10)).unwrap();

        let err = cart.remove_item("soap").unwrap_err();

        assert!(matches!(err, CartError::ItemNotExist { .. }));
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_subtotal() {
        let mut cart = ShoppingCart::new();
        assert!(cart.get_subtotal().is_zero());

        cart.add_item(test_item("a", 10)).unwrap();
        cart.add_item(test_item("b", 20)).unwrap();
        cart.add_item(test_item("c", 5)).unwrap();
        assert_eq!(cart.get_subtotal().units(), 35);

        cart.remove_item("b").unwrap();
        assert_eq!(cart.get_subtotal().units(), 15);
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut cart = ShoppingCart::new();
        for name in ["a", "b", "c"] {
            cart.add_item(test_item(name, 1)).unwrap();
        }

        cart.remove_item("a").unwrap();

        assert_eq!(cart.summary().item_names, vec!["b", "c"]);
    }

    #[test]
    fn test_add_shares_instance() {
        let mut cart = ShoppingCart::new();
        let soap = test_item("dish soap", 10);

        cart.add_item(Arc::clone(&soap)).unwrap();

        assert!(Arc::ptr_eq(&cart.items()[0], &soap));
    }

    #[test]
    fn test_hashtag_counts_with_repeats() {
        let mut cart = ShoppingCart::new();
        cart.add_item(tagged_item("sponge", &["kitchen", "kitchen"]))
            .unwrap();
        cart.add_item(tagged_item("towel", &["kitchen", "paper"]))
            .unwrap();

        let counts = cart.hashtag_counts();

        assert_eq!(counts.get("kitchen"), Some(&3));
        assert_eq!(counts.get("paper"), Some(&1));
        assert_eq!(counts.get("bath"), None);
    }

    #[test]
    fn test_summary() {
        let mut cart = ShoppingCart::new();
        cart.add_item(test_item("a", 7)).unwrap();

        let summary = cart.summary();

        assert_eq!(summary.item_count, 1);
        assert_eq!(summary.subtotal.units(), 7);
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["itemNames"][0], "a");
    }
}
