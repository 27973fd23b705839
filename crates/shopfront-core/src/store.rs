//! # Store
//!
//! Owns the catalog and the customer's cart.
//!
//! ## Search and Ranking
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    How a Search Is Ranked                               │
//! │                                                                         │
//! │  Cart: sponge [kitchen, kitchen]                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  hashtag_counts: { kitchen: 2 }                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Candidates (not in cart)      score                                    │
//! │  ─────────────────────────     ─────                                    │
//! │  dish soap  [kitchen]            2   ◄── first                          │
//! │  body soap  [bath]               0                                      │
//! │  hand soap  [bath]               0                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Sort: score descending, then name ascending                            │
//! │  Result: [dish soap, body soap, hand soap]                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Fuzzy Add/Remove
//! `add_item` and `remove_item` take a query, not a name. The query must be
//! contained in exactly one name. `add_item` looks at the whole catalog,
//! cart members included, so re-adding "dish soap" reports
//! `ItemAlreadyExists` rather than `ItemNotExist`.

use std::cmp::Reverse;
use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, info};

use crate::cart::ShoppingCart;
use crate::error::{CartError, CartResult, CatalogError, CatalogResult};
use crate::money::Money;
use crate::types::{Item, RawItem};
use crate::validation;

/// Catalog load options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreOptions {
    /// Reject catalogs where one name is contained in another.
    /// Default: `true`
    pub reject_nested_names: bool,
}

impl Default for StoreOptions {
    fn default() -> Self {
        StoreOptions {
            reject_nested_names: true,
        }
    }
}

/// A catalog plus one customer's cart.
///
/// ## Usage
/// ```rust
/// use shopfront_core::{RawItem, RawPrice, Store};
///
/// let records = vec![
///     RawItem {
///         name: "dish soap".into(),
///         price: RawPrice::Integer(10),
///         hashtags: vec!["kitchen".into()],
///         description: "lemon".into(),
///     },
/// ];
/// let mut store = Store::new(records).unwrap();
///
/// store.add_item("dish").unwrap();
/// assert_eq!(store.checkout().units(), 10);
/// ```
#[derive(Debug, Clone)]
pub struct Store {
    items: Vec<Arc<Item>>,
    cart: ShoppingCart,
    options: StoreOptions,
}

impl Store {
    /// Builds a store from typed records with default options.
    pub fn new(records: Vec<RawItem>) -> CatalogResult<Self> {
        Self::with_options(records, StoreOptions::default())
    }

    /// Builds a store from typed records.
    ///
    /// ## Errors
    /// - `InvalidRecord` for an empty name or a bad price
    /// - `DuplicateName` if two records share a name
    /// - `NestedNames` if enabled and one name contains another
    pub fn with_options(records: Vec<RawItem>, options: StoreOptions) -> CatalogResult<Self> {
        let items = records
            .into_iter()
            .enumerate()
            .map(|(index, raw)| raw.into_item(index).map(Arc::new))
            .collect::<CatalogResult<Vec<_>>>()?;

        validation::validate_catalog_names(
            items.iter().map(|item| item.name()),
            options.reject_nested_names,
        )?;

        info!(items = items.len(), "Catalog loaded");

        Ok(Store {
            items,
            cart: ShoppingCart::new(),
            options,
        })
    }

    /// Builds a store from untyped key/value records.
    ///
    /// A record missing `name`, `price`, `hashtags` or `description` fails
    /// with `CatalogError::MalformedRecord`.
    pub fn from_records<I>(records: I, options: StoreOptions) -> CatalogResult<Self>
    where
        I: IntoIterator<Item = serde_json::Value>,
    {
        let raw = records
            .into_iter()
            .enumerate()
            .map(|(index, record)| RawItem::from_record(index, record))
            .collect::<Result<Vec<_>, CatalogError>>()?;

        Self::with_options(raw, options)
    }

    /// The whole catalog in load order.
    pub fn get_items(&self) -> &[Arc<Item>] {
        &self.items
    }

    /// Read-only view of the cart.
    pub fn cart(&self) -> &ShoppingCart {
        &self.cart
    }

    pub fn options(&self) -> StoreOptions {
        self.options
    }

    /// Items whose name contains `query` and that are not in the cart.
    ///
    /// Case-sensitive. An exact name counts as containing itself.
    pub fn search_by_name(&self, query: &str) -> Vec<Arc<Item>> {
        let results = self.sorted_items(
            self.items
                .iter()
                .filter(|item| item.name_contains(query) && !self.cart.in_cart(item.name())),
        );

        debug!(query = %query, count = results.len(), "Searched by name");
        results
    }

    /// Items carrying exactly `tag` as one of their hashtags and that are not
    /// in the cart.
    pub fn search_by_hashtag(&self, tag: &str) -> Vec<Arc<Item>> {
        let results = self.sorted_items(
            self.items
                .iter()
                .filter(|item| item.has_hashtag(tag) && !self.cart.in_cart(item.name())),
        );

        debug!(tag = %tag, count = results.len(), "Searched by hashtag");
        results
    }

    /// Adds the single catalog item whose name contains `query`.
    ///
    /// ## Errors
    /// - `ItemNotExist` if no catalog name contains `query`
    /// - `TooManyMatches` if several do
    /// - `ItemAlreadyExists` if the match is already in the cart
    pub fn add_item(&mut self, query: &str) -> CartResult<()> {
        let item = single_match(query, &self.items)?;

        if self.cart.in_cart(item.name()) {
            return Err(CartError::ItemAlreadyExists {
                name: item.name().to_string(),
            });
        }

        debug!(query = %query, name = %item.name(), "Adding item to cart");
        self.cart.add_item(Arc::clone(item))
    }

    /// Removes the single cart item whose name contains `query`.
    ///
    /// ## Errors
    /// - `ItemNotExist` if no cart name contains `query`
    /// - `TooManyMatches` if several do
    pub fn remove_item(&mut self, query: &str) -> CartResult<()> {
        let name = single_match(query, self.cart.items())?.name().to_string();

        debug!(query = %query, name = %name, "Removing item from cart");
        self.cart.remove_item(&name)
    }

    /// Cart subtotal. The cart is left as is.
    pub fn checkout(&self) -> Money {
        self.cart.get_subtotal()
    }

    /// Ranks candidates by shared hashtags with the cart.
    ///
    /// Score: for every hashtag of the candidate, how many times it occurs
    /// across the cart's hashtags. Higher scores first, ties by name.
    fn sorted_items<'a, I>(&self, candidates: I) -> Vec<Arc<Item>>
    where
        I: Iterator<Item = &'a Arc<Item>>,
    {
        let counts = self.cart.hashtag_counts();

        let mut scored: Vec<(usize, &Arc<Item>)> = candidates
            .map(|item| (relevance(item, &counts), item))
            .collect();
        scored.sort_by(|(a_score, a), (b_score, b)| {
            Reverse(a_score)
                .cmp(&Reverse(b_score))
                .then_with(|| a.name().cmp(b.name()))
        });

        scored.into_iter().map(|(_, item)| Arc::clone(item)).collect()
    }
}

/// Multiplicity-weighted count of hashtags shared with the cart.
fn relevance(item: &Item, cart_counts: &HashMap<&str, usize>) -> usize {
    item.hashtags()
        .iter()
        .map(|tag| cart_counts.get(tag.as_str()).copied().unwrap_or(0))
        .sum()
}

/// Finds the one entry whose name contains `query`.
fn single_match<'a>(query: &str, entries: &'a [Arc<Item>]) -> CartResult<&'a Arc<Item>> {
    let mut matches = entries.iter().filter(|item| item.name_contains(query));

    match (matches.next(), matches.next()) {
        (None, _) => Err(CartError::ItemNotExist {
            query: query.to_string(),
        }),
        (Some(only), None) => Ok(only),
        (Some(_), Some(_)) => {
            let mut names: Vec<String> = entries
                .iter()
                .filter(|item| item.name_contains(query))
                .map(|item| item.name().to_string())
                .collect();
            names.sort();
            Err(CartError::TooManyMatches {
                query: query.to_string(),
                matches: names,
            })
        }
    }
}
