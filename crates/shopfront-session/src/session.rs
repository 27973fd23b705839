//! # Customer Session
//!
//! One customer, one `Store`, one cart.
//!
//! ## Session Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  SessionConfig + catalog records                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Session::open() ──► Store built (CatalogError aborts here)             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  search_by_name / search_by_hashtag / add_item / remove_item            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  checkout() ──► subtotal (cart kept)                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  drop(session)  (nothing to flush, cart is not persisted)               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Sessions share nothing. Two customers get two independent stores, even
//! when built from the same records.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use shopfront_core::{CartResult, CartSummary, Item, Money, RawItem, Store};
use tracing::info;
use uuid::Uuid;

use crate::config::SessionConfig;
use crate::error::SessionResult;

/// A single customer's shopping session.
#[derive(Debug, Clone)]
pub struct Session {
    id: Uuid,
    started_at: DateTime<Utc>,
    store: Store,
}

impl Session {
    /// Opens a session from untyped key/value catalog records.
    pub fn open<I>(config: &SessionConfig, records: I) -> SessionResult<Self>
    where
        I: IntoIterator<Item = serde_json::Value>,
    {
        let store = Store::from_records(records, config.store_options())?;
        Ok(Self::with_store(store))
    }

    /// Opens a session from typed catalog records.
    pub fn from_items(config: &SessionConfig, records: Vec<RawItem>) -> SessionResult<Self> {
        let store = Store::with_options(records, config.store_options())?;
        Ok(Self::with_store(store))
    }

    fn with_store(store: Store) -> Self {
        let session = Session {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            store,
        };
        info!(
            session_id = %session.id,
            items = session.store.get_items().len(),
            "Session opened"
        );
        session
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// The underlying store, read-only.
    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn get_items(&self) -> &[Arc<Item>] {
        self.store.get_items()
    }

    pub fn search_by_name(&self, query: &str) -> Vec<Arc<Item>> {
        self.store.search_by_name(query)
    }

    pub fn search_by_hashtag(&self, tag: &str) -> Vec<Arc<Item>> {
        self.store.search_by_hashtag(tag)
    }

    /// Adds the single item matching `query`. See `Store::add_item`.
    pub fn add_item(&mut self, query: &str) -> CartResult<()> {
        self.store.add_item(query)?;
        info!(
            session_id = %self.id,
            query = %query,
            cart_items = self.store.cart().len(),
            "Item added to cart"
        );
        Ok(())
    }

    /// Removes the single cart item matching `query`. See `Store::remove_item`.
    pub fn remove_item(&mut self, query: &str) -> CartResult<()> {
        self.store.remove_item(query)?;
        info!(
            session_id = %self.id,
            query = %query,
            cart_items = self.store.cart().len(),
            "Item removed from cart"
        );
        Ok(())
    }

    pub fn checkout(&self) -> Money {
        let total = self.store.checkout();
        info!(session_id = %self.id, total = %total, "Checkout");
        total
    }

    pub fn cart_summary(&self) -> CartSummary {
        self.store.cart().summary()
    }
}
