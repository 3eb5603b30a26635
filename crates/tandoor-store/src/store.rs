//! # Store State Management
//!
//! Creation and configuration of the single shared POS state.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Shared Store State                               │
//! │                                                                         │
//! │  App Startup                                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreConfig::new() ← Configure defaults (estimate, ranking size)       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Store::new(config) ← One Arc<Mutex<Collections>> for the process       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────┐                            │
//! │  │              Collections                │                            │
//! │  │   menu_items: Vec<MenuItem>             │                            │
//! │  │   orders:     Vec<Order>                │                            │
//! │  │   sales:      Vec<Sale>  (append-only)  │                            │
//! │  └─────────────────────────────────────────┘                            │
//! │       │                                                                 │
//! │       │ Cloned handles from commands                                    │
//! │       ▼                                                                 │
//! │  store.catalog() ──► CatalogRepository                                  │
//! │  store.orders()  ──► OrderRepository                                    │
//! │  store.sales()   ──► SalesLedger                                        │
//! │  store.reports() ──► Reports                                            │
//! │  (Handles share the SAME state; the Mutex serializes writers)           │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## One Mutex, On Purpose
//! Completing an order must flip its status AND append its sale as one
//! observable step. A single lock over all three collections makes that
//! trivially atomic. Per-collection locks would reopen the double-sale
//! race this design exists to close.

use std::sync::{Arc, Mutex};

use tracing::info;

use tandoor_core::{MenuItem, Order, Sale, DEFAULT_ESTIMATED_TIME, POPULAR_ITEMS_LIMIT};

use crate::reporting::Reports;
use crate::repository::catalog::CatalogRepository;
use crate::repository::order::OrderRepository;
use crate::repository::sale::SalesLedger;

// =============================================================================
// Configuration
// =============================================================================

/// Store configuration.
///
/// ## Example
/// ```rust,ignore
/// let config = StoreConfig::new()
///     .default_estimated_time(45)
///     .popular_items_limit(10);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct StoreConfig {
    /// Preparation estimate for orders created without one, in minutes.
    /// Default: 30
    pub default_estimated_time: i64,

    /// How many entries dashboard popularity rankings show.
    /// Default: 5
    pub popular_items_limit: usize,
}

impl StoreConfig {
    /// Creates a configuration with the crate defaults.
    pub fn new() -> Self {
        StoreConfig {
            default_estimated_time: DEFAULT_ESTIMATED_TIME,
            popular_items_limit: POPULAR_ITEMS_LIMIT,
        }
    }

    /// Sets the default preparation estimate in minutes.
    pub fn default_estimated_time(mut self, minutes: i64) -> Self {
        self.default_estimated_time = minutes;
        self
    }

    /// Sets the popularity ranking size.
    pub fn popular_items_limit(mut self, limit: usize) -> Self {
        self.popular_items_limit = limit;
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig::new()
    }
}

// =============================================================================
// Collections
// =============================================================================

/// The three collections behind the store, guarded together.
///
/// `sales` is append-only: nothing in this crate exposes a way to update
/// or remove a recorded sale.
#[derive(Debug, Default)]
pub(crate) struct Collections {
    pub(crate) menu_items: Vec<MenuItem>,
    pub(crate) orders: Vec<Order>,
    pub(crate) sales: Vec<Sale>,
}

/// Shared handle to the collections.
pub(crate) type Shared = Arc<Mutex<Collections>>;

// =============================================================================
// Store
// =============================================================================

/// Main store handle providing repository access.
///
/// ## Design: Narrow Handles
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Instead of passing the whole store around, commands take the           │
/// │  narrowest handle that covers their job:                                │
/// │                                                                         │
/// │  CatalogRepository  ← menu management screens                           │
/// │  OrderRepository    ← order sheet + kitchen board                       │
/// │  SalesLedger        ← sales history screen                              │
/// │  Reports            ← dashboard                                         │
/// │                                                                         │
/// │  Benefits:                                                              │
/// │  • Commands only get what they need                                     │
/// │  • Easier testing (construct one repository over a fresh store)         │
/// │  • Clear separation of concerns                                         │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
///
/// ## Usage
/// ```rust,ignore
/// let store = Store::new(StoreConfig::new());
/// let order = store.orders().create(&draft)?;
/// store.orders().complete(&order.id)?;
/// assert_eq!(store.sales().count(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Store {
    collections: Shared,
    config: StoreConfig,
}

impl Store {
    /// Creates an empty store.
    pub fn new(config: StoreConfig) -> Self {
        info!(
            default_estimated_time = config.default_estimated_time,
            popular_items_limit = config.popular_items_limit,
            "Initializing store"
        );
        Store {
            collections: Arc::new(Mutex::new(Collections::default())),
            config,
        }
    }

    /// Returns the catalog repository.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let deals = store.catalog().deals();
    /// ```
    pub fn catalog(&self) -> CatalogRepository {
        CatalogRepository::new(Arc::clone(&self.collections))
    }

    /// Returns the order repository.
    pub fn orders(&self) -> OrderRepository {
        OrderRepository::new(Arc::clone(&self.collections), self.config)
    }

    /// Returns the sales ledger.
    pub fn sales(&self) -> SalesLedger {
        SalesLedger::new(Arc::clone(&self.collections))
    }

    /// Returns the reporting queries.
    pub fn reports(&self) -> Reports {
        Reports::new(Arc::clone(&self.collections), self.config)
    }

    /// Returns the active configuration.
    pub fn config(&self) -> StoreConfig {
        self.config
    }
}

/// An empty store with default configuration (handy in tests).
impl Default for Store {
    fn default() -> Self {
        Store::new(StoreConfig::new())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = StoreConfig::new()
            .default_estimated_time(45)
            .popular_items_limit(10);

        assert_eq!(config.default_estimated_time, 45);
        assert_eq!(config.popular_items_limit, 10);
    }

    #[test]
    fn test_fresh_store_is_empty() {
        let store = Store::default();
        assert!(store.catalog().list().is_empty());
        assert!(store.orders().list().is_empty());
        assert_eq!(store.sales().count(), 0);
    }

    #[test]
    fn test_handles_share_state() {
        let store = Store::default();
        let catalog_a = store.catalog();
        let catalog_b = store.catalog();

        catalog_a
            .add(tandoor_core::MenuItem::new(
                "mi-1",
                "Tandoori Roti",
                "Bread",
                tandoor_core::Money::from_rupees(40),
            ))
            .unwrap();

        assert_eq!(catalog_b.count(), 1);
    }
}
