//! # tandoor-store: State Layer for Tandoor POS
//!
//! This crate owns the restaurant's live state. It keeps the menu, the
//! order list and the sales ledger in memory behind one lock, and exposes
//! them through repository handles built on the rules in `tandoor-core`.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Tandoor POS Data Flow                             │
//! │                                                                         │
//! │  Frontend action (complete_order)                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐    │
//! │  │                   tandoor-store (THIS CRATE)                    │    │
//! │  │                                                                 │    │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐    │    │
//! │  │   │     Store     │    │ Repositories  │    │  Reporting   │    │    │
//! │  │   │  (store.rs)   │    │ (repository/) │    │(reporting.rs)│    │    │
//! │  │   │               │    │               │    │              │    │    │
//! │  │   │ Arc<Mutex<    │◄───│ CatalogRepo   │    │ revenue      │    │    │
//! │  │   │  Collections>>│    │ OrderRepo     │◄───│ popularity   │    │    │
//! │  │   │  one lock     │    │ SalesLedger   │    │ series       │    │    │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘    │    │
//! │  │                                                                 │    │
//! │  └─────────────────────────────────────────────────────────────────┘    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  tandoor-core: money, validation, status rules, pricing                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - Shared state container and configuration
//! - [`error`] - Store error types
//! - [`repository`] - Repository handles (catalog, order, sale)
//! - [`reporting`] - Revenue, averages and popularity reports
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tandoor_store::{Store, StoreConfig};
//!
//! // Create a store with default config
//! let store = Store::new(StoreConfig::new());
//!
//! // Stock the menu, take an order, ring it up
//! let tikka = store.catalog().add(item)?;
//! let order = store.orders().create(&draft)?;
//! store.orders().complete(&order.id)?;
//!
//! // Read the dashboard
//! let summary = store.reports().stats(&today);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod reporting;
pub mod repository;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use store::{Store, StoreConfig};

// Repository re-exports for convenience
pub use reporting::Reports;
pub use repository::catalog::{generate_menu_item_id, CatalogRepository, MenuItemPatch};
pub use repository::order::{generate_order_id, OrderRepository};
pub use repository::sale::{generate_sale_id, SalesLedger};
