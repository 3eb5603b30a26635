//! # Sales Ledger
//!
//! Append-only record of every completed order.
//!
//! ## Why Append-Only
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    The Ledger Is History                                │
//! │                                                                         │
//! │  Orders are working documents: edited, started, cancelled.              │
//! │  Sales are what actually happened at the till.                          │
//! │                                                                         │
//! │  complete(order) ──► Sale { amount, date, item copies }                 │
//! │                          │                                              │
//! │                          ▼                                              │
//! │                ┌──────────────────┐                                     │
//! │                │   sales ledger   │   append(..)  ✓                     │
//! │                │  (insertion      │   update(..)  ✗ does not exist      │
//! │                │   order = time)  │   remove(..)  ✗ does not exist      │
//! │                └──────────────────┘                                     │
//! │                          │                                              │
//! │                          ▼                                              │
//! │         reporting reads: totals, averages, popular items                │
//! │                                                                         │
//! │  Every report is a pure fold over this list. Yesterday's revenue        │
//! │  cannot change because nothing here can change.                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::MutexGuard;

use tracing::debug;
use uuid::Uuid;

use tandoor_core::{DateRange, Sale};

use crate::error::{StoreError, StoreResult};
use crate::store::{Collections, Shared};

/// Read-mostly handle over the append-only sales list.
///
/// `OrderRepository::complete` appends through the same shared state, so
/// anything listed here is settled money.
#[derive(Debug, Clone)]
pub struct SalesLedger {
    collections: Shared,
}

impl SalesLedger {
    /// Creates a new SalesLedger over the shared state.
    pub(crate) fn new(collections: Shared) -> Self {
        SalesLedger { collections }
    }

    fn lock(&self) -> MutexGuard<'_, Collections> {
        self.collections.lock().expect("store mutex poisoned")
    }

    /// Appends a sale to the ledger.
    ///
    /// Order completion is the normal author of sales; this is public for
    /// imports and backfills. Ids must be unique since reports key on them.
    ///
    /// ## Returns
    /// * `Ok(Sale)` - The sale as recorded
    /// * `Err(StoreError::Duplicate)` - A sale with this id already exists
    pub fn append(&self, sale: Sale) -> StoreResult<Sale> {
        let mut guard = self.lock();
        if guard.sales.iter().any(|s| s.id == sale.id) {
            return Err(StoreError::duplicate("Sale", &sale.id));
        }

        debug!(sale_id = %sale.id, amount = %sale.amount, "Sale appended");
        guard.sales.push(sale.clone());
        Ok(sale)
    }

    /// Lists all sales in recording order (oldest first).
    pub fn list(&self) -> Vec<Sale> {
        self.lock().sales.clone()
    }

    /// Lists all sales newest-first, for the dashboard feed.
    pub fn recent(&self) -> Vec<Sale> {
        let mut sales = self.lock().sales.clone();
        sales.sort_by(|a, b| b.date.cmp(&a.date));
        sales
    }

    /// Lists sales whose recording instant falls inside the date range.
    pub fn in_range(&self, range: &DateRange) -> Vec<Sale> {
        self.query(|sale| range.contains(sale.date))
    }

    /// Lists sales matching an arbitrary predicate, in recording order.
    pub fn query<P>(&self, predicate: P) -> Vec<Sale>
    where
        P: Fn(&Sale) -> bool,
    {
        self.lock()
            .sales
            .iter()
            .filter(|s| predicate(s))
            .cloned()
            .collect()
    }

    /// Returns the number of recorded sales.
    pub fn count(&self) -> usize {
        self.lock().sales.len()
    }
}

// =============================================================================
// ID Generation
// =============================================================================

/// Generates a new UUID v4 sale id.
pub fn generate_sale_id() -> String {
    Uuid::new_v4().to_string()
}

// =============================================================================
// Unit Tests
// =============================================================================
