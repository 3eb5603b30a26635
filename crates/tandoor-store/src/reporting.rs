//! # Reporting
//!
//! Dashboard numbers derived from the ledger and the order list.
//!
//! ## Every Number Is a Fold
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Reporting Data Flow                                 │
//! │                                                                         │
//! │   sales ledger (append-only)          orders                            │
//! │        │                                │                               │
//! │        │  filter by DateRange           │  filter by day / status       │
//! │        ▼                                ▼                               │
//! │   ┌──────────────────────┐    ┌──────────────────────┐                  │
//! │   │ total_revenue        │    │ order_count          │                  │
//! │   │ average_order_value  │    │ pending_count        │                  │
//! │   │ popular_items        │    │ orders_created_on    │                  │
//! │   │ revenue_series       │    └──────────────────────┘                  │
//! │   └──────────────────────┘                                              │
//! │        │                                                                │
//! │        ▼                                                                │
//! │   stats(range) → StatsSummary for the dashboard                         │
//! │                                                                         │
//! │  No report writes anything. Rerunning one is always safe and always     │
//! │  gives the same answer for the same ledger.                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Amounts are summed at paisa precision and only rounded to whole rupees
//! when they cross the serialization boundary.

use std::collections::HashMap;
use std::sync::MutexGuard;

use chrono::NaiveDate;
use tracing::debug;

use tandoor_core::{
    DateRange, Money, Order, OrderStatus, PopularItem, RevenuePoint, Sale, StatsSummary,
};

use crate::store::{Collections, Shared, StoreConfig};

/// Read-only reporting handle.
#[derive(Debug, Clone)]
pub struct Reports {
    collections: Shared,
    config: StoreConfig,
}

impl Reports {
    /// Creates a new Reports handle over the shared state.
    pub(crate) fn new(collections: Shared, config: StoreConfig) -> Self {
        Reports {
            collections,
            config,
        }
    }

    fn lock(&self) -> MutexGuard<'_, Collections> {
        self.collections.lock().expect("store mutex poisoned")
    }

    /// Sums sale amounts recorded inside the range.
    pub fn total_revenue(&self, range: &DateRange) -> Money {
        self.lock()
            .sales
            .iter()
            .filter(|s| range.contains(s.date))
            .fold(Money::zero(), |acc, s| acc + s.amount)
    }

    /// Counts every order ever created, whatever its status.
    pub fn order_count(&self) -> usize {
        self.lock().orders.len()
    }

    /// Counts orders waiting to be started.
    pub fn pending_count(&self) -> usize {
        self.lock()
            .orders
            .iter()
            .filter(|o| o.status == OrderStatus::Pending)
            .count()
    }

    /// Lists orders created on a calendar day, in creation order.
    pub fn orders_created_on(&self, day: NaiveDate) -> Vec<Order> {
        self.lock()
            .orders
            .iter()
            .filter(|o| o.created_at.date_naive() == day)
            .cloned()
            .collect()
    }

    /// Mean sale amount over the range; zero when no sales fall inside it.
    ///
    /// The division happens in paisa, so a PKR 0.50 mean survives instead
    /// of collapsing to zero.
    pub fn average_order_value(&self, range: &DateRange) -> Money {
        let guard = self.lock();
        let in_range: Vec<&Sale> = guard
            .sales
            .iter()
            .filter(|s| range.contains(s.date))
            .collect();

        if in_range.is_empty() {
            return Money::zero();
        }

        let total = in_range
            .iter()
            .fold(Money::zero(), |acc, s| acc + s.amount);
        Money::from_paisa(total.paisa() / in_range.len() as i64)
    }

    /// Best sellers over the range, by total quantity sold.
    ///
    /// Quantities for the same menu item are summed across every sale line
    /// that carries its id. Ties keep first-sold-first order, so the
    /// ranking is stable across reruns. At most `limit` entries come back.
    pub fn popular_items(&self, range: &DateRange, limit: usize) -> Vec<PopularItem> {
        let guard = self.lock();

        let mut ranking: Vec<PopularItem> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for sale in guard.sales.iter().filter(|s| range.contains(s.date)) {
            for line in &sale.items {
                match index.get(&line.menu_item.id) {
                    Some(&at) => ranking[at].quantity += line.quantity,
                    None => {
                        index.insert(line.menu_item.id.clone(), ranking.len());
                        ranking.push(PopularItem {
                            menu_item_id: line.menu_item.id.clone(),
                            name: line.menu_item.name.clone(),
                            category: line.menu_item.category.clone(),
                            quantity: line.quantity,
                        });
                    }
                }
            }
        }

        ranking.sort_by(|a, b| b.quantity.cmp(&a.quantity));
        ranking.truncate(limit);
        ranking
    }

    /// Revenue per calendar day across the range, oldest first.
    ///
    /// Every day in the range gets a point; days without sales carry zero
    /// so charts never show gaps.
    pub fn revenue_series(&self, range: &DateRange) -> Vec<RevenuePoint> {
        let mut by_day: HashMap<NaiveDate, Money> = HashMap::new();
        {
            let guard = self.lock();
            for sale in guard.sales.iter().filter(|s| range.contains(s.date)) {
                let day = sale.date.date_naive();
                let entry = by_day.entry(day).or_insert_with(Money::zero);
                *entry += sale.amount;
            }
        }

        range
            .days()
            .into_iter()
            .map(|date| RevenuePoint {
                date,
                revenue: by_day.get(&date).copied().unwrap_or_else(Money::zero),
            })
            .collect()
    }

    /// Builds the dashboard summary for a range.
    ///
    /// Popular items are capped at the configured limit.
    pub fn stats(&self, range: &DateRange) -> StatsSummary {
        let summary = StatsSummary {
            total_revenue: self.total_revenue(range),
            total_orders: self.order_count(),
            average_order_value: self.average_order_value(range),
            popular_items: self.popular_items(range, self.config.popular_items_limit),
        };

        debug!(
            total_revenue = %summary.total_revenue,
            total_orders = summary.total_orders,
            "Stats computed"
        );
        summary
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
