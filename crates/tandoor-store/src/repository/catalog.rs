//! # Catalog Repository
//!
//! Menu item management and queries.
//!
//! ## Key Operations
//! - CRUD with duplicate-id and deal-reference checks
//! - Availability and category filters for the order grid
//! - Deal savings resolution against current prices
//!
//! ## Deals Are Items Too
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    How a Deal Hangs Together                            │
//! │                                                                         │
//! │  "Family Feast"  (category "deals", is_deal, price: PKR 2400)           │
//! │        │                                                                │
//! │        ├── 1 × Chicken Karahi   (mi-karahi, PKR 1450)                   │
//! │        ├── 4 × Garlic Naan      (mi-naan,   PKR  120)                   │
//! │        └── 4 × Soft Drink       (mi-drink,  PKR  150)                   │
//! │                                                                         │
//! │  constituents at current prices: 1450 + 480 + 600 = PKR 2530           │
//! │  bundle price:                                       PKR 2400           │
//! │  deal_savings("Family Feast")  →                     PKR  130           │
//! │                                                                         │
//! │  Constituents must exist and must not themselves be deals.              │
//! │  Deleting a constituent later is tolerated: its price resolves to 0.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::MutexGuard;

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use tandoor_core::validation::validate_menu_item;
use tandoor_core::{pricing, DealComponent, MenuItem, Money, ValidationError};

use crate::error::{StoreError, StoreResult};
use crate::store::{Collections, Shared};

// =============================================================================
// Patch Type
// =============================================================================

/// A partial update to a menu item. `None` fields stay as they are.
///
/// Deal-ness itself is not patchable: an item is created as a deal or as an
/// ordinary item and stays that kind for life.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemPatch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub sub_category: Option<String>,
    pub price: Option<Money>,
    pub description: Option<String>,
    pub available: Option<bool>,
    pub image: Option<String>,
    pub deal_items: Option<Vec<DealComponent>>,
}

impl MenuItemPatch {
    /// Produces the item as it would look with this patch applied.
    fn apply_to(&self, item: &MenuItem) -> MenuItem {
        let mut updated = item.clone();
        if let Some(name) = &self.name {
            updated.name = name.clone();
        }
        if let Some(category) = &self.category {
            updated.category = category.clone();
        }
        if let Some(sub_category) = &self.sub_category {
            updated.sub_category = Some(sub_category.clone());
        }
        if let Some(price) = self.price {
            updated.price = price;
        }
        if let Some(description) = &self.description {
            updated.description = Some(description.clone());
        }
        if let Some(available) = self.available {
            updated.available = available;
        }
        if let Some(image) = &self.image {
            updated.image = Some(image.clone());
        }
        if let Some(deal_items) = &self.deal_items {
            updated.deal_items = Some(deal_items.clone());
        }
        updated
    }
}

// =============================================================================
// Catalog Repository
// =============================================================================

/// Repository for menu item operations.
///
/// ## Usage
/// ```rust,ignore
/// let catalog = store.catalog();
///
/// let naan = catalog.add(MenuItem::new(
///     generate_menu_item_id(),
///     "Garlic Naan",
///     "Bread",
///     Money::from_rupees(120),
/// ))?;
///
/// let breads = catalog.by_category("Bread");
/// ```
#[derive(Debug, Clone)]
pub struct CatalogRepository {
    collections: Shared,
}

impl CatalogRepository {
    /// Creates a new CatalogRepository over the shared state.
    pub(crate) fn new(collections: Shared) -> Self {
        CatalogRepository { collections }
    }

    fn lock(&self) -> MutexGuard<'_, Collections> {
        self.collections.lock().expect("store mutex poisoned")
    }

    /// Adds a menu item to the catalog.
    ///
    /// ## Returns
    /// * `Ok(MenuItem)` - The item as stored
    /// * `Err(StoreError::Duplicate)` - An item with this id already exists
    /// * `Err(StoreError::Core)` - Shape or reference validation failed
    pub fn add(&self, item: MenuItem) -> StoreResult<MenuItem> {
        validate_menu_item(&item)?;

        let mut guard = self.lock();
        if guard.menu_items.iter().any(|existing| existing.id == item.id) {
            return Err(StoreError::duplicate("MenuItem", &item.id));
        }
        validate_deal_references(&guard.menu_items, &item)?;

        debug!(id = %item.id, name = %item.name, "Adding menu item");
        guard.menu_items.push(item.clone());
        Ok(item)
    }

    /// Gets a menu item by id.
    pub fn get(&self, id: &str) -> Option<MenuItem> {
        self.lock().menu_items.iter().find(|i| i.id == id).cloned()
    }

    /// Lists the whole catalog in insertion order.
    pub fn list(&self) -> Vec<MenuItem> {
        self.lock().menu_items.clone()
    }

    /// Lists items currently orderable (the till's menu grid).
    pub fn list_available(&self) -> Vec<MenuItem> {
        self.lock()
            .menu_items
            .iter()
            .filter(|i| i.available)
            .cloned()
            .collect()
    }

    /// Lists items of one category, insertion order preserved.
    pub fn by_category(&self, category: &str) -> Vec<MenuItem> {
        self.lock()
            .menu_items
            .iter()
            .filter(|i| i.category == category)
            .cloned()
            .collect()
    }

    /// Lists all deals.
    pub fn deals(&self) -> Vec<MenuItem> {
        self.lock()
            .menu_items
            .iter()
            .filter(|i| i.is_deal)
            .cloned()
            .collect()
    }

    /// Searches available items by name, case-insensitively.
    ///
    /// An empty (or all-whitespace) query returns the full available list,
    /// so the search box doubles as the default grid.
    pub fn search(&self, query: &str) -> Vec<MenuItem> {
        let query = query.trim();

        debug!(query = %query, "Searching menu items");

        if query.is_empty() {
            return self.list_available();
        }

        let needle = query.to_lowercase();
        let matches: Vec<MenuItem> = self
            .lock()
            .menu_items
            .iter()
            .filter(|i| i.available && i.name.to_lowercase().contains(&needle))
            .cloned()
            .collect();

        debug!(count = matches.len(), "Search returned menu items");
        matches
    }

    /// Applies a partial update to a menu item.
    ///
    /// The patched item is validated as a whole BEFORE anything is stored,
    /// so a rejected update leaves the catalog untouched.
    ///
    /// ## Returns
    /// * `Ok(MenuItem)` - The item as stored after the patch
    /// * `Err(StoreError::NotFound)` - No item under this id
    /// * `Err(StoreError::Core)` - The patched item would violate a rule
    pub fn update(&self, id: &str, patch: &MenuItemPatch) -> StoreResult<MenuItem> {
        let mut guard = self.lock();
        let index = guard
            .menu_items
            .iter()
            .position(|i| i.id == id)
            .ok_or_else(|| StoreError::not_found("MenuItem", id))?;

        let updated = patch.apply_to(&guard.menu_items[index]);
        validate_menu_item(&updated)?;
        validate_deal_references(&guard.menu_items, &updated)?;

        debug!(id = %id, "Updating menu item");
        guard.menu_items[index] = updated.clone();
        Ok(updated)
    }

    /// Removes a menu item from the catalog.
    ///
    /// Removal does not cascade: existing orders and sales keep their
    /// frozen copies, and deals referencing the removed item keep working
    /// with its price resolved to zero.
    ///
    /// ## Returns
    /// * `Ok(())` - Item removed
    /// * `Err(StoreError::NotFound)` - No item under this id
    pub fn remove(&self, id: &str) -> StoreResult<()> {
        let mut guard = self.lock();
        let index = guard
            .menu_items
            .iter()
            .position(|i| i.id == id)
            .ok_or_else(|| StoreError::not_found("MenuItem", id))?;

        debug!(id = %id, "Removing menu item");
        guard.menu_items.remove(index);
        Ok(())
    }

    /// What a customer saves buying the given deal right now.
    ///
    /// Resolves constituents against current catalog prices; deleted
    /// constituents count as zero. Negative savings are returned as-is so
    /// the menu editor can flag a badly priced bundle.
    pub fn deal_savings(&self, id: &str) -> StoreResult<Money> {
        let guard = self.lock();
        let deal = guard
            .menu_items
            .iter()
            .find(|i| i.id == id)
            .ok_or_else(|| StoreError::not_found("MenuItem", id))?;

        if !deal.is_deal {
            return Err(ValidationError::InvalidFormat {
                field: "id".to_string(),
                reason: format!("{} is not a deal", deal.name),
            }
            .into());
        }

        let constituents: Vec<(Money, i64)> = deal
            .deal_items
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|component| {
                let price = guard
                    .menu_items
                    .iter()
                    .find(|i| i.id == component.menu_item_id)
                    .map(|i| i.price)
                    .unwrap_or(Money::zero());
                (price, component.quantity)
            })
            .collect();

        Ok(pricing::deal_savings(deal.price, &constituents))
    }

    /// Returns the number of catalog entries.
    pub fn count(&self) -> usize {
        self.lock().menu_items.len()
    }
}

/// Checks that a deal's constituents exist and are not themselves deals.
///
/// Runs under the caller's lock so the references cannot go stale between
/// check and insert.
fn validate_deal_references(
    menu_items: &[MenuItem],
    candidate: &MenuItem,
) -> Result<(), ValidationError> {
    let Some(components) = candidate.deal_items.as_deref() else {
        return Ok(());
    };

    for component in components {
        match menu_items.iter().find(|i| i.id == component.menu_item_id) {
            None => {
                return Err(ValidationError::UnknownItem {
                    id: component.menu_item_id.clone(),
                })
            }
            Some(target) if target.is_deal => {
                return Err(ValidationError::InvalidFormat {
                    field: "dealItems".to_string(),
                    reason: format!("{} is itself a deal; deals cannot nest", target.name),
                })
            }
            Some(_) => {}
        }
    }
    Ok(())
}

// =============================================================================
// ID Generation
// =============================================================================

/// Generates a new UUID v4 menu item id.
pub fn generate_menu_item_id() -> String {
    Uuid::new_v4().to_string()
}

// =============================================================================
// Unit Tests
// =============================================================================
