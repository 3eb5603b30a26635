//! # Order Draft
//!
//! The mutable order being assembled at the till, before submission.
//!
//! ## Draft Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Draft Operations                                     │
//! │                                                                         │
//! │  Frontend Action          Draft Method            State Change          │
//! │  ───────────────          ────────────            ────────────          │
//! │                                                                         │
//! │  Tap Menu Item ──────────► add_item() ──────────► merge or push line   │
//! │                                                                         │
//! │  Tap + / - ──────────────► increment() / ───────► qty ± 1              │
//! │                            decrement()            (0 removes the line)  │
//! │                                                                         │
//! │  Type Quantity ──────────► set_quantity() ──────► qty = n              │
//! │                                                                         │
//! │  Tap Remove ─────────────► remove_item() ───────► drop the line        │
//! │                                                                         │
//! │  Submit ─────────────────► OrderRepository::create(&draft)             │
//! │                                                                         │
//! │  The SAME draft shape drives edits: modify(id, &draft) replaces the    │
//! │  order's items, details and discount wholesale, never its status.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;
use crate::pricing;
use crate::types::{MenuItem, OrderItem, OrderType};
use crate::validation::{
    validate_discount, validate_line_count, validate_quantity, ValidationResult,
};

/// An order under construction (or re-construction, when editing).
///
/// ## Invariants
/// - Lines are unique by menu item id (adding the same item merges quantity)
/// - Stored quantities stay within 1..=`MAX_ITEM_QUANTITY` (reaching 0
///   removes the line); at most `MAX_ORDER_LINES` distinct lines
/// - Unavailable menu items are rejected at add time
///
/// Fields are public because the order form binds to them directly; the
/// store re-runs every rule at submission (quantity and line caps,
/// availability of the frozen copies, discount, estimate, per-type
/// details), so a hand-built draft faces the same checks as one built
/// through these methods.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
    pub order_type: OrderType,

    /// Dining table (table orders).
    pub table_number: Option<i64>,

    /// Customer name (takeaway and delivery orders).
    pub customer_name: Option<String>,

    /// Customer contact (takeaway and delivery orders).
    pub customer_contact: Option<String>,

    /// Delivery address (delivery orders).
    pub delivery_address: Option<String>,

    /// Lines with frozen menu item copies.
    pub items: Vec<OrderItem>,

    /// Percentage discount on the subtotal (0-100).
    pub discount: u32,

    /// Preparation estimate in minutes; `None` takes the store default.
    pub estimated_time: Option<i64>,
}

impl OrderDraft {
    /// Creates an empty draft of the given type.
    pub fn new(order_type: OrderType) -> Self {
        OrderDraft {
            order_type,
            table_number: None,
            customer_name: None,
            customer_contact: None,
            delivery_address: None,
            items: Vec::new(),
            discount: 0,
            estimated_time: None,
        }
    }

    /// Draft for a dine-in order at the given table.
    pub fn table(table_number: i64) -> Self {
        let mut draft = OrderDraft::new(OrderType::Table);
        draft.table_number = Some(table_number);
        draft
    }

    /// Draft for a counter pickup.
    pub fn takeaway(customer_name: impl Into<String>, customer_contact: impl Into<String>) -> Self {
        let mut draft = OrderDraft::new(OrderType::Takeaway);
        draft.customer_name = Some(customer_name.into());
        draft.customer_contact = Some(customer_contact.into());
        draft
    }

    /// Draft for a delivery order.
    pub fn delivery(
        customer_name: impl Into<String>,
        customer_contact: impl Into<String>,
        delivery_address: impl Into<String>,
    ) -> Self {
        let mut draft = OrderDraft::new(OrderType::Delivery);
        draft.customer_name = Some(customer_name.into());
        draft.customer_contact = Some(customer_contact.into());
        draft.delivery_address = Some(delivery_address.into());
        draft
    }

    /// Adds a menu item to the draft or increases quantity if already
    /// present.
    ///
    /// ## Behavior
    /// - Unavailable items are rejected before touching the lines
    /// - If the item is already drafted: quantities merge
    /// - Otherwise: a frozen copy of the item is pushed as a new line
    /// - A merge past `MAX_ITEM_QUANTITY` or a line past `MAX_ORDER_LINES`
    ///   is rejected with the draft unchanged
    pub fn add_item(&mut self, item: &MenuItem, quantity: i64) -> ValidationResult<()> {
        validate_quantity(quantity)?;
        if !item.available {
            return Err(ValidationError::Unavailable {
                name: item.name.clone(),
            });
        }

        if let Some(line) = self.items.iter_mut().find(|l| l.menu_item.id == item.id) {
            // Both sides are already capped, so the sum cannot overflow
            let merged = line.quantity + quantity;
            validate_quantity(merged)?;
            line.quantity = merged;
            return Ok(());
        }

        validate_line_count(self.items.len() + 1)?;
        self.items.push(OrderItem::from_menu_item(item, quantity));
        Ok(())
    }

    /// Sets the quantity of a drafted line.
    ///
    /// ## Behavior
    /// - If quantity is 0: removes the line
    /// - If the item is not drafted: returns error
    pub fn set_quantity(&mut self, menu_item_id: &str, quantity: i64) -> ValidationResult<()> {
        if quantity == 0 {
            return self.remove_item(menu_item_id);
        }
        validate_quantity(quantity)?;

        if let Some(line) = self.items.iter_mut().find(|l| l.menu_item.id == menu_item_id) {
            line.quantity = quantity;
            Ok(())
        } else {
            Err(ValidationError::UnknownItem {
                id: menu_item_id.to_string(),
            })
        }
    }

    /// Increases a drafted line's quantity by one, up to `MAX_ITEM_QUANTITY`.
    pub fn increment(&mut self, menu_item_id: &str) -> ValidationResult<()> {
        let quantity = self
            .items
            .iter()
            .find(|l| l.menu_item.id == menu_item_id)
            .map(|l| l.quantity)
            .ok_or_else(|| ValidationError::UnknownItem {
                id: menu_item_id.to_string(),
            })?;
        self.set_quantity(menu_item_id, quantity + 1)
    }

    /// Decreases a drafted line's quantity by one. Reaching 0 removes the
    /// line entirely; there is no such thing as a zero-quantity line.
    pub fn decrement(&mut self, menu_item_id: &str) -> ValidationResult<()> {
        let quantity = self
            .items
            .iter()
            .find(|l| l.menu_item.id == menu_item_id)
            .map(|l| l.quantity)
            .ok_or_else(|| ValidationError::UnknownItem {
                id: menu_item_id.to_string(),
            })?;
        self.set_quantity(menu_item_id, quantity - 1)
    }

    /// Removes a line by menu item id.
    pub fn remove_item(&mut self, menu_item_id: &str) -> ValidationResult<()> {
        let initial_len = self.items.len();
        self.items.retain(|l| l.menu_item.id != menu_item_id);

        if self.items.len() == initial_len {
            Err(ValidationError::UnknownItem {
                id: menu_item_id.to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Sets the discount percentage (0-100).
    pub fn set_discount(&mut self, percent: u32) -> ValidationResult<()> {
        validate_discount(percent)?;
        self.discount = percent;
        Ok(())
    }

    /// Clears all lines.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns the number of distinct lines.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the total quantity across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|l| l.quantity).sum()
    }

    /// Running subtotal of the drafted lines.
    pub fn subtotal(&self) -> Money {
        pricing::subtotal(&self.items)
    }

    /// Running total: subtotal less the drafted discount.
    pub fn total(&self) -> Money {
        pricing::order_total(&self.items, self.discount)
    }

    /// Checks if the draft has no lines.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The detail fields the order should actually carry for this draft's
    /// type. Details belonging to other types are dropped, so switching
    /// the form between types never leaks stale fields into the order.
    pub fn details_for_type(
        &self,
    ) -> (Option<i64>, Option<String>, Option<String>, Option<String>) {
        match self.order_type {
            OrderType::Table => (self.table_number, None, None, None),
            OrderType::Takeaway => (
                None,
                self.customer_name.clone(),
                self.customer_contact.clone(),
                None,
            ),
            OrderType::Delivery => (
                None,
                self.customer_name.clone(),
                self.customer_contact.clone(),
                self.delivery_address.clone(),
            ),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
