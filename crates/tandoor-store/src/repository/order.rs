//! # Order Repository
//!
//! Order lifecycle operations.
//!
//! ## Order Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Order Lifecycle                                   │
//! │                                                                         │
//! │  1. CREATE                                                              │
//! │     └── create(&draft) → Order { status: Pending }                      │
//! │         (validates draft, freezes item copies, computes totals)         │
//! │                                                                         │
//! │  2. (OPTIONAL) EDIT                                                     │
//! │     └── modify(id, &draft) → items/details/discount replaced,           │
//! │         totals recomputed; status and created_at never touched          │
//! │                                                                         │
//! │  3. (OPTIONAL) START                                                    │
//! │     └── start(id) → Order { status: InProgress }                        │
//! │                                                                         │
//! │  4a. COMPLETE                                                           │
//! │      └── complete(id) → Order { status: Completed }                     │
//! │          (ALSO appends exactly one Sale, under the same lock)           │
//! │                                                                         │
//! │  4b. CANCEL                                                             │
//! │      └── cancel(id) → Order { status: Cancelled }, no Sale              │
//! │                                                                         │
//! │  Completed and cancelled orders are locked for good.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::MutexGuard;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use tandoor_core::{pricing, status, validation, CoreError, Order, OrderDraft, OrderStatus, Sale};

use crate::error::{StoreError, StoreResult};
use crate::repository::sale::generate_sale_id;
use crate::store::{Collections, Shared, StoreConfig};

/// Repository for order lifecycle operations.
///
/// ## Usage
/// ```rust,ignore
/// let orders = store.orders();
///
/// let order = orders.create(&draft)?;
/// orders.start(&order.id)?;
/// orders.complete(&order.id)?;   // records the sale
/// ```
#[derive(Debug, Clone)]
pub struct OrderRepository {
    collections: Shared,
    config: StoreConfig,
}

impl OrderRepository {
    /// Creates a new OrderRepository over the shared state.
    pub(crate) fn new(collections: Shared, config: StoreConfig) -> Self {
        OrderRepository {
            collections,
            config,
        }
    }

    fn lock(&self) -> MutexGuard<'_, Collections> {
        self.collections.lock().expect("store mutex poisoned")
    }

    /// Creates a pending order from a draft.
    ///
    /// ## What This Does
    /// 1. Validates the draft (items, discount, per-type details)
    /// 2. Keeps only the detail fields the order type calls for
    /// 3. Freezes the drafted item copies and computes both totals
    /// 4. Stamps id, pending status and creation time
    ///
    /// ## Returns
    /// * `Ok(Order)` - The order as stored
    /// * `Err(StoreError::Core)` - Draft validation failed
    pub fn create(&self, draft: &OrderDraft) -> StoreResult<Order> {
        validation::validate_draft(draft)?;

        let (table_number, customer_name, customer_contact, delivery_address) =
            draft.details_for_type();

        let order = Order {
            id: generate_order_id(),
            order_type: draft.order_type,
            table_number,
            customer_name,
            customer_contact,
            delivery_address,
            items: draft.items.clone(),
            status: OrderStatus::Pending,
            subtotal: pricing::subtotal(&draft.items),
            discount: draft.discount,
            total: pricing::order_total(&draft.items, draft.discount),
            estimated_time: draft
                .estimated_time
                .unwrap_or(self.config.default_estimated_time),
            created_at: Utc::now(),
            completed_at: None,
        };

        info!(
            order_id = %order.id,
            order_type = %order.order_type,
            total = %order.total,
            "Order created"
        );

        self.lock().orders.push(order.clone());
        Ok(order)
    }

    /// Gets an order by id.
    pub fn get(&self, id: &str) -> Option<Order> {
        self.lock().orders.iter().find(|o| o.id == id).cloned()
    }

    /// Lists all orders in creation order.
    pub fn list(&self) -> Vec<Order> {
        self.lock().orders.clone()
    }

    /// Lists orders still on the kitchen board (pending or in-progress).
    pub fn active(&self) -> Vec<Order> {
        self.lock()
            .orders
            .iter()
            .filter(|o| o.status.is_active())
            .cloned()
            .collect()
    }

    /// Returns the number of orders ever created, every status included.
    pub fn count(&self) -> usize {
        self.lock().orders.len()
    }

    /// Replaces an order's items, details and discount from a draft.
    ///
    /// Totals are recomputed from the new inputs. The order's id, status,
    /// creation time and completion time are never touched; a draft
    /// without an estimate keeps the order's existing one.
    ///
    /// ## Returns
    /// * `Ok(Order)` - The order as stored after the edit
    /// * `Err(StoreError::NotFound)` - No order under this id
    /// * `Err(StoreError::Core(CoreError::OrderLocked))` - Order is terminal
    /// * `Err(StoreError::Core)` - Draft validation failed
    pub fn modify(&self, id: &str, draft: &OrderDraft) -> StoreResult<Order> {
        validation::validate_draft(draft)?;

        let mut guard = self.lock();
        let order = guard
            .orders
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or_else(|| StoreError::not_found("Order", id))?;

        if order.status.is_terminal() {
            return Err(CoreError::OrderLocked {
                order_id: order.id.clone(),
                status: order.status,
            }
            .into());
        }

        let (table_number, customer_name, customer_contact, delivery_address) =
            draft.details_for_type();

        order.order_type = draft.order_type;
        order.table_number = table_number;
        order.customer_name = customer_name;
        order.customer_contact = customer_contact;
        order.delivery_address = delivery_address;
        order.items = draft.items.clone();
        order.discount = draft.discount;
        order.subtotal = pricing::subtotal(&order.items);
        order.total = pricing::order_total(&order.items, order.discount);
        if let Some(minutes) = draft.estimated_time {
            order.estimated_time = minutes;
        }

        info!(order_id = %order.id, total = %order.total, "Order modified");
        Ok(order.clone())
    }

    /// Moves a pending order onto the kitchen.
    pub fn start(&self, id: &str) -> StoreResult<Order> {
        self.transition(id, OrderStatus::InProgress)
    }

    /// Cancels an active order. No sale is recorded, ever.
    pub fn cancel(&self, id: &str) -> StoreResult<Order> {
        self.transition(id, OrderStatus::Cancelled)
    }

    /// Completes an active order and records its sale.
    ///
    /// The status check, the status flip and the ledger append all happen
    /// under ONE lock acquisition. Two terminals racing to complete the
    /// same order means one wins and one gets `InvalidTransition`; the
    /// ledger gains exactly one sale either way.
    ///
    /// ## Returns
    /// * `Ok(Order)` - The completed order
    /// * `Err(StoreError::NotFound)` - No order under this id
    /// * `Err(StoreError::Core(CoreError::InvalidTransition))` - Already
    ///   terminal (including already completed)
    pub fn complete(&self, id: &str) -> StoreResult<Order> {
        let mut guard = self.lock();
        let Collections { orders, sales, .. } = &mut *guard;

        let order = orders
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or_else(|| StoreError::not_found("Order", id))?;

        status::transition(order.status, OrderStatus::Completed)?;

        let now = Utc::now();
        order.status = OrderStatus::Completed;
        order.completed_at = Some(now);

        let sale = Sale {
            id: generate_sale_id(),
            order_id: order.id.clone(),
            amount: order.total,
            date: now,
            items: order.items.clone(),
        };

        info!(
            order_id = %order.id,
            sale_id = %sale.id,
            amount = %order.total,
            "Order completed, sale recorded"
        );

        let completed = order.clone();
        sales.push(sale);
        Ok(completed)
    }

    /// Applies a bare status transition (no side effects).
    fn transition(&self, id: &str, to: OrderStatus) -> StoreResult<Order> {
        let mut guard = self.lock();
        let order = guard
            .orders
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or_else(|| StoreError::not_found("Order", id))?;

        status::transition(order.status, to)?;
        order.status = to;

        info!(order_id = %order.id, status = %to, "Order status changed");
        Ok(order.clone())
    }
}

// =============================================================================
// ID Generation
// =============================================================================

/// Generates a new UUID v4 order id.
pub fn generate_order_id() -> String {
    Uuid::new_v4().to_string()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Store;
    use tandoor_core::{MenuItem, Money, OrderItem, OrderType, ValidationError};

    /// Store with the worked-example menu: PKR 100 tikka, PKR 50 margarita.
    fn seeded_store() -> Store {
        let store = Store::default();
        let catalog = store.catalog();
        catalog
            .add(MenuItem::new(
                "mi-tikka",
                "Chicken Tikka",
                "BBQ",
                Money::from_rupees(100),
            ))
            .unwrap();
        catalog
            .add(MenuItem::new(
                "mi-marg",
                "Mint Margarita",
                "Drinks",
                Money::from_rupees(50),
            ))
            .unwrap();
        store
    }

    /// Table 4: 2 tikka + 1 margarita, 10% off. Totals 250 -> 225.
    fn worked_draft(store: &Store) -> OrderDraft {
        let catalog = store.catalog();
        let mut draft = OrderDraft::table(4);
        draft
            .add_item(&catalog.get("mi-tikka").unwrap(), 2)
            .unwrap();
        draft
            .add_item(&catalog.get("mi-marg").unwrap(), 1)
            .unwrap();
        draft.set_discount(10).unwrap();
        draft
    }

    #[test]
    fn test_create_pending_with_totals() {
        let store = seeded_store();
        let order = store.orders().create(&worked_draft(&store)).unwrap();

        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.subtotal, Money::from_rupees(250));
        assert_eq!(order.total, Money::from_rupees(225));
        assert_eq!(order.table_number, Some(4));
        assert_eq!(order.estimated_time, 30);
        assert!(order.completed_at.is_none());
        assert!(!order.id.is_empty());

        assert_eq!(store.orders().count(), 1);
        assert_eq!(store.orders().get(&order.id).unwrap().id, order.id);
    }

    #[test]
    fn test_create_uses_configured_estimate() {
        let store = Store::new(crate::store::StoreConfig::new().default_estimated_time(45));
        store
            .catalog()
            .add(MenuItem::new("mi-1", "Nihari", "Curries", Money::from_rupees(900)))
            .unwrap();

        let mut draft = OrderDraft::table(2);
        draft
            .add_item(&store.catalog().get("mi-1").unwrap(), 1)
            .unwrap();
        assert_eq!(store.orders().create(&draft).unwrap().estimated_time, 45);

        draft.estimated_time = Some(20);
        assert_eq!(store.orders().create(&draft).unwrap().estimated_time, 20);
    }

    #[test]
    fn test_create_rejects_empty_and_missing_details() {
        let store = seeded_store();
        let orders = store.orders();

        let empty = OrderDraft::table(4);
        assert!(matches!(
            orders.create(&empty).unwrap_err(),
            StoreError::Core(CoreError::Validation(ValidationError::NoItems))
        ));

        // Delivery order with blank customer name
        let mut delivery = OrderDraft::delivery("", "0300-1234567", "House 12, F-7");
        delivery
            .add_item(&store.catalog().get("mi-tikka").unwrap(), 1)
            .unwrap();
        assert!(orders.create(&delivery).is_err());

        // Same draft with the name filled succeeds
        delivery.customer_name = Some("Sana".to_string());
        assert!(orders.create(&delivery).is_ok());

        assert_eq!(orders.count(), 1);
    }

    #[test]
    fn test_create_rejects_unavailable_line() {
        let store = seeded_store();
        store
            .catalog()
            .update(
                "mi-marg",
                &crate::repository::catalog::MenuItemPatch {
                    available: Some(false),
                    ..Default::default()
                },
            )
            .unwrap();

        // Hand-built draft embedding the sold-out copy, bypassing add_item
        let mut draft = OrderDraft::table(4);
        draft.items.push(OrderItem::from_menu_item(
            &store.catalog().get("mi-marg").unwrap(),
            1,
        ));

        assert!(matches!(
            store.orders().create(&draft).unwrap_err(),
            StoreError::Core(CoreError::Validation(ValidationError::Unavailable { .. }))
        ));
        assert_eq!(store.orders().count(), 0);
    }

    #[test]
    fn test_create_drops_details_from_other_types() {
        let store = seeded_store();
        let mut draft = worked_draft(&store);
        // Stale takeaway fields left over from form switching
        draft.customer_name = Some("Ali".to_string());
        draft.customer_contact = Some("0300-1234567".to_string());

        let order = store.orders().create(&draft).unwrap();
        assert_eq!(order.order_type, OrderType::Table);
        assert!(order.customer_name.is_none());
        assert!(order.customer_contact.is_none());
    }

    #[test]
    fn test_snapshot_isolation_from_catalog() {
        let store = seeded_store();
        let order = store.orders().create(&worked_draft(&store)).unwrap();

        // Delete one item, reprice the other
        store.catalog().remove("mi-marg").unwrap();
        store
            .catalog()
            .update(
                "mi-tikka",
                &crate::repository::catalog::MenuItemPatch {
                    price: Some(Money::from_rupees(999)),
                    ..Default::default()
                },
            )
            .unwrap();

        let stored = store.orders().get(&order.id).unwrap();
        assert_eq!(stored.items.len(), 2);
        assert_eq!(stored.items[0].menu_item.price, Money::from_rupees(100));
        assert_eq!(stored.items[1].menu_item.name, "Mint Margarita");
        assert_eq!(stored.total, Money::from_rupees(225));
    }

    #[test]
    fn test_modify_replaces_and_recomputes() {
        let store = seeded_store();
        let orders = store.orders();
        let order = orders.create(&worked_draft(&store)).unwrap();

        let mut edit = OrderDraft::table(7);
        edit.add_item(&store.catalog().get("mi-marg").unwrap(), 2)
            .unwrap();
        edit.set_discount(0).unwrap();

        let updated = orders.modify(&order.id, &edit).unwrap();
        assert_eq!(updated.id, order.id);
        assert_eq!(updated.table_number, Some(7));
        assert_eq!(updated.subtotal, Money::from_rupees(100));
        assert_eq!(updated.total, Money::from_rupees(100));
        assert_eq!(updated.status, OrderStatus::Pending);
        assert_eq!(updated.created_at, order.created_at);
        // No estimate in the edit draft keeps the existing one
        assert_eq!(updated.estimated_time, order.estimated_time);
    }

    #[test]
    fn test_modify_can_switch_order_type() {
        let store = seeded_store();
        let orders = store.orders();
        let order = orders.create(&worked_draft(&store)).unwrap();

        let mut edit = OrderDraft::takeaway("Ali", "0300-1234567");
        edit.add_item(&store.catalog().get("mi-tikka").unwrap(), 1)
            .unwrap();

        let updated = orders.modify(&order.id, &edit).unwrap();
        assert_eq!(updated.order_type, OrderType::Takeaway);
        assert!(updated.table_number.is_none());
        assert_eq!(updated.customer_name.as_deref(), Some("Ali"));
    }

    #[test]
    fn test_modify_unknown_and_invalid() {
        let store = seeded_store();
        let orders = store.orders();
        orders.create(&worked_draft(&store)).unwrap();

        assert!(matches!(
            orders.modify("ghost", &worked_draft(&store)).unwrap_err(),
            StoreError::NotFound { .. }
        ));

        let order = orders.list().pop().unwrap();
        let mut bad = worked_draft(&store);
        bad.discount = 150;
        assert!(orders.modify(&order.id, &bad).is_err());

        // Rejected edit left the order untouched
        let stored = orders.get(&order.id).unwrap();
        assert_eq!(stored.discount, 10);
        assert_eq!(stored.total, Money::from_rupees(225));
    }

    #[test]
    fn test_modify_terminal_order_locked() {
        let store = seeded_store();
        let orders = store.orders();
        let order = orders.create(&worked_draft(&store)).unwrap();
        orders.complete(&order.id).unwrap();

        let err = orders.modify(&order.id, &worked_draft(&store)).unwrap_err();
        assert!(matches!(
            err,
            StoreError::Core(CoreError::OrderLocked { .. })
        ));

        let cancelled = orders.create(&worked_draft(&store)).unwrap();
        orders.cancel(&cancelled.id).unwrap();
        assert!(orders.modify(&cancelled.id, &worked_draft(&store)).is_err());
    }

    #[test]
    fn test_start_then_complete() {
        let store = seeded_store();
        let orders = store.orders();
        let order = orders.create(&worked_draft(&store)).unwrap();

        let started = orders.start(&order.id).unwrap();
        assert_eq!(started.status, OrderStatus::InProgress);

        // Starting twice is not a thing
        assert!(matches!(
            orders.start(&order.id).unwrap_err(),
            StoreError::Core(CoreError::InvalidTransition { .. })
        ));

        let completed = orders.complete(&order.id).unwrap();
        assert_eq!(completed.status, OrderStatus::Completed);
        assert!(completed.completed_at.is_some());
    }

    #[test]
    fn test_complete_records_exactly_one_sale() {
        let store = seeded_store();
        let orders = store.orders();
        let order = orders.create(&worked_draft(&store)).unwrap();

        orders.complete(&order.id).unwrap();

        let sales = store.sales().list();
        assert_eq!(sales.len(), 1);
        assert_eq!(sales[0].order_id, order.id);
        assert_eq!(sales[0].amount, Money::from_rupees(225));
        assert_eq!(sales[0].items.len(), 2);

        // Second completion is rejected and records nothing
        assert!(matches!(
            orders.complete(&order.id).unwrap_err(),
            StoreError::Core(CoreError::InvalidTransition { .. })
        ));
        assert_eq!(store.sales().count(), 1);
    }

    #[test]
    fn test_cancel_records_no_sale() {
        let store = seeded_store();
        let orders = store.orders();
        let order = orders.create(&worked_draft(&store)).unwrap();

        let cancelled = orders.cancel(&order.id).unwrap();
        assert_eq!(cancelled.status, OrderStatus::Cancelled);
        assert!(cancelled.completed_at.is_none());
        assert_eq!(store.sales().count(), 0);

        // A cancelled order can never be completed afterwards
        assert!(orders.complete(&order.id).is_err());
        assert_eq!(store.sales().count(), 0);
    }

    #[test]
    fn test_sale_reflects_last_edit_before_completion() {
        let store = seeded_store();
        let orders = store.orders();
        let order = orders.create(&worked_draft(&store)).unwrap();

        let mut edit = worked_draft(&store);
        edit.set_discount(50).unwrap();
        orders.modify(&order.id, &edit).unwrap();

        orders.complete(&order.id).unwrap();
        assert_eq!(store.sales().list()[0].amount, Money::from_rupees(125));
    }

    #[test]
    fn test_active_listing() {
        let store = seeded_store();
        let orders = store.orders();
        let a = orders.create(&worked_draft(&store)).unwrap();
        let b = orders.create(&worked_draft(&store)).unwrap();
        let c = orders.create(&worked_draft(&store)).unwrap();

        orders.start(&b.id).unwrap();
        orders.complete(&c.id).unwrap();

        let active: Vec<String> = orders.active().into_iter().map(|o| o.id).collect();
        assert_eq!(active, vec![a.id, b.id]);
        assert_eq!(orders.count(), 3);
    }
}
