//! # Domain Types
//!
//! Core domain types used throughout Tandoor POS.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    MenuItem     │   │      Order      │   │      Sale       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (opaque)    │   │  id (opaque)    │   │  id (opaque)    │       │
//! │  │  category       │   │  order_type     │   │  order_id       │       │
//! │  │  price          │   │  status         │   │  amount         │       │
//! │  │  is_deal        │   │  items (copies) │   │  items (copies) │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   OrderType     │   │   OrderStatus   │   │    DateRange    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  Table          │   │  Pending        │   │  from (date)    │       │
//! │  │  Takeaway       │   │  InProgress     │   │  to (date)      │       │
//! │  │  Delivery       │   │  Completed      │   │  inclusive      │       │
//! │  └─────────────────┘   │  Cancelled      │   └─────────────────┘       │
//! │                        └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! Orders and Sales embed full `MenuItem` copies, never id references.
//! Editing or deleting a catalog item must not rewrite what a customer was
//! actually charged.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;
use crate::DEALS_CATEGORY;

// =============================================================================
// Order Type
// =============================================================================

/// How the order reaches the customer.
///
/// The type decides which contact details are required:
/// table orders need a table number, takeaway orders need a reachable
/// customer, delivery orders additionally need an address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    /// Served at a numbered table in the dining hall.
    Table,
    /// Picked up at the counter.
    Takeaway,
    /// Delivered to an address.
    Delivery,
}

impl OrderType {
    /// Returns the wire representation.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            OrderType::Table => "table",
            OrderType::Takeaway => "takeaway",
            OrderType::Delivery => "delivery",
        }
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "table" => Ok(OrderType::Table),
            "takeaway" => Ok(OrderType::Takeaway),
            "delivery" => Ok(OrderType::Delivery),
            other => Err(ValidationError::InvalidFormat {
                field: "orderType".to_string(),
                reason: format!("unknown order type: {other}"),
            }),
        }
    }
}

/// Walk-in table service is the default flow at the till.
impl Default for OrderType {
    fn default() -> Self {
        OrderType::Table
    }
}

// =============================================================================
// Order Status
// =============================================================================

/// Lifecycle state of an order.
///
/// ```text
/// pending ──► in-progress ──► completed (records a Sale)
///    │             │
///    │             └────────► cancelled (no Sale)
///    ├──────────────────────► completed
///    └──────────────────────► cancelled
/// ```
///
/// `completed` and `cancelled` are terminal. See [`crate::status`] for the
/// transition rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    /// Order taken, kitchen not started.
    Pending,
    /// Kitchen is preparing the order.
    InProgress,
    /// Order served and paid; a Sale exists for it.
    Completed,
    /// Order abandoned; no Sale exists for it.
    Cancelled,
}

impl OrderStatus {
    /// Returns the wire representation.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::InProgress => "in-progress",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    /// Terminal states admit no further transitions.
    #[inline]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Completed | OrderStatus::Cancelled)
    }

    /// Active orders appear on the kitchen board.
    #[inline]
    pub const fn is_active(&self) -> bool {
        !self.is_terminal()
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(OrderStatus::Pending),
            "in-progress" => Ok(OrderStatus::InProgress),
            "completed" => Ok(OrderStatus::Completed),
            "cancelled" => Ok(OrderStatus::Cancelled),
            other => Err(ValidationError::InvalidFormat {
                field: "status".to_string(),
                reason: format!("unknown status: {other}"),
            }),
        }
    }
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Pending
    }
}

// =============================================================================
// Deal Component
// =============================================================================

/// One constituent of a deal: a non-deal menu item id and how many of it
/// the bundle includes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DealComponent {
    pub menu_item_id: String,
    pub quantity: i64,
}

impl DealComponent {
    pub fn new(menu_item_id: impl Into<String>, quantity: i64) -> Self {
        DealComponent {
            menu_item_id: menu_item_id.into(),
            quantity,
        }
    }
}

// =============================================================================
// Menu Item
// =============================================================================

/// A catalog entry: a dish, a drink, or a deal bundling several of them.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    /// Unique identifier (opaque string, UUID v4 in practice).
    pub id: String,

    /// Display name shown on the menu grid and the receipt.
    pub name: String,

    /// Free-form grouping ("BBQ", "Curries", ...). `"deals"` is reserved
    /// for deal items.
    pub category: String,

    /// Optional finer grouping within a category ("Naans", "Rice", ...).
    pub sub_category: Option<String>,

    /// Price in whole rupees. For a deal this is the bundle price, set
    /// independently of the constituents.
    pub price: Money,

    /// Optional description for the menu card.
    pub description: Option<String>,

    /// Whether the item can currently be ordered.
    pub available: bool,

    /// Optional image URL or inline-encoded bytes.
    pub image: Option<String>,

    /// Whether this entry is a deal (a priced bundle of other items).
    pub is_deal: bool,

    /// Present iff `is_deal`: the bundled constituents. Must reference
    /// only non-deal items.
    pub deal_items: Option<Vec<DealComponent>>,
}

impl MenuItem {
    /// Creates an ordinary (non-deal) menu item, available by default.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        price: Money,
    ) -> Self {
        MenuItem {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            sub_category: None,
            price,
            description: None,
            available: true,
            image: None,
            is_deal: false,
            deal_items: None,
        }
    }

    /// Creates a deal. The category is always the reserved `"deals"`.
    pub fn deal(
        id: impl Into<String>,
        name: impl Into<String>,
        price: Money,
        deal_items: Vec<DealComponent>,
    ) -> Self {
        MenuItem {
            id: id.into(),
            name: name.into(),
            category: DEALS_CATEGORY.to_string(),
            sub_category: None,
            price,
            description: None,
            available: true,
            image: None,
            is_deal: true,
            deal_items: Some(deal_items),
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the sub-category.
    pub fn with_sub_category(mut self, sub_category: impl Into<String>) -> Self {
        self.sub_category = Some(sub_category.into());
        self
    }

    /// Sets the image reference.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Marks the item as currently unorderable.
    pub fn unavailable(mut self) -> Self {
        self.available = false;
        self
    }
}

// =============================================================================
// Order Item
// =============================================================================

/// A line entry within an order.
/// Uses snapshot pattern to freeze menu item data at time of ordering.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    /// Full copy of the menu item as it was when added (frozen).
    pub menu_item: MenuItem,
    /// Quantity ordered (always >= 1; dropping to 0 removes the line).
    pub quantity: i64,
}

impl OrderItem {
    /// Freezes a menu item into a line entry.
    pub fn from_menu_item(item: &MenuItem, quantity: i64) -> Self {
        OrderItem {
            menu_item: item.clone(),
            quantity,
        }
    }

    /// Returns the line total (frozen unit price × quantity).
    #[inline]
    pub fn line_total(&self) -> Money {
        self.menu_item.price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Order
// =============================================================================

/// An order moving through the kitchen.
///
/// Monetary fields are stored, not derived on read: `subtotal` and `total`
/// are recomputed from `items` and `discount` whenever either changes, and
/// frozen once the order reaches a terminal state.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Unique identifier (opaque string, UUID v4 in practice).
    pub id: String,

    pub order_type: OrderType,

    /// Dining table (table orders only, >= 1).
    pub table_number: Option<i64>,

    /// Customer name (takeaway and delivery orders).
    pub customer_name: Option<String>,

    /// Phone or similar contact (takeaway and delivery orders).
    pub customer_contact: Option<String>,

    /// Delivery address (delivery orders only).
    pub delivery_address: Option<String>,

    /// Line entries with frozen menu item copies. Never empty.
    pub items: Vec<OrderItem>,

    pub status: OrderStatus,

    /// Sum of line totals at the last recomputation.
    pub subtotal: Money,

    /// Percentage discount on the subtotal (0-100).
    pub discount: u32,

    /// Subtotal less discount; the amount a Sale records on completion.
    pub total: Money,

    /// Preparation estimate in minutes, counted from `created_at`.
    pub estimated_time: i64,

    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    /// Set exactly once, when the order completes.
    #[ts(as = "Option<String>")]
    pub completed_at: Option<DateTime<Utc>>,
}

impl Order {
    /// Minutes left on the preparation estimate. Negative once overdue.
    pub fn remaining_minutes(&self, now: DateTime<Utc>) -> i64 {
        self.estimated_time - (now - self.created_at).num_minutes()
    }

    /// An active order whose estimate has elapsed is flagged ready, as the
    /// cue to prompt completion.
    pub fn is_ready(&self, now: DateTime<Utc>) -> bool {
        self.status.is_active() && self.remaining_minutes(now) <= 0
    }
}

// =============================================================================
// Sale
// =============================================================================

/// One finalized transaction in the append-only ledger.
/// Created exactly once, when an order completes. Never updated or removed.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    pub id: String,
    pub order_id: String,
    /// The order's total at completion time (frozen).
    pub amount: Money,
    #[ts(as = "String")]
    pub date: DateTime<Utc>,
    /// Copy of the order's line entries at completion time (frozen).
    pub items: Vec<OrderItem>,
}

// =============================================================================
// Date Range
// =============================================================================

/// An inclusive calendar-day range for reporting queries.
///
/// `from > to` denotes an empty range. Day boundaries are half-open
/// instants: `from` at 00:00 inclusive up to the day after `to` at 00:00
/// exclusive, so no sale can land in two adjacent ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    #[ts(as = "String")]
    pub from: NaiveDate,
    #[ts(as = "String")]
    pub to: NaiveDate,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        DateRange { from, to }
    }

    /// The range covering exactly one calendar day.
    pub fn single_day(day: NaiveDate) -> Self {
        DateRange { from: day, to: day }
    }

    /// True when the range contains no days at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.from > self.to
    }

    /// First instant of the range.
    pub fn start(&self) -> DateTime<Utc> {
        self.from.and_time(NaiveTime::MIN).and_utc()
    }

    /// First instant AFTER the range. Saturates at the calendar's end.
    pub fn end_exclusive(&self) -> DateTime<Utc> {
        match self.to.succ_opt() {
            Some(next_day) => next_day.and_time(NaiveTime::MIN).and_utc(),
            None => DateTime::<Utc>::MAX_UTC,
        }
    }

    /// Whether an instant falls inside the range.
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.start() && instant < self.end_exclusive()
    }

    /// Every day of the range in chronological order. Empty ranges yield
    /// no days.
    pub fn days(&self) -> Vec<NaiveDate> {
        let mut days = Vec::new();
        let mut day = self.from;
        while day <= self.to {
            days.push(day);
            match day.succ_opt() {
                Some(next) => day = next,
                None => break,
            }
        }
        days
    }
}

// =============================================================================
// Reporting Types
// =============================================================================

/// One entry of a popularity ranking: a menu item and its total quantity
/// sold over the queried range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PopularItem {
    pub menu_item_id: String,
    pub name: String,
    pub category: String,
    pub quantity: i64,
}

/// Revenue attributed to one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct RevenuePoint {
    #[ts(as = "String")]
    pub date: NaiveDate,
    pub revenue: Money,
}

/// Dashboard summary for a reporting range.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct StatsSummary {
    /// Revenue over the queried range.
    pub total_revenue: Money,
    /// All-time order count, every status included.
    pub total_orders: usize,
    /// Revenue over the range divided by sales in the range; zero when
    /// there are none.
    pub average_order_value: Money,
    /// Top sellers over the range, best first.
    pub popular_items: Vec<PopularItem>,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn test_item(id: &str, price_rupees: i64) -> MenuItem {
        MenuItem::new(id, format!("Item {id}"), "BBQ", Money::from_rupees(price_rupees))
    }

    #[test]
    fn test_order_status_wire_names() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::InProgress).unwrap(),
            "\"in-progress\""
        );
        assert_eq!(
            serde_json::to_string(&OrderStatus::Pending).unwrap(),
            "\"pending\""
        );
        let parsed: OrderStatus = serde_json::from_str("\"cancelled\"").unwrap();
        assert_eq!(parsed, OrderStatus::Cancelled);
    }

    #[test]
    fn test_order_status_from_str() {
        assert_eq!("in-progress".parse::<OrderStatus>().unwrap(), OrderStatus::InProgress);
        assert!("done".parse::<OrderStatus>().is_err());
        assert_eq!(OrderStatus::default(), OrderStatus::Pending);
    }

    #[test]
    fn test_order_status_terminal() {
        assert!(OrderStatus::Completed.is_terminal());
        assert!(OrderStatus::Cancelled.is_terminal());
        assert!(OrderStatus::Pending.is_active());
        assert!(OrderStatus::InProgress.is_active());
    }

    #[test]
    fn test_order_type_round_trip() {
        for ty in [OrderType::Table, OrderType::Takeaway, OrderType::Delivery] {
            assert_eq!(ty.as_str().parse::<OrderType>().unwrap(), ty);
        }
        assert_eq!(
            serde_json::to_string(&OrderType::Takeaway).unwrap(),
            "\"takeaway\""
        );
    }

    #[test]
    fn test_menu_item_constructors() {
        let naan = MenuItem::new("mi-1", "Garlic Naan", "Bread", Money::from_rupees(120))
            .with_sub_category("Naans")
            .with_description("Buttered, with fresh garlic");
        assert_eq!(naan.category, "Bread");
        assert_eq!(naan.sub_category.as_deref(), Some("Naans"));
        assert!(naan.available);
        assert!(!naan.is_deal);

        let feast = MenuItem::deal(
            "deal-1",
            "Family Feast",
            Money::from_rupees(2400),
            vec![DealComponent::new("mi-1", 4)],
        );
        assert_eq!(feast.category, DEALS_CATEGORY);
        assert!(feast.is_deal);
        assert_eq!(feast.deal_items.as_ref().unwrap().len(), 1);
    }

    #[test]
    fn test_menu_item_wire_names() {
        let item = test_item("mi-9", 850).with_sub_category("Grill").unavailable();
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["subCategory"], "Grill");
        assert_eq!(json["isDeal"], false);
        assert_eq!(json["available"], false);
        assert_eq!(json["price"], 850);
        assert!(json["dealItems"].is_null());
    }

    #[test]
    fn test_order_item_snapshot_and_line_total() {
        let mut item = test_item("mi-2", 250);
        let line = OrderItem::from_menu_item(&item, 3);

        // Catalog edits after the fact do not touch the frozen copy
        item.price = Money::from_rupees(999);
        assert_eq!(line.menu_item.price, Money::from_rupees(250));
        assert_eq!(line.line_total(), Money::from_rupees(750));
    }

    #[test]
    fn test_order_wire_names() {
        let order = Order {
            id: "ord-1".to_string(),
            order_type: OrderType::Table,
            table_number: Some(4),
            customer_name: None,
            customer_contact: None,
            delivery_address: None,
            items: vec![OrderItem::from_menu_item(&test_item("mi-1", 100), 2)],
            status: OrderStatus::Pending,
            subtotal: Money::from_rupees(200),
            discount: 10,
            total: Money::from_rupees(180),
            estimated_time: 30,
            created_at: Utc::now(),
            completed_at: None,
        };
        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["orderType"], "table");
        assert_eq!(json["tableNumber"], 4);
        assert_eq!(json["estimatedTime"], 30);
        assert_eq!(json["discount"], 10);
        assert_eq!(json["total"], 180);
        assert!(json["completedAt"].is_null());
        assert_eq!(json["items"][0]["menuItem"]["price"], 100);
    }

    #[test]
    fn test_remaining_minutes_and_ready_flag() {
        let created = Utc::now();
        let mut order = Order {
            id: "ord-2".to_string(),
            order_type: OrderType::Takeaway,
            table_number: None,
            customer_name: Some("Ali".to_string()),
            customer_contact: Some("0300-1234567".to_string()),
            delivery_address: None,
            items: vec![OrderItem::from_menu_item(&test_item("mi-1", 100), 1)],
            status: OrderStatus::Pending,
            subtotal: Money::from_rupees(100),
            discount: 0,
            total: Money::from_rupees(100),
            estimated_time: 30,
            created_at: created,
            completed_at: None,
        };

        let ten_min_in = created + Duration::minutes(10);
        assert_eq!(order.remaining_minutes(ten_min_in), 20);
        assert!(!order.is_ready(ten_min_in));

        let overdue = created + Duration::minutes(45);
        assert_eq!(order.remaining_minutes(overdue), -15);
        assert!(order.is_ready(overdue));

        // Terminal orders never show the ready cue
        order.status = OrderStatus::Completed;
        assert!(!order.is_ready(overdue));
    }

    #[test]
    fn test_date_range_bounds() {
        let range = DateRange::new(
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 3).unwrap(),
        );

        let first_instant = range.start();
        assert!(range.contains(first_instant));

        let last_day_evening = NaiveDate::from_ymd_opt(2024, 3, 3)
            .unwrap()
            .and_hms_opt(23, 59, 59)
            .unwrap()
            .and_utc();
        assert!(range.contains(last_day_evening));

        let next_day = NaiveDate::from_ymd_opt(2024, 3, 4)
            .unwrap()
            .and_time(NaiveTime::MIN)
            .and_utc();
        assert!(!range.contains(next_day));
    }

    #[test]
    fn test_date_range_days() {
        let range = DateRange::new(
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 3).unwrap(),
        );
        let days = range.days();
        assert_eq!(days.len(), 3);
        assert_eq!(days[0], NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(days[2], NaiveDate::from_ymd_opt(2024, 3, 3).unwrap());

        let single = DateRange::single_day(days[0]);
        assert_eq!(single.days().len(), 1);
        assert!(!single.is_empty());
    }

    #[test]
    fn test_date_range_empty_when_inverted() {
        let range = DateRange::new(
            NaiveDate::from_ymd_opt(2024, 3, 3).unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        );
        assert!(range.is_empty());
        assert!(range.days().is_empty());
        assert!(!range.contains(Utc::now()));
    }
}
