//! # Validation
//!
//! Input validation that runs BEFORE business logic.
//!
//! ## Design Pattern: Parse, Don't Validate (Lite)
//! Validators are free functions returning `ValidationResult<()>` so call
//! sites read as a checklist:
//!
//! ```text
//! validate_draft(&draft)?;      // everything below, in one call
//!   ├── items non-empty, at most MAX_ORDER_LINES of them
//!   ├── quantities within 1..=MAX_ITEM_QUANTITY, every line available
//!   ├── discount within 0-100
//!   ├── estimate positive when given
//!   └── per-type details (table number / customer / address)
//! ```
//!
//! The store re-runs these at create and modify time; the draft type also
//! uses the granular validators to reject bad edits early.

use crate::draft::OrderDraft;
use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{MenuItem, OrderType};
use crate::{DEALS_CATEGORY, MAX_ITEM_QUANTITY, MAX_ORDER_LINES};

/// Convenience type alias for validation results.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a menu item name: non-empty after trimming.
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }
    Ok(())
}

/// Validates a price: zero is allowed (giveaways), negative is not.
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }
    Ok(())
}

/// Validates a line quantity: at least 1, at most [`MAX_ITEM_QUANTITY`].
/// A quantity reaching 0 means the line should be removed, not stored.
pub fn validate_quantity(quantity: i64) -> ValidationResult<()> {
    if quantity <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }
    if quantity > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY,
        });
    }
    Ok(())
}

/// Validates how many distinct lines an order carries: at most
/// [`MAX_ORDER_LINES`].
pub fn validate_line_count(lines: usize) -> ValidationResult<()> {
    if lines > MAX_ORDER_LINES {
        return Err(ValidationError::OutOfRange {
            field: "items".to_string(),
            min: 0,
            max: MAX_ORDER_LINES as i64,
        });
    }
    Ok(())
}

/// Validates a discount percentage: whole percents, 0-100.
pub fn validate_discount(percent: u32) -> ValidationResult<()> {
    if percent > 100 {
        return Err(ValidationError::OutOfRange {
            field: "discount".to_string(),
            min: 0,
            max: 100,
        });
    }
    Ok(())
}

/// Validates a dining table number: at least 1.
pub fn validate_table_number(table_number: i64) -> ValidationResult<()> {
    if table_number < 1 {
        return Err(ValidationError::MustBePositive {
            field: "tableNumber".to_string(),
        });
    }
    Ok(())
}

/// Validates a preparation estimate in minutes: at least 1.
pub fn validate_estimated_time(minutes: i64) -> ValidationResult<()> {
    if minutes <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "estimatedTime".to_string(),
        });
    }
    Ok(())
}

/// Validates that an optional text field is present and non-blank.
pub fn validate_required_text(field: &str, value: Option<&str>) -> ValidationResult<()> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(()),
        _ => Err(ValidationError::Required {
            field: field.to_string(),
        }),
    }
}

// =============================================================================
// Aggregate Validators
// =============================================================================

/// Validates a menu item's own fields and its deal shape.
///
/// Reference checks (do the constituents exist, are they non-deals) need
/// the catalog and live in the store; this covers everything knowable from
/// the item alone.
pub fn validate_menu_item(item: &MenuItem) -> ValidationResult<()> {
    validate_item_name(&item.name)?;
    validate_price(item.price)?;

    if item.category.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "category".to_string(),
        });
    }

    if item.is_deal {
        if item.category != DEALS_CATEGORY {
            return Err(ValidationError::InvalidFormat {
                field: "category".to_string(),
                reason: format!("deal items must use the reserved \"{DEALS_CATEGORY}\" category"),
            });
        }
        match item.deal_items.as_deref() {
            None | Some([]) => {
                return Err(ValidationError::Required {
                    field: "dealItems".to_string(),
                })
            }
            Some(components) => {
                for component in components {
                    validate_quantity(component.quantity)?;
                }
            }
        }
    } else {
        if item.category == DEALS_CATEGORY {
            return Err(ValidationError::InvalidFormat {
                field: "category".to_string(),
                reason: format!("\"{DEALS_CATEGORY}\" is reserved for deal items"),
            });
        }
        if item.deal_items.is_some() {
            return Err(ValidationError::InvalidFormat {
                field: "dealItems".to_string(),
                reason: "only deal items may bundle other items".to_string(),
            });
        }
    }

    Ok(())
}

/// Validates the contact details an order type requires.
///
/// ```text
/// table    → tableNumber (>= 1)
/// takeaway → customerName, customerContact
/// delivery → customerName, customerContact, deliveryAddress
/// ```
///
/// Fields irrelevant to the type are ignored here; the store drops them
/// when it builds the order, so a form switched between types mid-entry
/// never smuggles stale details through.
pub fn validate_order_details(draft: &OrderDraft) -> ValidationResult<()> {
    match draft.order_type {
        OrderType::Table => match draft.table_number {
            Some(table_number) => validate_table_number(table_number),
            None => Err(ValidationError::Required {
                field: "tableNumber".to_string(),
            }),
        },
        OrderType::Takeaway => {
            validate_required_text("customerName", draft.customer_name.as_deref())?;
            validate_required_text("customerContact", draft.customer_contact.as_deref())
        }
        OrderType::Delivery => {
            validate_required_text("customerName", draft.customer_name.as_deref())?;
            validate_required_text("customerContact", draft.customer_contact.as_deref())?;
            validate_required_text("deliveryAddress", draft.delivery_address.as_deref())
        }
    }
}

/// Validates everything about a draft before it becomes (or replaces) an
/// order.
///
/// Availability is checked on each line's frozen copy, so a hand-built
/// draft embedding a sold-out item is caught here while an item flipped
/// unavailable after it was legitimately added stays orderable, per the
/// snapshot rules.
pub fn validate_draft(draft: &OrderDraft) -> ValidationResult<()> {
    if draft.items.is_empty() {
        return Err(ValidationError::NoItems);
    }
    validate_line_count(draft.items.len())?;
    for line in &draft.items {
        validate_quantity(line.quantity)?;
        if !line.menu_item.available {
            return Err(ValidationError::Unavailable {
                name: line.menu_item.name.clone(),
            });
        }
    }
    validate_discount(draft.discount)?;
    if let Some(minutes) = draft.estimated_time {
        validate_estimated_time(minutes)?;
    }
    validate_order_details(draft)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DealComponent, OrderItem};

    fn test_item(id: &str, price_rupees: i64) -> MenuItem {
        MenuItem::new(id, format!("Item {id}"), "BBQ", Money::from_rupees(price_rupees))
    }

    #[test]
    fn test_validate_item_name() {
        assert!(validate_item_name("Chicken Karahi").is_ok());
        assert!(validate_item_name("").is_err());
        assert!(validate_item_name("   ").is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(Money::from_rupees(850)).is_ok());
        assert!(validate_price(Money::zero()).is_ok());
        assert!(validate_price(Money::from_rupees(-1)).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(99).is_ok());
        assert!(validate_quantity(MAX_ITEM_QUANTITY).is_ok());
        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-3).is_err());

        let err = validate_quantity(MAX_ITEM_QUANTITY + 1).unwrap_err();
        assert_eq!(err.to_string(), "quantity must be between 1 and 999");
        assert!(validate_quantity(200_000_000_000_000).is_err());
    }

    #[test]
    fn test_validate_line_count() {
        assert!(validate_line_count(0).is_ok());
        assert!(validate_line_count(MAX_ORDER_LINES).is_ok());

        let err = validate_line_count(MAX_ORDER_LINES + 1).unwrap_err();
        assert!(matches!(err, ValidationError::OutOfRange { .. }));
    }

    #[test]
    fn test_validate_discount() {
        assert!(validate_discount(0).is_ok());
        assert!(validate_discount(100).is_ok());
        let err = validate_discount(101).unwrap_err();
        assert_eq!(err.to_string(), "discount must be between 0 and 100");
    }

    #[test]
    fn test_validate_table_number() {
        assert!(validate_table_number(1).is_ok());
        assert!(validate_table_number(0).is_err());
        assert!(validate_table_number(-4).is_err());
    }

    #[test]
    fn test_validate_menu_item_plain() {
        assert!(validate_menu_item(&test_item("mi-1", 850)).is_ok());

        let mut nameless = test_item("mi-2", 100);
        nameless.name = "  ".to_string();
        assert!(validate_menu_item(&nameless).is_err());

        let mut negative = test_item("mi-3", 100);
        negative.price = Money::from_rupees(-5);
        assert!(validate_menu_item(&negative).is_err());
    }

    #[test]
    fn test_validate_menu_item_reserved_category() {
        let mut impostor = test_item("mi-4", 100);
        impostor.category = "deals".to_string();
        let err = validate_menu_item(&impostor).unwrap_err();
        assert!(err.to_string().contains("reserved"));
    }

    #[test]
    fn test_validate_menu_item_deal_shape() {
        let valid = MenuItem::deal(
            "deal-1",
            "Family Feast",
            Money::from_rupees(2400),
            vec![DealComponent::new("mi-1", 2)],
        );
        assert!(validate_menu_item(&valid).is_ok());

        let empty = MenuItem::deal("deal-2", "Empty", Money::from_rupees(100), vec![]);
        assert!(validate_menu_item(&empty).is_err());

        let bad_qty = MenuItem::deal(
            "deal-3",
            "Zero Qty",
            Money::from_rupees(100),
            vec![DealComponent::new("mi-1", 0)],
        );
        assert!(validate_menu_item(&bad_qty).is_err());

        let mut sneaky = test_item("mi-5", 100);
        sneaky.deal_items = Some(vec![DealComponent::new("mi-1", 1)]);
        assert!(validate_menu_item(&sneaky).is_err());
    }

    #[test]
    fn test_validate_order_details_table() {
        let mut draft = OrderDraft::table(4);
        assert!(validate_order_details(&draft).is_ok());

        draft.table_number = None;
        let err = validate_order_details(&draft).unwrap_err();
        assert_eq!(err.to_string(), "tableNumber is required");

        draft.table_number = Some(0);
        assert!(validate_order_details(&draft).is_err());
    }

    #[test]
    fn test_validate_order_details_takeaway() {
        let draft = OrderDraft::takeaway("Ali", "0300-1234567");
        assert!(validate_order_details(&draft).is_ok());

        let mut blank = OrderDraft::takeaway("", "0300-1234567");
        assert!(validate_order_details(&blank).is_err());
        blank.customer_name = Some("Ali".to_string());
        blank.customer_contact = None;
        assert!(validate_order_details(&blank).is_err());
    }

    #[test]
    fn test_validate_order_details_delivery() {
        let draft = OrderDraft::delivery("Sana", "0321-7654321", "House 12, F-7");
        assert!(validate_order_details(&draft).is_ok());

        let missing_address = OrderDraft::delivery("Sana", "0321-7654321", " ");
        let err = validate_order_details(&missing_address).unwrap_err();
        assert_eq!(err.to_string(), "deliveryAddress is required");
    }

    #[test]
    fn test_validate_draft_requires_items() {
        let draft = OrderDraft::table(4);
        let err = validate_draft(&draft).unwrap_err();
        assert!(matches!(err, ValidationError::NoItems));
    }

    #[test]
    fn test_validate_draft_full() {
        let mut draft = OrderDraft::table(4);
        draft.add_item(&test_item("mi-1", 100), 2).unwrap();
        draft.discount = 10;
        assert!(validate_draft(&draft).is_ok());

        draft.discount = 150;
        assert!(validate_draft(&draft).is_err());

        draft.discount = 10;
        draft.estimated_time = Some(0);
        assert!(validate_draft(&draft).is_err());
    }

    #[test]
    fn test_validate_draft_enforces_entry_caps() {
        // Hand-set quantities face the same cap as drafted ones
        let mut oversized = OrderDraft::table(4);
        oversized.items.push(OrderItem::from_menu_item(
            &test_item("mi-1", 10),
            MAX_ITEM_QUANTITY + 1,
        ));
        assert!(matches!(
            validate_draft(&oversized).unwrap_err(),
            ValidationError::OutOfRange { .. }
        ));

        let mut crowded = OrderDraft::table(4);
        for i in 0..=MAX_ORDER_LINES {
            crowded
                .items
                .push(OrderItem::from_menu_item(&test_item(&format!("mi-{i}"), 10), 1));
        }
        assert!(matches!(
            validate_draft(&crowded).unwrap_err(),
            ValidationError::OutOfRange { .. }
        ));
    }

    #[test]
    fn test_validate_draft_rejects_unavailable_lines() {
        let mut draft = OrderDraft::table(4);
        draft.items.push(OrderItem::from_menu_item(
            &test_item("mi-1", 100).unavailable(),
            1,
        ));

        let err = validate_draft(&draft).unwrap_err();
        assert!(matches!(err, ValidationError::Unavailable { .. }));
    }
}
