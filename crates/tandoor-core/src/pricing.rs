//! # Pricing Rules
//!
//! Pure total calculations for orders and deals.
//!
//! ## The One Worked Example
//! ```text
//! 2 × Chicken Tikka (PKR 100)  =  PKR 200
//! 1 × Mint Margarita (PKR 50)  =  PKR  50
//!                                 ───────
//! subtotal                        PKR 250
//! discount 10%                   - PKR  25
//!                                 ───────
//! total                           PKR 225   ← what the Sale records
//! ```
//!
//! Totals are always recomputed from scratch (items + discount), never
//! incrementally patched. That keeps stored totals equal to what these
//! functions return for the same inputs, no matter how many edits an
//! order went through.

use crate::money::Money;
use crate::types::OrderItem;

/// Sum of line totals over the given items.
pub fn subtotal(items: &[OrderItem]) -> Money {
    items
        .iter()
        .fold(Money::zero(), |acc, item| acc + item.line_total())
}

/// Applies a whole-percent discount to a subtotal.
///
/// Callers must have validated `discount_percent` into 0-100 (see
/// [`crate::validation::validate_discount`]). No re-clamping happens here:
/// an out-of-range value is a caller bug and will surface as a distorted
/// total rather than being silently masked.
pub fn discounted_total(subtotal: Money, discount_percent: u32) -> Money {
    subtotal.apply_percentage_discount(discount_percent * 100)
}

/// Subtotal and discount in one step: the order's stored `total`.
pub fn order_total(items: &[OrderItem], discount_percent: u32) -> Money {
    discounted_total(subtotal(items), discount_percent)
}

/// What a customer saves buying a deal instead of its constituents.
///
/// `constituents` carries the current catalog price and bundled quantity of
/// each component. Components deleted from the catalog are resolved to a
/// zero price by the caller, so the sum degrades gracefully instead of
/// failing. A deal priced above its parts yields a NEGATIVE saving; the
/// caller decides whether to surface or hide that.
pub fn deal_savings(deal_price: Money, constituents: &[(Money, i64)]) -> Money {
    let combined = constituents
        .iter()
        .fold(Money::zero(), |acc, (price, quantity)| {
            acc + price.multiply_quantity(*quantity)
        });
    combined - deal_price
}

// =============================================================================
// Unit Tests
// =============================================================================
