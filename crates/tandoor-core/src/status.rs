//! # Status Transitions
//!
//! The single authority on which order status changes are legal.
//!
//! ## Transition Table
//! ```text
//! ┌──────────────┬──────────┬─────────────┬───────────┬───────────┐
//! │   from \ to  │ pending  │ in-progress │ completed │ cancelled │
//! ├──────────────┼──────────┼─────────────┼───────────┼───────────┤
//! │ pending      │    ✗     │      ✓      │     ✓     │     ✓     │
//! │ in-progress  │    ✗     │      ✗      │     ✓     │     ✓     │
//! │ completed    │    ✗     │      ✗      │     ✗     │     ✗     │
//! │ cancelled    │    ✗     │      ✗      │     ✗     │     ✗     │
//! └──────────────┴──────────┴─────────────┴───────────┴───────────┘
//! ```
//!
//! Repeating a state is deliberately illegal: completing a completed order
//! must fail loudly, because completion is what appends to the sales
//! ledger, and each order funds exactly one sale.

use crate::error::{CoreError, CoreResult};
use crate::types::OrderStatus;

/// Checks whether moving from one status to another is allowed.
pub fn is_valid_transition(from: OrderStatus, to: OrderStatus) -> bool {
    match (from, to) {
        // From pending
        (OrderStatus::Pending, OrderStatus::InProgress) => true,
        (OrderStatus::Pending, OrderStatus::Completed) => true,
        (OrderStatus::Pending, OrderStatus::Cancelled) => true,

        // From in-progress
        (OrderStatus::InProgress, OrderStatus::Completed) => true,
        (OrderStatus::InProgress, OrderStatus::Cancelled) => true,

        // Terminal states and repeats
        _ => false,
    }
}

/// Validates a transition, returning the new status or a typed error.
pub fn transition(from: OrderStatus, to: OrderStatus) -> CoreResult<OrderStatus> {
    if is_valid_transition(from, to) {
        Ok(to)
    } else {
        Err(CoreError::InvalidTransition { from, to })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================


// =============================================================================
// Property Tests
// =============================================================================
