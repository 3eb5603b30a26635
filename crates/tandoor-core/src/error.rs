//! # Error Types
//!
//! Domain-specific error types for tandoor-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  tandoor-core errors (this file)                                        │
//! │  ├── CoreError        - Lifecycle / domain rule violations              │
//! │  └── ValidationError  - Input validation failures                       │
//! │                                                                         │
//! │  tandoor-store errors (separate crate)                                  │
//! │  └── StoreError       - Lookup and uniqueness failures                  │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → StoreError → Frontend              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (order id, field name, etc.)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

use crate::types::OrderStatus;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent business rule violations or domain logic failures.
/// They should be caught and translated to user-friendly messages.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Order is in a terminal state and can no longer be edited.
    ///
    /// ## When This Occurs
    /// - Trying to modify a completed or cancelled order
    /// - Two terminals race on the same order and one loses
    ///
    /// ## User Workflow
    /// ```text
    /// Edit order #42
    ///      │
    ///      ▼
    /// Check status: completed
    ///      │
    ///      ▼
    /// OrderLocked { order_id: "42", status: Completed }
    ///      │
    ///      ▼
    /// UI shows: "Order 42 is completed, no further changes allowed"
    /// ```
    #[error("Order {order_id} is {status}, no further changes allowed")]
    OrderLocked {
        order_id: String,
        status: OrderStatus,
    },

    /// Requested status change is not allowed by the lifecycle.
    ///
    /// ## When This Occurs
    /// - Completing an order that is already completed (the sale must be
    ///   recorded exactly once)
    /// - Cancelling a completed order, or vice versa
    /// - Restarting a cancelled order
    #[error("Invalid status transition from {from} to {to}")]
    InvalidTransition { from: OrderStatus, to: OrderStatus },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Used for early validation before business logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value violates a structural rule (e.g., a deal nesting another deal).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Menu item is marked unavailable and cannot be ordered.
    #[error("{name} is currently unavailable")]
    Unavailable { name: String },

    /// Referenced menu item does not exist in the relevant collection.
    #[error("Unknown menu item: {id}")]
    UnknownItem { id: String },

    /// Order has no items.
    #[error("Order must contain at least one item")]
    NoItems,
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::OrderLocked {
            order_id: "ord-42".to_string(),
            status: OrderStatus::Completed,
        };
        assert_eq!(
            err.to_string(),
            "Order ord-42 is completed, no further changes allowed"
        );

        let err = CoreError::InvalidTransition {
            from: OrderStatus::Completed,
            to: OrderStatus::Completed,
        };
        assert_eq!(
            err.to_string(),
            "Invalid status transition from completed to completed"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "tableNumber".to_string(),
        };
        assert_eq!(err.to_string(), "tableNumber is required");

        let err = ValidationError::OutOfRange {
            field: "discount".to_string(),
            min: 0,
            max: 100,
        };
        assert_eq!(err.to_string(), "discount must be between 0 and 100");

        let err = ValidationError::Unavailable {
            name: "Chicken Karahi".to_string(),
        };
        assert_eq!(err.to_string(), "Chicken Karahi is currently unavailable");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::NoItems;
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
