//! # tandoor-core: Pure Business Logic for Tandoor POS
//!
//! This crate is the **heart** of Tandoor POS. It contains all business
//! logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Tandoor POS Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                        Frontend                                 │   │
//! │  │    Menu Grid ──► Order Sheet ──► Kitchen Board ──► Dashboard   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ IPC / commands                         │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ tandoor-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   draft   │  │ validation│  │   │
//! │  │   │ MenuItem  │  │   Money   │  │OrderDraft │  │   rules   │  │   │
//! │  │   │Order/Sale │  │ discounts │  │ line math │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │   ┌───────────┐  ┌───────────┐                                 │   │
//! │  │   │  status   │  │  pricing  │                                 │   │
//! │  │   │transitions│  │  totals   │                                 │   │
//! │  │   └───────────┘  └───────────┘                                 │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO SHARED STATE • NO CLOCK READS • PURE FUNCTIONS   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 tandoor-store (State Layer)                     │   │
//! │  │        catalog, orders, sales ledger, reporting                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (MenuItem, Order, Sale, DateRange, etc.)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`draft`] - The order being assembled at the till
//! - [`status`] - Order lifecycle transition rules
//! - [`pricing`] - Subtotal, discount and deal-savings math
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: State, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are paisa (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use tandoor_core::draft::OrderDraft;
//! use tandoor_core::money::Money;
//! use tandoor_core::types::MenuItem;
//!
//! let tikka = MenuItem::new("mi-1", "Chicken Tikka", "BBQ", Money::from_rupees(100));
//! let margarita = MenuItem::new("mi-2", "Mint Margarita", "Drinks", Money::from_rupees(50));
//!
//! let mut draft = OrderDraft::table(4);
//! draft.add_item(&tikka, 2).unwrap();
//! draft.add_item(&margarita, 1).unwrap();
//! draft.set_discount(10).unwrap();
//!
//! assert_eq!(draft.subtotal(), Money::from_rupees(250));
//! assert_eq!(draft.total(), Money::from_rupees(225));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod draft;
pub mod error;
pub mod money;
pub mod pricing;
pub mod status;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use tandoor_core::Money` instead of
// `use tandoor_core::money::Money`

pub use draft::OrderDraft;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// The reserved category name for deal items.
///
/// ## Why a constant?
/// Deals live in their own menu tab and are validated structurally
/// (constituents, no nesting). Ordinary items claiming this category would
/// dodge those checks, so the name is reserved and enforced in validation.
pub const DEALS_CATEGORY: &str = "deals";

/// Default preparation estimate for new orders, in minutes.
///
/// ## Business Reason
/// Most kitchen tickets land around half an hour. Orders created without
/// an explicit estimate get this one; staff adjust per order when needed.
pub const DEFAULT_ESTIMATED_TIME: i64 = 30;

/// How many entries a popularity ranking shows by default.
///
/// ## Business Reason
/// The dashboard highlights a short list of best sellers. Five rows fit
/// the card without scrolling; reports can request a different cut-off.
pub const POPULAR_ITEMS_LIMIT: usize = 5;

/// Maximum quantity a single order line may carry.
///
/// ## Business Reason
/// Catches fat-finger quantities at entry (1000 keyed instead of 10),
/// and keeps line-total arithmetic far inside i64 range.
pub const MAX_ITEM_QUANTITY: i64 = 999;

/// Maximum distinct lines a single order may carry.
///
/// ## Business Reason
/// A till order is a screenful of lines, not an inventory dump. The cap
/// keeps runaway drafts from growing without bound.
pub const MAX_ORDER_LINES: usize = 100;
