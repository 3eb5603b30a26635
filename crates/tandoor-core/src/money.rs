//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  In many retail systems:                                                │
//! │    PKR 1000 × 7.5% discount = 75.00000000000001  → Drifting totals!     │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Paisa                                            │
//! │    Menu prices are whole rupees, but discount math runs in paisa       │
//! │    (1/100 rupee). Rounding happens ONCE per calculation, in integer    │
//! │    math, and never compounds across recalculations.                    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire Format
//! Rupees are displayed and serialized WITHOUT decimals (PKR is in practice
//! a zero-decimal currency at the till). `Money` therefore serializes as a
//! whole-rupee integer, truncated toward zero, and deserializes from one.
//! Paisa precision exists only inside a calculation, never on the wire.
//!
//! ## Usage
//! ```rust
//! use tandoor_core::money::Money;
//!
//! // Create from whole rupees (menu prices are whole rupees)
//! let price = Money::from_rupees(250);
//!
//! // Arithmetic operations
//! let doubled = price * 2;                      // PKR 500
//! let total = price + Money::from_rupees(120);  // PKR 370
//!
//! // NEVER do this:
//! // let bad = Money::from_float(249.99); // NO SUCH METHOD EXISTS!
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in paisa (1/100 of a rupee).
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values for refunds and savings deltas
///   (a badly priced deal can "save" a negative amount)
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Manual serde**: The wire carries whole rupees, the struct carries paisa
///
/// ## User Workflow Context
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                    Where Money is Used                                  │
/// │                                                                         │
/// │  MenuItem.price ──┬──► OrderItem snapshot ──► line total               │
/// │                   │                                                     │
/// │                   └──► Displayed as "PKR 250" in UI                     │
/// │                                                                         │
/// │  Order.subtotal ──► Discount Calculation ──► Order.total ──► Sale.amount│
/// │                                                                         │
/// │  EVERY monetary value in the system flows through this type            │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from paisa (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use tandoor_core::money::Money;
    ///
    /// let amount = Money::from_paisa(22500);
    /// assert_eq!(amount.rupees(), 225);
    /// ```
    ///
    /// ## Why Paisa?
    /// Percentage discounts produce fractional rupees mid-calculation.
    /// Carrying paisa internally means the fraction survives until the
    /// single rounding step, instead of being re-rounded on every edit.
    #[inline]
    pub const fn from_paisa(paisa: i64) -> Self {
        Money(paisa)
    }

    /// Creates a Money value from whole rupees.
    ///
    /// ## Example
    /// ```rust
    /// use tandoor_core::money::Money;
    ///
    /// let price = Money::from_rupees(250);
    /// assert_eq!(price.paisa(), 25000);
    /// ```
    ///
    /// ## Note
    /// Menu prices and everything on the wire are whole rupees, so this is
    /// the constructor almost all callers want.
    #[inline]
    pub const fn from_rupees(rupees: i64) -> Self {
        Money(rupees * 100)
    }

    /// Returns the value in paisa (smallest currency unit).
    #[inline]
    pub const fn paisa(&self) -> i64 {
        self.0
    }

    /// Returns the whole-rupee portion, truncated toward zero.
    ///
    /// ## Example
    /// ```rust
    /// use tandoor_core::money::Money;
    ///
    /// let amount = Money::from_paisa(24950); // PKR 249.50
    /// assert_eq!(amount.rupees(), 249);      // truncated, not rounded
    ///
    /// let negative = Money::from_paisa(-5050);
    /// assert_eq!(negative.rupees(), -50);
    /// ```
    ///
    /// ## Truncation, Not Rounding
    /// Display and serialization both go through this method, so the till
    /// never shows a rupee the ledger does not hold.
    #[inline]
    pub const fn rupees(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the paisa remainder beyond whole rupees (always 0-99).
    ///
    /// ## Example
    /// ```rust
    /// use tandoor_core::money::Money;
    ///
    /// let amount = Money::from_paisa(24950);
    /// assert_eq!(amount.paisa_part(), 50);
    /// ```
    #[inline]
    pub const fn paisa_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    ///
    /// ## Example
    /// ```rust
    /// use tandoor_core::money::Money;
    ///
    /// let zero = Money::zero();
    /// assert!(zero.is_zero());
    /// ```
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the absolute value.
    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use tandoor_core::money::Money;
    ///
    /// let unit_price = Money::from_rupees(120); // Garlic Naan
    /// let line_total = unit_price.multiply_quantity(4);
    /// assert_eq!(line_total.rupees(), 480);
    /// ```
    ///
    /// ## User Workflow
    /// ```text
    /// Item: Garlic Naan PKR 120
    /// Quantity: 4
    ///      │
    ///      ▼
    /// multiply_quantity(4) ← THIS FUNCTION
    ///      │
    ///      ▼
    /// Line Total: PKR 480
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Applies a percentage discount and returns the discounted amount.
    ///
    /// ## Arguments
    /// * `discount_bps` - Discount in basis points (1000 = 10%)
    ///
    /// ## Implementation
    /// We use integer math in i128: `(amount * bps + 5000) / 10000`.
    /// The +5000 rounds the discount to the nearest paisa; this is the ONE
    /// rounding step in a total calculation.
    ///
    /// ## Example
    /// ```rust
    /// use tandoor_core::money::Money;
    ///
    /// let subtotal = Money::from_rupees(250);
    /// let discounted = subtotal.apply_percentage_discount(1000); // 10% off
    /// assert_eq!(discounted.rupees(), 225);
    /// ```
    pub fn apply_percentage_discount(&self, discount_bps: u32) -> Money {
        // Calculate discount amount, then subtract
        let discount_amount = (self.0 as i128 * discount_bps as i128 + 5000) / 10000;
        Money::from_paisa(self.0 - discount_amount as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in the till's format: `PKR 250`.
///
/// ## Note
/// Whole rupees only, truncated toward zero. Negative amounts carry a
/// leading sign: `-PKR 50`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}PKR {}", sign, self.rupees().abs())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Serializes as a whole-rupee integer (truncated toward zero).
///
/// The frontend and all stored documents see `250`, never `25000` or
/// `250.0`. Paisa precision never leaves the calculation.
impl Serialize for Money {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(self.rupees())
    }
}

/// Deserializes from a whole-rupee integer.
impl<'de> Deserialize<'de> for Money {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let rupees = i64::deserialize(deserializer)?;
        Ok(Money::from_rupees(rupees))
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by integer (for quantity calculations).
impl Mul<i32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i32) -> Self {
        Money(self.0 * qty as i64)
    }
}

/// Multiplication by i64.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
