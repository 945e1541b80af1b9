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
//! │  OUR SOLUTION: Integer Minor Units                                      │
//! │    Every price is an i64 count of the smallest currency unit.           │
//! │    Catalog prices, line totals, and subtotals never touch floats.       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The storefront prices in Chilean pesos, which have no fractional
//! subdivision in practice, so one minor unit is one peso.
//!
//! ## Usage
//! ```rust
//! use levelup_core::money::Money;
//!
//! // Create from minor units (the only way in)
//! let price = Money::from_minor(49_990);
//!
//! // Arithmetic operations
//! let doubled = price * 2;
//! let total = price + Money::from_minor(24_990);
//! assert_eq!(total.minor(), 74_980);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit.
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values for refunds, discounts
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support; serializes as a bare integer, which is
///   exactly the `price` field shape of the persisted cart snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from minor units (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use levelup_core::money::Money;
    ///
    /// let price = Money::from_minor(49_990);
    /// assert_eq!(price.minor(), 49_990);
    /// ```
    #[inline]
    pub const fn from_minor(minor: i64) -> Self {
        Money(minor)
    }

    /// Returns the value in minor units.
    #[inline]
    pub const fn minor(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
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
    /// use levelup_core::money::Money;
    ///
    /// let unit_price = Money::from_minor(24_990);
    /// let line_total = unit_price.multiply_quantity(3);
    /// assert_eq!(line_total.minor(), 74_970);
    /// ```
    ///
    /// ## User Workflow
    /// ```text
    /// Product: Carcassonne $24.990 CLP
    /// Quantity: 3
    ///      │
    ///      ▼
    /// multiply_quantity(3) ← THIS FUNCTION
    ///      │
    ///      ▼
    /// Line Total: $74.970 CLP
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Applies a percentage discount and returns the discounted amount.
    ///
    /// ## Arguments
    /// * `discount_bps` - Discount in basis points (2000 = 20%)
    ///
    /// ## Rounding
    /// Integer math with half-up rounding on the discount amount:
    /// `(amount * bps + 5000) / 10000`. Intermediate math widens to i128 so
    /// large amounts cannot overflow.
    ///
    /// ## Example
    /// ```rust
    /// use levelup_core::money::Money;
    ///
    /// let price = Money::from_minor(49_990);
    /// let student_price = price.apply_percentage_discount(2000); // 20% off
    /// assert_eq!(student_price.minor(), 39_992);
    /// ```
    pub fn apply_percentage_discount(&self, discount_bps: u32) -> Money {
        // Calculate discount amount, then subtract
        let discount_amount = (self.0 as i128 * discount_bps as i128 + 5000) / 10000;
        Money::from_minor(self.0 - discount_amount as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money the way the storefront prints prices:
/// dot-grouped thousands with the currency tag, e.g. `$49.990 CLP`.
///
/// ## Note
/// This is for debugging and logs. Use frontend formatting for actual UI
/// display to handle localization properly.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}${} CLP", sign, group_thousands(self.0.unsigned_abs()))
    }
}

/// Groups digits in threes with `.` separators (es-CL convention).
fn group_thousands(mut value: u64) -> String {
    let mut groups: Vec<String> = Vec::new();
    loop {
        let chunk = value % 1000;
        value /= 1000;
        if value == 0 {
            groups.push(chunk.to_string());
            break;
        }
        groups.push(format!("{:03}", chunk));
    }
    groups.reverse();
    groups.join(".")
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_minor() {
        let money = Money::from_minor(49_990);
        assert_eq!(money.minor(), 49_990);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_minor(49_990)), "$49.990 CLP");
        assert_eq!(format!("{}", Money::from_minor(1_299_990)), "$1.299.990 CLP");
        assert_eq!(format!("{}", Money::from_minor(500)), "$500 CLP");
        assert_eq!(format!("{}", Money::from_minor(-550)), "-$550 CLP");
        assert_eq!(format!("{}", Money::from_minor(0)), "$0 CLP");
        assert_eq!(format!("{}", Money::from_minor(1_000)), "$1.000 CLP");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_minor(1000);
        let b = Money::from_minor(500);

        assert_eq!((a + b).minor(), 1500);
        assert_eq!((a - b).minor(), 500);
        let result: Money = a * 3;
        assert_eq!(result.minor(), 3000);

        let mut acc = Money::zero();
        acc += a;
        acc += b;
        assert_eq!(acc.minor(), 1500);
        acc -= b;
        assert_eq!(acc.minor(), 1000);
    }

    #[test]
    fn test_multiply_quantity() {
        let unit_price = Money::from_minor(24_990);
        let line_total = unit_price.multiply_quantity(3);
        assert_eq!(line_total.minor(), 74_970);
    }

    #[test]
    fn test_percentage_discount() {
        // The student perk: 20% off a $49.990 mouse
        let price = Money::from_minor(49_990);
        let discounted = price.apply_percentage_discount(2000);
        assert_eq!(discounted.minor(), 39_992);

        // 20% of 49990 is 9998 exactly, no rounding involved
        assert_eq!((price - discounted).minor(), 9_998);
    }

    #[test]
    fn test_percentage_discount_rounds_half_up() {
        // 10% of 25 minor units is 2.5, which rounds to 3
        let price = Money::from_minor(25);
        let discounted = price.apply_percentage_discount(1000);
        assert_eq!(discounted.minor(), 22);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        let positive = Money::from_minor(100);
        assert!(positive.is_positive());

        let negative = Money::from_minor(-100);
        assert!(negative.is_negative());
        assert_eq!(negative.abs().minor(), 100);
    }
}
