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
//! │    3.50 + 3.00 + 3.50 = 10.000000000000002  ❌ WRONG!                   │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    350 + 300 + 350 = 1000 cents = $10.00                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tillbook_core::money::Money;
//!
//! let espresso = Money::from_cents(350); // $3.50
//!
//! let two = espresso * 2;                     // $7.00
//! let order = two + Money::from_cents(300);   // $10.00
//! assert_eq!(order.to_string(), "$10.00");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents for USD).
///
/// ## Where Money is Used
/// ```text
/// Product.price ──► CartLine.line_total ──► Cart.total ──► CompletedOrder.total
///
/// Customer.total_spent (directory display)
/// ```
///
/// Serializes as a bare integer number of cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use tillbook_core::money::Money;
    ///
    /// let price = Money::from_cents(450); // Represents $4.50
    /// assert_eq!(price.cents(), 450);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
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

    /// Multiplies money by a quantity, saturating at the i64 bounds.
    ///
    /// ## Example
    /// ```rust
    /// use tillbook_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(550); // Chocolate Cake
    /// assert_eq!(unit_price.multiply_quantity(3).cents(), 1650);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0.saturating_mul(qty))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows dollars with two decimals, e.g. `$6.50` or `-$5.50`.
///
/// Front-ends with a configured currency symbol format cents themselves.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

/// Multiplication by quantity.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        self.multiply_quantity(qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(650)), "$6.50");
        assert_eq!(format!("{}", Money::from_cents(1000)), "$10.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(350);

        assert_eq!((a + b).cents(), 1350);
        assert_eq!((b * 3).cents(), 1050);

        let mut running = Money::zero();
        running += a;
        running += b;
        assert_eq!(running.cents(), 1350);
    }

    #[test]
    fn test_sum() {
        let prices = [Money::from_cents(350), Money::from_cents(300)];
        let total: Money = prices.iter().sum();
        assert_eq!(total, Money::from_cents(650));

        let empty: Money = Vec::<Money>::new().into_iter().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_multiply_quantity_saturates() {
        let huge = Money::from_cents(i64::MAX / 2);
        assert_eq!(huge.multiply_quantity(3).cents(), i64::MAX);
    }

    #[test]
    fn test_serializes_as_cents() {
        let json = serde_json::to_string(&Money::from_cents(850)).unwrap();
        assert_eq!(json, "850");
    }
}
