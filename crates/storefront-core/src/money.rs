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
//! │  A cart that sums 19.99 × 3 + 0.10 × 7 in floats drifts after enough   │
//! │  increments and decrements.                                             │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    1999 × 3 + 10 × 7 = 6067 cents, exactly, every time                 │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use storefront_core::money::Money;
//!
//! let price = Money::from_cents(1099); // $10.99
//!
//! let line = price.multiply_quantity(2);       // $21.98
//! let total = line + Money::from_cents(500);    // $26.98
//! assert_eq!(total.cents(), 2698);
//! ```

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents for USD).
///
/// ## Design Decisions
/// - **i64 (signed)**: arithmetic stays closed under subtraction; line items
///   themselves never carry a negative price (see `NewLineItem`)
/// - **Single field tuple struct**: Zero-cost abstraction over i64
///
/// ## Where Money is Used
/// ```text
/// Product.price_cents ──► LineItem.unit_price ──► PriceCalculator::line_subtotal
///                                                        │
///                                                        ▼
///                                   PriceCalculator::total ──► PaymentGateway
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Converts an amount in major units (dollars) to cents.
    ///
    /// Sub-cent digits are rounded to the nearest cent. Returns `None` when
    /// the result does not fit in an `i64`.
    ///
    /// ## Example
    /// ```rust
    /// use rust_decimal::Decimal;
    /// use storefront_core::money::Money;
    ///
    /// let price: Decimal = "19.99".parse().unwrap();
    /// assert_eq!(Money::from_major_units(price), Some(Money::from_cents(1999)));
    /// ```
    pub fn from_major_units(amount: Decimal) -> Option<Self> {
        amount
            .checked_mul(Decimal::ONE_HUNDRED)
            .and_then(|cents| cents.round_dp(0).to_i64())
            .map(Money)
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

    /// Multiplies money by a line item quantity, saturating at the `i64`
    /// bounds.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(1500); // $15.00
    /// assert_eq!(unit_price.multiply_quantity(2).cents(), 3000);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: u32) -> Self {
        Money(self.0.saturating_mul(qty as i64))
    }

    /// Formats the amount with a caller-supplied currency symbol.
    ///
    /// `Display` always uses `$`; the session layer calls this with the
    /// configured symbol instead.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1099).format_with_symbol("€"), "€10.99");
    /// assert_eq!(Money::from_cents(-550).format_with_symbol("£"), "-£5.50");
    /// ```
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        format!(
            "{}{}{}.{:02}",
            sign,
            symbol,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================
//
// Arithmetic saturates instead of overflowing: a cart total must always be
// computable, whatever quantities the shopper piles up.

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for logs and debugging. Pages format with the configured
/// currency symbol.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_symbol("$"))
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

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0.saturating_sub(other.0))
    }
}

/// Summing an iterator of Money (used for cart totals).
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
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
        assert_eq!(format!("{}", Money::from_cents(1099)), "$10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);

        let mut c = a;
        c += b;
        assert_eq!(c.cents(), 1500);
    }

    #[test]
    fn test_sum() {
        let total: Money = [100, 250, 1]
            .into_iter()
            .map(Money::from_cents)
            .sum();
        assert_eq!(total.cents(), 351);

        let empty: Money = std::iter::empty().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_multiply_quantity() {
        assert_eq!(Money::from_cents(299).multiply_quantity(3).cents(), 897);
        assert_eq!(Money::from_cents(299).multiply_quantity(0).cents(), 0);
    }

    #[test]
    fn test_huge_amounts_saturate() {
        let half = Money::from_cents(i64::MAX / 2 + 1);
        assert_eq!(half.multiply_quantity(2).cents(), i64::MAX);
        assert_eq!(
            Money::from_cents(crate::MAX_UNIT_PRICE_CENTS)
                .multiply_quantity(u32::MAX)
                .cents(),
            i64::MAX
        );

        let total: Money = [i64::MAX, 1].into_iter().map(Money::from_cents).sum();
        assert_eq!(total.cents(), i64::MAX);

        let mut acc = Money::from_cents(i64::MAX);
        acc += Money::from_cents(10);
        assert_eq!(acc.cents(), i64::MAX);
    }

    #[test]
    fn test_from_major_units() {
        let cents = |s: &str| Money::from_major_units(s.parse().unwrap()).map(|m| m.cents());

        assert_eq!(cents("19.99"), Some(1999));
        assert_eq!(cents("20"), Some(2000));
        assert_eq!(cents("0.1"), Some(10));
        assert_eq!(cents("0"), Some(0));
        assert_eq!(cents("-5.50"), Some(-550));
        // sub-cent digits round to the nearest cent
        assert_eq!(cents("1.006"), Some(101));
        assert_eq!(cents("1000000000000000000000"), None);
    }

    /// Repeated float addition of 0.1 drifts; cents do not.
    #[test]
    fn test_no_drift_on_repeated_addition() {
        let dime = Money::from_cents(10);
        let total: Money = std::iter::repeat(dime).take(3).sum();
        assert_eq!(total, Money::from_cents(30));
    }

    #[test]
    fn test_serde_is_transparent_cents() {
        let json = serde_json::to_string(&Money::from_cents(1099)).unwrap();
        assert_eq!(json, "1099");
        let back: Money = serde_json::from_str("250").unwrap();
        assert_eq!(back.cents(), 250);
    }
}
