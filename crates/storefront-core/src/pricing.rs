//! # Pricing
//!
//! Stateless derivation of monetary figures from a cart snapshot.
//!
//! ## Calculation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Line items                       line_subtotal = unit_price × qty      │
//! │  ───────────────────────────────  ──────────────────────────────────    │
//! │  Shirt   $10.00 × 1               $10.00                                │
//! │  Mug     $15.00 × 2               $30.00                                │
//! │                                   ───────                               │
//! │                            total  $40.00  (sum of exact subtotals)      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing is rounded here. Amounts are integer cents, and any currency
//! formatting happens once, at presentation time.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::{Cart, LineItem};
use crate::money::Money;

// =============================================================================
// Price Calculator
// =============================================================================

/// Pure pricing functions over a slice of line items.
///
/// Kept apart from [`Cart`] so pricing policy can change without touching
/// mutation logic.
#[derive(Debug, Clone, Copy, Default)]
pub struct PriceCalculator;

impl PriceCalculator {
    /// `unit_price × quantity` for one line item.
    #[inline]
    pub fn line_subtotal(item: &LineItem) -> Money {
        item.unit_price.multiply_quantity(item.quantity)
    }

    /// Sum of all line subtotals; zero for an empty slice.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::{Cart, Money, NewLineItem, PriceCalculator};
    ///
    /// let mut cart = Cart::new();
    /// assert!(PriceCalculator::total(cart.items()).is_zero());
    ///
    /// cart.increment(NewLineItem::new("p1", "Shirt", Money::from_cents(1000), None, None).unwrap());
    /// assert_eq!(PriceCalculator::total(cart.items()).cents(), 1000);
    /// ```
    pub fn total(items: &[LineItem]) -> Money {
        items.iter().map(Self::line_subtotal).sum()
    }

    /// Count, quantity and total in one pass.
    pub fn totals(items: &[LineItem]) -> CartTotals {
        CartTotals {
            item_count: items.len(),
            total_quantity: items.iter().map(|i| u64::from(i.quantity)).sum(),
            total: Self::total(items),
        }
    }
}

// =============================================================================
// Cart Totals
// =============================================================================

/// Cart totals summary for the pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    /// Distinct products in the cart.
    pub item_count: usize,
    /// Units across all products.
    pub total_quantity: u64,
    pub total: Money,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        PriceCalculator::totals(cart.items())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
