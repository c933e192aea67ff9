//! # Cart Aggregate
//!
//! The shopping cart and its line items.
//!
//! ## Invariants
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Cart Invariants                                  │
//! │                                                                         │
//! │  1. At most one LineItem per product_id                                │
//! │  2. Every LineItem has quantity >= 1 (reaching 0 removes it)           │
//! │  3. Every unit_price is >= 0 (enforced by NewLineItem)                 │
//! │  4. The total is derived on read (see pricing), never stored           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Operations Flow
//! ```text
//! Page action          Cart method           Effect
//! ───────────          ───────────           ──────
//! Click "+"  ────────► increment(item) ────► push, or quantity += 1
//! Click "-"  ────────► decrement(id) ──────► quantity -= 1, or remove at 0
//! Click Remove ──────► remove(id) ─────────► retain(!= id)
//! Payment succeeded ─► clear() ────────────► items.clear()
//! ```
//!
//! None of these return an error. Decrementing or removing a product that is
//! not in the cart is a no-op, because double clicks and stale renders make
//! that routine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::validation::{
    validate_product_id, validate_product_name, validate_unit_price, ValidationResult,
};

// =============================================================================
// New Line Item (input)
// =============================================================================

/// Validated input for [`Cart::increment`].
///
/// The fields are private so the only ways to build one are
/// [`NewLineItem::new`] and `TryFrom<&Product>`, both of which validate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLineItem {
    product_id: String,
    name: String,
    unit_price: Money,
    image: Option<String>,
    description: Option<String>,
}

impl NewLineItem {
    /// Validates the product metadata for the cart.
    ///
    /// ## Rules
    /// - `product_id` and `name` are trimmed and must not be empty
    /// - `unit_price` must not be negative (rejected, not clamped)
    /// - blank `image`/`description` become `None`
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::{Money, NewLineItem};
    ///
    /// assert!(NewLineItem::new("p1", "Shirt", Money::from_cents(2000), None, None).is_ok());
    /// assert!(NewLineItem::new("p1", "Shirt", Money::from_cents(-1), None, None).is_err());
    /// ```
    pub fn new(
        product_id: impl AsRef<str>,
        name: impl AsRef<str>,
        unit_price: Money,
        image: Option<String>,
        description: Option<String>,
    ) -> ValidationResult<Self> {
        Ok(NewLineItem {
            product_id: validate_product_id(product_id.as_ref())?,
            name: validate_product_name(name.as_ref())?,
            unit_price: validate_unit_price(unit_price)?,
            image: non_blank(image),
            description: non_blank(description),
        })
    }

    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit_price(&self) -> Money {
        self.unit_price
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

// =============================================================================
// Line Item
// =============================================================================

/// One distinct product in the cart.
///
/// ## Design Notes
/// Product metadata is copied in when the product is first added, so the
/// cart stays valid even if the catalog changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Catalog product this entry stands for.
    pub product_id: String,

    /// Identifier of this cart entry. Equal to `product_id`, since a product
    /// never has two independent entries.
    pub cart_id: String,

    /// Product name at time of adding (frozen)
    pub name: String,

    /// Unit price at time of adding (frozen)
    pub unit_price: Money,

    pub image: Option<String>,

    pub description: Option<String>,

    /// Always >= 1 while the item is in a cart.
    pub quantity: u32,

    /// When this product was first added
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl LineItem {
    fn from_new(item: NewLineItem) -> Self {
        LineItem {
            cart_id: item.product_id.clone(),
            product_id: item.product_id,
            name: item.name,
            unit_price: item.unit_price,
            image: item.image,
            description: item.description,
            quantity: 1,
            added_at: Utc::now(),
        }
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart: line items in insertion order, unique by product.
///
/// Serialized for the pages but deliberately not `Deserialize`: every cart
/// is built through the methods below.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    items: Vec<LineItem>,

    /// When the cart was created/last cleared
    created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            items: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Adds one unit of a product.
    ///
    /// ## Behavior
    /// - Product not in cart: appended with quantity 1 and the given metadata
    /// - Product already in cart: quantity + 1, stored metadata is kept
    ///   (first-seen metadata wins)
    ///
    /// ## Returns
    /// The product's quantity after the call.
    pub fn increment(&mut self, item: NewLineItem) -> u32 {
        if let Some(existing) = self.find_mut(&item.product_id) {
            existing.quantity = existing.quantity.saturating_add(1);
            return existing.quantity;
        }

        self.items.push(LineItem::from_new(item));
        1
    }

    /// Removes one unit of a product.
    ///
    /// ## Behavior
    /// - Product not in cart: no-op
    /// - Quantity > 1: quantity - 1
    /// - Quantity == 1: the line item is removed entirely
    ///
    /// ## Returns
    /// The product's quantity after the call (0 when it is not in the cart).
    pub fn decrement(&mut self, product_id: &str) -> u32 {
        let Some(index) = self.position(product_id) else {
            return 0;
        };

        let item = &mut self.items[index];
        if item.quantity > 1 {
            item.quantity -= 1;
            return item.quantity;
        }

        self.items.remove(index);
        0
    }

    /// Removes a line item by cart identifier, whatever its quantity.
    ///
    /// ## Returns
    /// `true` if an item was removed, `false` if nothing matched.
    pub fn remove(&mut self, cart_id: &str) -> bool {
        let initial_len = self.items.len();
        self.items.retain(|i| i.cart_id != cart_id);
        self.items.len() != initial_len
    }

    /// Clears all items from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
        self.created_at = Utc::now();
    }

    /// Line items in the order they were first added.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Returns the line item for a product, if present.
    pub fn get(&self, product_id: &str) -> Option<&LineItem> {
        self.items.iter().find(|i| i.product_id == product_id)
    }

    /// Quantity of a product (0 when absent).
    pub fn quantity_of(&self, product_id: &str) -> u32 {
        self.get(product_id).map_or(0, |i| i.quantity)
    }

    /// Returns the number of distinct products in the cart.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn position(&self, product_id: &str) -> Option<usize> {
        self.items.iter().position(|i| i.product_id == product_id)
    }

    fn find_mut(&mut self, product_id: &str) -> Option<&mut LineItem> {
        self.items.iter_mut().find(|i| i.product_id == product_id)
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
