//! # Cart State
//!
//! The session's cart store: the single read/write authority every page
//! goes through.
//!
//! ## Thread Safety
//! The cart is wrapped in `Arc<Mutex<T>>` because:
//! 1. Several pages hold a handle to the same store
//! 2. Increment/decrement/remove on the same product must be linearized
//! 3. A snapshot must never observe a half-applied mutation
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Store Operations                                │
//! │                                                                         │
//! │  Page Action            Store Method        Effect                      │
//! │  ───────────            ────────────        ──────                      │
//! │                                                                         │
//! │  Click "+" ────────────► increment() ─────► quantity + 1 / new item    │
//! │  Click "-" ────────────► decrement() ─────► quantity - 1 / removed     │
//! │  Click Remove ─────────► remove() ────────► item deleted               │
//! │  Payment succeeded ────► clear() ─────────► items.clear()              │
//! │  Render ───────────────► snapshot() ──────► (read only, owned copy)    │
//! │                                                                         │
//! │  Every write publishes the new snapshot to subscribers while still      │
//! │  holding the lock, so subscribers see changes in mutation order.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::Serialize;
use storefront_core::{Cart, CartTotals, LineItem, Money, NewLineItem, PriceCalculator};
use tokio::sync::watch;

/// A point-in-time copy of the cart for rendering.
///
/// Owned data: later mutations never affect a snapshot a page is iterating.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartSnapshot {
    pub items: Vec<LineItem>,
    pub totals: CartTotals,
}

impl From<&Cart> for CartSnapshot {
    fn from(cart: &Cart) -> Self {
        CartSnapshot {
            items: cart.items().to_vec(),
            totals: CartTotals::from(cart),
        }
    }
}

/// Session-owned cart store.
///
/// Cloning the store clones the handle: both clones see the same cart.
#[derive(Debug, Clone)]
pub struct CartStore {
    cart: Arc<Mutex<Cart>>,
    changes: Arc<watch::Sender<CartSnapshot>>,
}

impl CartStore {
    /// Creates a store holding an empty cart.
    pub fn new() -> Self {
        let (changes, _) = watch::channel(CartSnapshot::default());
        CartStore {
            cart: Arc::new(Mutex::new(Cart::new())),
            changes: Arc::new(changes),
        }
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Adds one unit of a product; returns its new quantity.
    pub fn increment(&self, item: NewLineItem) -> u32 {
        let mut cart = self.lock();
        let quantity = cart.increment(item);
        self.publish(&cart);
        quantity
    }

    /// Removes one unit of a product; returns its remaining quantity.
    ///
    /// Unknown products are ignored and nothing is published.
    pub fn decrement(&self, product_id: &str) -> u32 {
        let mut cart = self.lock();
        let before = cart.quantity_of(product_id);
        let quantity = cart.decrement(product_id);
        if before != 0 {
            self.publish(&cart);
        }
        quantity
    }

    /// Deletes a line item outright; returns whether one was removed.
    pub fn remove(&self, cart_id: &str) -> bool {
        let mut cart = self.lock();
        let removed = cart.remove(cart_id);
        if removed {
            self.publish(&cart);
        }
        removed
    }

    /// Empties the cart.
    pub fn clear(&self) {
        let mut cart = self.lock();
        cart.clear();
        self.publish(&cart);
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Executes a function with read access to the cart.
    ///
    /// ## Usage
    /// ```rust
    /// use storefront::state::CartStore;
    ///
    /// let store = CartStore::new();
    /// assert!(store.with_cart(|cart| cart.is_empty()));
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.lock();
        f(&cart)
    }

    /// Ordered copy of the current line items.
    pub fn items(&self) -> Vec<LineItem> {
        self.with_cart(|c| c.items().to_vec())
    }

    /// Current total, derived on every call.
    pub fn total_price(&self) -> Money {
        self.with_cart(|c| PriceCalculator::total(c.items()))
    }

    /// Items and totals captured under a single lock.
    pub fn snapshot(&self) -> CartSnapshot {
        self.with_cart(|c| CartSnapshot::from(c))
    }

    pub fn quantity_of(&self, product_id: &str) -> u32 {
        self.with_cart(|c| c.quantity_of(product_id))
    }

    pub fn item_count(&self) -> usize {
        self.with_cart(Cart::item_count)
    }

    /// Units across all products.
    pub fn total_quantity(&self) -> u64 {
        self.with_cart(|c| c.items().iter().map(|i| u64::from(i.quantity)).sum())
    }

    pub fn is_empty(&self) -> bool {
        self.with_cart(Cart::is_empty)
    }

    /// Receiver that is notified with the new snapshot after every change.
    pub fn subscribe(&self) -> watch::Receiver<CartSnapshot> {
        self.changes.subscribe()
    }

    // A panic while holding the lock cannot leave the cart half-mutated:
    // every Cart method restores its invariants before returning.
    fn lock(&self) -> MutexGuard<'_, Cart> {
        self.cart.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn publish(&self, cart: &Cart) {
        self.changes.send_replace(CartSnapshot::from(cart));
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}
