//! # Cart Commands
//!
//! What the pages call when the shopper touches the cart.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │  Empty   │────►│ In Cart  │────►│ Shipping │────►│ Checkout │       │
//! │  │  Cart    │     │          │     │ summary  │     │          │       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │       ▲                │                                  │             │
//! │       │        increment_cart_item                        │             │
//! │       │        decrement_cart_item                 payment succeeded   │
//! │       │        remove_from_cart                           │             │
//! │       └────────────────────────────── clear_cart ◄────────┘             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every command returns the updated snapshot so the page can re-render
//! without a second call. Only `increment_cart_item` can fail, and only on
//! invalid product data.

use storefront_core::{NewLineItem, Product};
use tracing::debug;

use crate::error::ApiError;
use crate::state::{CartSnapshot, CartStore};

/// Payload of the listing's "+" button: the product being added.
///
/// Accepts every shape a catalog entry accepts, plus `productId` for `id`:
/// ```json
/// { "productId": "p1", "name": "Shirt", "price": 19.99, "image": null }
/// ```
pub type AddToCartRequest = Product;

/// Gets the current cart contents.
pub fn get_cart(cart: &CartStore) -> CartSnapshot {
    debug!("get_cart command");
    cart.snapshot()
}

/// Adds one unit of a product.
///
/// ## Behavior
/// - Product not in cart: added with quantity 1, metadata frozen
/// - Product already in cart: quantity increases, metadata unchanged
///
/// ## Errors
/// `VALIDATION_ERROR` if the product id or name is blank or the price is
/// negative. The cart is untouched in that case.
pub fn increment_cart_item(
    cart: &CartStore,
    request: AddToCartRequest,
) -> Result<CartSnapshot, ApiError> {
    debug!(product_id = %request.id, "increment_cart_item command");

    let item = NewLineItem::try_from(&request)?;
    let quantity = cart.increment(item);
    debug!(quantity, "Cart item incremented");

    Ok(cart.snapshot())
}

/// Adds one unit of a catalog product.
pub fn add_product_to_cart(cart: &CartStore, product: &Product) -> Result<CartSnapshot, ApiError> {
    debug!(product_id = %product.id, "add_product_to_cart command");

    let item = NewLineItem::try_from(product)?;
    cart.increment(item);

    Ok(cart.snapshot())
}

/// Removes one unit of a product; at zero the line disappears.
///
/// Products that are not in the cart are ignored.
pub fn decrement_cart_item(cart: &CartStore, product_id: &str) -> CartSnapshot {
    debug!(product_id = %product_id, "decrement_cart_item command");

    let remaining = cart.decrement(product_id);
    debug!(remaining, "Cart item decremented");

    cart.snapshot()
}

/// Removes a line item regardless of its quantity.
///
/// Used by both the listing's "Remove" and the shipping page's
/// "Remove from cart". Unknown ids are ignored.
pub fn remove_from_cart(cart: &CartStore, cart_id: &str) -> CartSnapshot {
    debug!(cart_id = %cart_id, "remove_from_cart command");

    if !cart.remove(cart_id) {
        debug!(cart_id = %cart_id, "Nothing to remove");
    }

    cart.snapshot()
}

/// Clears all items from the cart.
pub fn clear_cart(cart: &CartStore) -> CartSnapshot {
    debug!("clear_cart command");
    cart.clear();
    cart.snapshot()
}
