//! # storefront-core: Pure Cart Logic for the Storefront
//!
//! This crate is the **heart** of the storefront. It owns the shopping-cart
//! aggregation rules as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Storefront Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Pages (React)                                │   │
//! │  │    Home listing ──► Shipping ──► Checkout                       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    apps/storefront                              │   │
//! │  │    Session, CartStore, increment_cart_item, start_checkout     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ storefront-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │  pricing  │  │   │
//! │  │   │  Product  │  │   Money   │  │   Cart    │  │   Price   │  │   │
//! │  │   │ Shipping  │  │           │  │ LineItem  │  │ Calculator│  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`cart`] - The cart aggregate and its line items
//! - [`pricing`] - Stateless total/subtotal derivation
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`types`] - Catalog and shipping DTOs
//! - [`error`] - Domain error types
//! - [`validation`] - Boundary validation for inputs
//!
//! ## Example Usage
//!
//! ```rust
//! use storefront_core::{Cart, Money, NewLineItem, PriceCalculator};
//!
//! let mut cart = Cart::new();
//! let shirt = NewLineItem::new("p1", "Shirt", Money::from_cents(2000), None, None).unwrap();
//!
//! cart.increment(shirt.clone());
//! cart.increment(shirt);
//!
//! assert_eq!(cart.items().len(), 1);
//! assert_eq!(PriceCalculator::total(cart.items()).cents(), 4000);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, LineItem, NewLineItem};
pub use error::{CoreError, ValidationError};
pub use money::Money;
pub use pricing::{CartTotals, PriceCalculator};
pub use types::{Product, ShippingDetails};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of a product identifier accepted into the cart.
pub const MAX_PRODUCT_ID_LEN: usize = 128;

/// Maximum length of a product name accepted into the cart.
pub const MAX_PRODUCT_NAME_LEN: usize = 200;

/// Highest unit price accepted into the cart, in cents ($100,000,000.00).
pub const MAX_UNIT_PRICE_CENTS: i64 = 10_000_000_000;

/// Maximum length of each shipping form field.
pub const MAX_SHIPPING_FIELD_LEN: usize = 100;
