//! # Error Types
//!
//! Domain-specific error types for storefront-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  storefront-core errors (this file)                                    │
//! │  ├── CoreError        - Checkout rule violations (empty cart, etc.)    │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  apps/storefront errors                                                │
//! │  ├── ConfigError / CatalogError / PaymentError                         │
//! │  └── ApiError         - What the pages see (serialized)                │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Page                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Cart mutations themselves never fail. A decrement or remove of an unknown
//! product is a no-op, so nothing here describes a missing line item.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Checkout was requested for a cart with no line items.
    #[error("Cart is empty, nothing to check out")]
    EmptyCart,

    /// The cart total is not a payable amount.
    ///
    /// ## When This Occurs
    /// - Every line item is free, so the total is zero
    #[error("Invalid payment amount: {reason}")]
    InvalidPaymentAmount { reason: String },

    /// The cart total moved between opening and confirming a payment.
    #[error("Cart changed during checkout: expected {expected} cents, now {actual}")]
    CartChanged { expected: i64, actual: i64 },

    /// Same total, but the products or quantities differ from the ones the
    /// payment was opened for.
    #[error("Cart items changed during checkout")]
    CartItemsChanged,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised once, at the boundary, when a caller builds a `NewLineItem` or
/// `ShippingDetails`. Values that pass validation can no longer break the
/// cart invariants.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },
}

// =============================================================================
// Unit Tests
// =============================================================================
