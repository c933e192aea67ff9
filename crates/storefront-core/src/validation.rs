//! # Validation Module
//!
//! Boundary validation for everything that enters the cart or the order
//! summary.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Pages (vine schemas)                                         │
//! │  └── Immediate form feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── NewLineItem::new   → product id, name, unit price                 │
//! │  └── ShippingDetails::new → city, state, country                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Cart                                                         │
//! │  └── Infallible: inputs are already valid                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::{
    MAX_PRODUCT_ID_LEN, MAX_PRODUCT_NAME_LEN, MAX_SHIPPING_FIELD_LEN, MAX_UNIT_PRICE_CENTS,
};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product identifier and returns it trimmed.
///
/// ## Example
/// ```rust
/// use storefront_core::validation::validate_product_id;
///
/// assert_eq!(validate_product_id(" p1 ").unwrap(), "p1");
/// assert!(validate_product_id("").is_err());
/// ```
pub fn validate_product_id(id: &str) -> ValidationResult<String> {
    required_trimmed("product_id", id, MAX_PRODUCT_ID_LEN)
}

/// Validates a product name and returns it trimmed.
///
/// ## Example
/// ```rust
/// use storefront_core::validation::validate_product_name;
///
/// assert!(validate_product_name("Shirt").is_ok());
/// assert!(validate_product_name("   ").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<String> {
    required_trimmed("name", name, MAX_PRODUCT_NAME_LEN)
}

/// Validates one shipping form field and returns it trimmed.
pub fn validate_shipping_field(field: &str, value: &str) -> ValidationResult<String> {
    required_trimmed(field, value, MAX_SHIPPING_FIELD_LEN)
}

fn required_trimmed(field: &str, value: &str, max: usize) -> ValidationResult<String> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.chars().count() > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
    }

    Ok(value.to_string())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a unit price.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
/// - At most [`MAX_UNIT_PRICE_CENTS`]
///
/// ## Example
/// ```rust
/// use storefront_core::money::Money;
/// use storefront_core::validation::validate_unit_price;
///
/// assert!(validate_unit_price(Money::from_cents(1099)).is_ok());
/// assert!(validate_unit_price(Money::zero()).is_ok());
/// assert!(validate_unit_price(Money::from_cents(-100)).is_err());
/// assert!(validate_unit_price(Money::from_cents(i64::MAX)).is_err());
/// ```
pub fn validate_unit_price(price: Money) -> ValidationResult<Money> {
    if !(0..=MAX_UNIT_PRICE_CENTS).contains(&price.cents()) {
        return Err(ValidationError::OutOfRange {
            field: "unit_price".to_string(),
            min: 0,
            max: MAX_UNIT_PRICE_CENTS,
        });
    }

    Ok(price)
}

// =============================================================================
// Unit Tests
// =============================================================================
