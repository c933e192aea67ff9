//! # Domain Types
//!
//! Catalog and shipping types that travel between the storefront pages and
//! the cart.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │  NewLineItem    │   │ ShippingDetails │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │──►│  product_id     │   │  city           │       │
//! │  │  name           │   │  name           │   │  state          │       │
//! │  │  price_cents    │   │  unit_price     │   │  country        │       │
//! │  │  image, desc.   │   │  image, desc.   │   └─────────────────┘       │
//! │  └─────────────────┘   └─────────────────┘                              │
//! │   (catalog payload)     (validated input)     (form capture only)      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::NewLineItem;
use crate::error::ValidationError;
use crate::money::Money;
use crate::validation::{validate_shipping_field, ValidationResult};

// =============================================================================
// Product
// =============================================================================

/// A product as delivered by the catalog source.
///
/// The catalog is trusted verbatim, but its values still pass through
/// `NewLineItem` validation before they reach the cart.
///
/// ## Wire Format
/// ```json
/// { "id": 7, "name": "Shirt", "price": 19.99, "image": "shirt.png" }
/// { "id": "p1", "name": "Shirt", "priceCents": 1999 }
/// ```
/// `id` may be a string or an integer. `price` is in major units (a JSON
/// number or string); `priceCents` is in cents and wins when both appear.
/// Serialization always writes `id` as a string and `priceCents`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
#[serde(try_from = "CatalogProduct")]
pub struct Product {
    /// Catalog identifier, used as the cart key.
    pub id: String,

    /// Display name shown on the listing and in the cart.
    pub name: String,

    /// Price in cents.
    pub price_cents: i64,

    /// Image URL, if the catalog has one.
    pub image: Option<String>,

    /// Optional description for product details.
    pub description: Option<String>,
}

/// Identifier as the catalog writes it.
#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogId {
    Text(String),
    Integer(i64),
}

impl From<CatalogId> for String {
    fn from(id: CatalogId) -> Self {
        match id {
            CatalogId::Text(text) => text,
            CatalogId::Integer(n) => n.to_string(),
        }
    }
}

/// Product exactly as it appears in a catalog (or "+" button) payload.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CatalogProduct {
    #[serde(alias = "productId")]
    id: CatalogId,
    name: String,
    #[serde(default)]
    price: Option<Decimal>,
    #[serde(default)]
    price_cents: Option<i64>,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

impl TryFrom<CatalogProduct> for Product {
    type Error = ValidationError;

    fn try_from(raw: CatalogProduct) -> Result<Self, Self::Error> {
        let price_cents = match (raw.price_cents, raw.price) {
            (Some(cents), _) => cents,
            (None, Some(amount)) => Money::from_major_units(amount)
                .ok_or_else(|| ValidationError::OutOfRange {
                    field: "price".to_string(),
                    min: i64::MIN,
                    max: i64::MAX,
                })?
                .cents(),
            (None, None) => {
                return Err(ValidationError::Required {
                    field: "price".to_string(),
                })
            }
        };

        Ok(Product {
            id: raw.id.into(),
            name: raw.name,
            price_cents,
            image: raw.image,
            description: raw.description,
        })
    }
}

impl Product {
    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

/// Builds the cart input for the listing's "+" button.
impl TryFrom<&Product> for NewLineItem {
    type Error = ValidationError;

    fn try_from(product: &Product) -> Result<Self, Self::Error> {
        NewLineItem::new(
            product.id.clone(),
            product.name.clone(),
            product.price(),
            product.image.clone(),
            product.description.clone(),
        )
    }
}

// =============================================================================
// Shipping Details
// =============================================================================

/// Destination captured by the shipping form.
///
/// Each field is required and length-limited; no postal or geographic
/// validation happens here. Only `new` can build one, so it is serialized
/// for the pages but never deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ShippingDetails {
    city: String,
    state: String,
    country: String,
}

impl ShippingDetails {
    /// Validates and trims the three form fields.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::ShippingDetails;
    ///
    /// let details = ShippingDetails::new(" Lahore ", "Punjab", "Pakistan").unwrap();
    /// assert_eq!(details.city(), "Lahore");
    /// assert!(ShippingDetails::new("", "Punjab", "Pakistan").is_err());
    /// ```
    pub fn new(
        city: impl AsRef<str>,
        state: impl AsRef<str>,
        country: impl AsRef<str>,
    ) -> ValidationResult<Self> {
        Ok(ShippingDetails {
            city: validate_shipping_field("city", city.as_ref())?,
            state: validate_shipping_field("state", state.as_ref())?,
            country: validate_shipping_field("country", country.as_ref())?,
        })
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn country(&self) -> &str {
        &self.country
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
