//! # Shipping Commands
//!
//! The shipping page captures a destination and shows an order summary next
//! to it. It reads the cart and never changes it; removing an item from
//! that page goes through `remove_from_cart` like everywhere else.

use serde::{Deserialize, Serialize};
use storefront_core::ShippingDetails;
use tracing::debug;

use crate::error::ApiError;
use crate::state::{CartSnapshot, CartStore, StoreConfig};

/// Raw shipping form as posted by the page.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShippingForm {
    pub city: String,
    pub state: String,
    pub country: String,
}

/// Destination plus what is being shipped there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub shipping: ShippingDetails,
    pub cart: CartSnapshot,
    /// Total formatted with the store currency, e.g. `$40.00`.
    pub display_total: String,
}

/// Validates the shipping form and builds the order summary.
///
/// ## Errors
/// `VALIDATION_ERROR` when a field is blank or longer than 100 characters.
pub fn submit_shipping(
    cart: &CartStore,
    config: &StoreConfig,
    form: ShippingForm,
) -> Result<OrderSummary, ApiError> {
    debug!("submit_shipping command");

    let shipping = ShippingDetails::new(&form.city, &form.state, &form.country)?;
    let cart = cart.snapshot();
    let display_total = config.format_money(cart.totals.total);

    debug!(
        city = shipping.city(),
        country = shipping.country(),
        total = %display_total,
        "Shipping details accepted"
    );

    Ok(OrderSummary {
        shipping,
        cart,
        display_total,
    })
}
