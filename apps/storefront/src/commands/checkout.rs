//! # Checkout Commands
//!
//! Payment handoff to the external processor.
//!
//! ## Checkout Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Checkout Flow                                        │
//! │                                                                         │
//! │  start_checkout                                                        │
//! │  ├── snapshot cart (items + total)                                     │
//! │  ├── empty cart? ─────────────────────► BUSINESS_LOGIC error           │
//! │  └── gateway.create_session(total) ───► CheckoutSession{client_secret} │
//! │                                                                         │
//! │  (page renders the processor's hosted payment element)                 │
//! │                                                                         │
//! │  complete_checkout                                                     │
//! │  ├── total or lines changed? ─────────► BUSINESS_LOGIC error           │
//! │  ├── gateway.confirm(session)                                          │
//! │  │     ├── Succeeded ──► clear cart ──► CheckoutResult::Paid           │
//! │  │     └── Declined ───► cart kept ───► CheckoutResult::Declined       │
//! │  └── gateway error ───────────────────► PAYMENT_ERROR, cart kept       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The processor's own protocol stays behind [`PaymentGateway`].

use std::future::Future;

use serde::{Deserialize, Serialize};
use storefront_core::{Cart, CoreError, LineItem, Money, PriceCalculator};
use tracing::{debug, info, warn};

use crate::error::{ApiError, PaymentError};
use crate::state::{CartStore, StoreConfig};

// =============================================================================
// Gateway Boundary
// =============================================================================

/// Session opened with the payment processor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentSession {
    /// Token the page hands to the processor's payment element.
    pub client_secret: String,
}

/// Result of a confirmation the processor did answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "status")]
pub enum PaymentOutcome {
    Succeeded,
    Declined { reason: String },
}

/// The external payment processor.
pub trait PaymentGateway {
    /// Opens a payment session for `amount` in `currency` (ISO 4217).
    fn create_session(
        &self,
        amount: Money,
        currency: &str,
    ) -> impl Future<Output = Result<PaymentSession, PaymentError>> + Send;

    /// Asks the processor whether the session was paid.
    fn confirm(
        &self,
        amount: Money,
        session: &PaymentSession,
    ) -> impl Future<Output = Result<PaymentOutcome, PaymentError>> + Send;
}

// =============================================================================
// Commands
// =============================================================================

/// What the checkout page needs to render the payment form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutSession {
    pub client_secret: String,
    pub amount: Money,
    pub currency: String,
    /// Items being paid for, frozen at checkout start.
    pub items: Vec<LineItem>,
}

/// Outcome reported back to the checkout page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "status")]
pub enum CheckoutResult {
    Paid { amount: Money },
    Declined { reason: String },
}

/// Opens a payment session for the current cart total.
///
/// ## Errors
/// - `BUSINESS_LOGIC` if the cart is empty or its total is zero
/// - `PAYMENT_ERROR` if the processor refuses the session
pub async fn start_checkout<G>(
    cart: &CartStore,
    config: &StoreConfig,
    gateway: &G,
) -> Result<CheckoutSession, ApiError>
where
    G: PaymentGateway + Sync,
{
    debug!("start_checkout command");

    let snapshot = cart.snapshot();
    if snapshot.items.is_empty() {
        return Err(CoreError::EmptyCart.into());
    }

    let amount = snapshot.totals.total;
    if !amount.is_positive() {
        return Err(CoreError::InvalidPaymentAmount {
            reason: format!("cart total is {}", amount),
        }
        .into());
    }

    let session = gateway
        .create_session(amount, &config.currency_code)
        .await?;
    info!(%amount, items = snapshot.items.len(), "Payment session created");

    Ok(CheckoutSession {
        client_secret: session.client_secret,
        amount,
        currency: config.currency_code.clone(),
        items: snapshot.items,
    })
}

/// Confirms payment and clears the cart once it succeeded.
///
/// ## Errors
/// - `BUSINESS_LOGIC` if the cart total or its lines (product and quantity)
///   no longer match the session
/// - `PAYMENT_ERROR` if the processor could not be asked
///
/// A declined payment is not an error: the cart is kept so the shopper can
/// try again.
pub async fn complete_checkout<G>(
    cart: &CartStore,
    gateway: &G,
    checkout: &CheckoutSession,
) -> Result<CheckoutResult, ApiError>
where
    G: PaymentGateway + Sync,
{
    debug!("complete_checkout command");

    let (current, lines_match) = cart.with_cart(|c| {
        (
            PriceCalculator::total(c.items()),
            same_lines(c, &checkout.items),
        )
    });
    if current != checkout.amount {
        return Err(CoreError::CartChanged {
            expected: checkout.amount.cents(),
            actual: current.cents(),
        }
        .into());
    }
    if !lines_match {
        return Err(CoreError::CartItemsChanged.into());
    }

    let session = PaymentSession {
        client_secret: checkout.client_secret.clone(),
    };

    match gateway.confirm(checkout.amount, &session).await? {
        PaymentOutcome::Succeeded => {
            cart.clear();
            info!(amount = %checkout.amount, "Payment succeeded, cart cleared");
            Ok(CheckoutResult::Paid {
                amount: checkout.amount,
            })
        }
        PaymentOutcome::Declined { reason } => {
            warn!(reason = %reason, "Payment declined");
            Ok(CheckoutResult::Declined { reason })
        }
    }
}

/// Same products with the same quantities, in any order.
fn same_lines(cart: &Cart, frozen: &[LineItem]) -> bool {
    cart.item_count() == frozen.len()
        && frozen
            .iter()
            .all(|line| cart.quantity_of(&line.product_id) == line.quantity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use std::sync::Mutex;
    use storefront_core::NewLineItem;

    /// Gateway double that records the amounts it was asked for.
    #[derive(Default)]
    struct FakeGateway {
        outcome: Option<PaymentOutcome>,
        fail_session: bool,
        requested: Mutex<Vec<(Money, String)>>,
    }

    impl PaymentGateway for FakeGateway {
        async fn create_session(
            &self,
            amount: Money,
            currency: &str,
        ) -> Result<PaymentSession, PaymentError> {
            if self.fail_session {
                return Err(PaymentError::SessionFailed("invalid api key".to_string()));
            }
            self.requested
                .lock()
                .unwrap()
                .push((amount, currency.to_string()));
            Ok(PaymentSession {
                client_secret: format!("pi_secret_{}", amount.cents()),
            })
        }

        async fn confirm(
            &self,
            _amount: Money,
            _session: &PaymentSession,
        ) -> Result<PaymentOutcome, PaymentError> {
            self.outcome
                .clone()
                .ok_or_else(|| PaymentError::ConfirmationFailed("timeout".to_string()))
        }
    }

    fn filled_cart() -> CartStore {
        let cart = CartStore::new();
        cart.increment(NewLineItem::new("p1", "Shirt", Money::from_cents(1000), None, None).unwrap());
        cart.increment(NewLineItem::new("p2", "Mug", Money::from_cents(1500), None, None).unwrap());
        cart.increment(NewLineItem::new("p2", "Mug", Money::from_cents(1500), None, None).unwrap());
        cart
    }

    #[tokio::test]
    async fn test_successful_checkout_clears_cart() {
        let cart = filled_cart();
        let gateway = FakeGateway {
            outcome: Some(PaymentOutcome::Succeeded),
            ..FakeGateway::default()
        };

        let session = start_checkout(&cart, &StoreConfig::default(), &gateway)
            .await
            .unwrap();
        assert_eq!(session.amount, Money::from_cents(4000));
        assert_eq!(session.client_secret, "pi_secret_4000");
        assert_eq!(session.items.len(), 2);
        assert_eq!(
            gateway.requested.lock().unwrap().as_slice(),
            [(Money::from_cents(4000), "USD".to_string())]
        );

        let result = complete_checkout(&cart, &gateway, &session).await.unwrap();
        assert_eq!(
            result,
            CheckoutResult::Paid {
                amount: Money::from_cents(4000)
            }
        );
        assert!(cart.is_empty());
    }

    #[tokio::test]
    async fn test_declined_payment_keeps_cart() {
        let cart = filled_cart();
        let gateway = FakeGateway {
            outcome: Some(PaymentOutcome::Declined {
                reason: "card_declined".to_string(),
            }),
            ..FakeGateway::default()
        };

        let session = start_checkout(&cart, &StoreConfig::default(), &gateway)
            .await
            .unwrap();
        let result = complete_checkout(&cart, &gateway, &session).await.unwrap();

        assert!(matches!(result, CheckoutResult::Declined { .. }));
        assert_eq!(cart.total_price(), Money::from_cents(4000));
    }

    #[tokio::test]
    async fn test_gateway_errors_keep_cart() {
        let cart = filled_cart();

        let failing = FakeGateway {
            fail_session: true,
            ..FakeGateway::default()
        };
        let err = start_checkout(&cart, &StoreConfig::default(), &failing)
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::PaymentError);

        let silent = FakeGateway::default();
        let session = start_checkout(&cart, &StoreConfig::default(), &silent)
            .await
            .unwrap();
        let err = complete_checkout(&cart, &silent, &session).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::PaymentError);
        assert_eq!(cart.item_count(), 2);
    }

    #[tokio::test]
    async fn test_empty_cart_cannot_check_out() {
        let gateway = FakeGateway::default();
        let err = start_checkout(&CartStore::new(), &StoreConfig::default(), &gateway)
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::BusinessLogic);
        assert!(gateway.requested.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_free_cart_cannot_check_out() {
        let cart = CartStore::new();
        cart.increment(NewLineItem::new("gift", "Sticker", Money::zero(), None, None).unwrap());

        let err = start_checkout(&cart, &StoreConfig::default(), &FakeGateway::default())
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::BusinessLogic);
    }

    #[tokio::test]
    async fn test_cart_changed_after_start_is_rejected() {
        let cart = filled_cart();
        let gateway = FakeGateway {
            outcome: Some(PaymentOutcome::Succeeded),
            ..FakeGateway::default()
        };

        let session = start_checkout(&cart, &StoreConfig::default(), &gateway)
            .await
            .unwrap();
        cart.decrement("p2");

        let err = complete_checkout(&cart, &gateway, &session).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::BusinessLogic);
        assert_eq!(cart.total_price(), Money::from_cents(2500));
    }

    #[tokio::test]
    async fn test_swapped_product_at_same_total_is_rejected() {
        let cart = CartStore::new();
        cart.increment(NewLineItem::new("tee", "Tee", Money::from_cents(1000), None, None).unwrap());
        let gateway = FakeGateway {
            outcome: Some(PaymentOutcome::Succeeded),
            ..FakeGateway::default()
        };

        let session = start_checkout(&cart, &StoreConfig::default(), &gateway)
            .await
            .unwrap();
        cart.remove("tee");
        cart.increment(NewLineItem::new("cap", "Cap", Money::from_cents(1000), None, None).unwrap());
        assert_eq!(cart.total_price(), session.amount);

        let err = complete_checkout(&cart, &gateway, &session).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::BusinessLogic);
        assert_eq!(err.message, "Cart items changed during checkout");
        assert_eq!(cart.quantity_of("cap"), 1);
    }

    #[tokio::test]
    async fn test_reordered_lines_still_complete() {
        let cart = filled_cart();
        let gateway = FakeGateway {
            outcome: Some(PaymentOutcome::Succeeded),
            ..FakeGateway::default()
        };

        let session = start_checkout(&cart, &StoreConfig::default(), &gateway)
            .await
            .unwrap();
        cart.remove("p1");
        cart.increment(NewLineItem::new("p1", "Shirt", Money::from_cents(1000), None, None).unwrap());

        let result = complete_checkout(&cart, &gateway, &session).await.unwrap();
        assert!(matches!(result, CheckoutResult::Paid { .. }));
        assert!(cart.is_empty());
    }
}
