//! # Storefront Session Library
//!
//! The layer between the storefront pages and `storefront-core`.
//!
//! ## Module Organization
//! ```text
//! storefront/
//! ├── lib.rs          ◄─── You are here (tracing setup)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── cart.rs     ◄─── CartStore (thread-safe, observable)
//! │   ├── config.rs   ◄─── StoreConfig (TOML + env)
//! │   └── session.rs  ◄─── Session (owns one CartStore)
//! ├── commands/
//! │   ├── cart.rs     ◄─── increment/decrement/remove/clear
//! │   ├── catalog.rs  ◄─── CatalogSource seam, list_products
//! │   ├── shipping.rs ◄─── submit_shipping
//! │   └── checkout.rs ◄─── PaymentGateway seam, start/complete checkout
//! └── error.rs        ◄─── ApiError and collaborator errors
//! ```
//!
//! ## Startup Sequence
//! ```text
//! StoreConfig::load(None)      config file + STOREFRONT_* overrides
//!        │
//!        ▼
//! init_tracing(&config)        RUST_LOG, else config.log_filter
//!        │
//!        ▼
//! Session::new(config)         one per shopper, owns its CartStore
//! ```

pub mod commands;
pub mod error;
pub mod state;

use tracing_subscriber::EnvFilter;

pub use error::{ApiError, ErrorCode};
pub use state::{CartSnapshot, CartStore, Session, StoreConfig};

/// Initializes the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise the configured filter is used, and
/// `info` if that filter does not parse. Returns `false` when a subscriber
/// was already installed (e.g. by another test).
pub fn init_tracing(config: &StoreConfig) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_tracing_twice_is_harmless() {
        let config = StoreConfig {
            log_filter: "not a [valid filter".to_string(),
            ..StoreConfig::default()
        };

        init_tracing(&config);
        assert!(!init_tracing(&StoreConfig::default()));
    }
}
