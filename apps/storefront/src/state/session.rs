//! # Session
//!
//! One shopper's context: its own cart store plus the shared configuration.
//!
//! There is no process-wide cart. Each session constructs its store, and
//! pages receive `&CartStore` from the session they belong to, so two
//! sessions (or two tests) never see each other's items.

use std::sync::Arc;

use uuid::Uuid;

use super::{CartStore, StoreConfig};

/// A shopper session.
#[derive(Debug, Clone)]
pub struct Session {
    id: Uuid,
    cart: CartStore,
    config: Arc<StoreConfig>,
}

impl Session {
    /// Starts a session with an empty cart.
    pub fn new(config: Arc<StoreConfig>) -> Self {
        let id = Uuid::new_v4();
        tracing::debug!(session_id = %id, "Session started");
        Session {
            id,
            cart: CartStore::new(),
            config,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// The cart every page of this session reads and mutates.
    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }
}
