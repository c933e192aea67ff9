//! # State Module
//!
//! Per-session state handed to the command functions.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      Session                                    │   │
//! │  │  id: Uuid                                                       │   │
//! │  └──────────────┬───────────────────────────────┬──────────────────┘   │
//! │                 ▼                               ▼                       │
//! │  ┌──────────────────────────┐   ┌──────────────────────────────┐       │
//! │  │      CartStore           │   │      StoreConfig             │       │
//! │  │  Arc<Mutex<Cart>>        │   │  currency, catalog url,      │       │
//! │  │  watch::Sender<Snapshot> │   │  log filter (read-only)      │       │
//! │  └──────────────────────────┘   └──────────────────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod cart;
pub mod config;
pub mod session;

pub use cart::{CartSnapshot, CartStore};
pub use config::StoreConfig;
pub use session::Session;
