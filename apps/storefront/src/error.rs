//! # Error Types
//!
//! Errors raised by the session layer and the unified `ApiError` the pages
//! receive.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Storefront                         │
//! │                                                                         │
//! │  Command Function → Result<T, ApiError>                                 │
//! │                                                                         │
//! │  ValidationError ──► CoreError ──┐                                      │
//! │  CatalogError ───────────────────┼──► ApiError { code, message } ──► Page│
//! │  PaymentError ───────────────────┤                                      │
//! │  ConfigError (startup only) ─────┘                                      │
//! │                                                                         │
//! │  Cart mutations never appear here: they cannot fail.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use storefront_core::{CoreError, ValidationError};
use thiserror::Error;

// =============================================================================
// Configuration Errors
// =============================================================================

/// Result type alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Failures while loading or saving `storefront.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file exists but could not be read or written.
    #[error("Config I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid TOML for `StoreConfig`.
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A value parsed but is not usable.
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    /// No path was given and no platform config directory exists.
    #[error("No config path available")]
    NoConfigPath,
}

// =============================================================================
// Collaborator Errors
// =============================================================================

/// Failures reported by a product catalog source.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog could not be reached.
    #[error("Catalog unavailable: {0}")]
    Unavailable(String),

    /// The catalog answered with a payload we cannot read.
    #[error("Malformed catalog payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Failures reported by the payment processor boundary.
///
/// A declined payment is not an error; see `PaymentOutcome`.
#[derive(Debug, Error)]
pub enum PaymentError {
    /// The processor refused to open a payment session.
    #[error("Payment session failed: {0}")]
    SessionFailed(String),

    /// The confirmation request did not get an answer.
    #[error("Payment confirmation failed: {0}")]
    ConfirmationFailed(String),
}

// =============================================================================
// API Error
// =============================================================================

/// Error returned from command functions.
///
/// ## Serialization
/// This is what a page receives when a command fails:
/// ```json
/// {
///   "code": "VALIDATION_ERROR",
///   "message": "unit_price must be between 0 and 10000000000"
/// }
/// ```
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Input validation failed (400)
    ValidationError,

    /// Business rule refused the request (422)
    BusinessLogic,

    /// Catalog source failed (502)
    CatalogError,

    /// Payment processor failed (502)
    PaymentError,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(e) => e.into(),
            CoreError::EmptyCart
            | CoreError::InvalidPaymentAmount { .. }
            | CoreError::CartChanged { .. }
            | CoreError::CartItemsChanged => {
                ApiError::new(ErrorCode::BusinessLogic, err.to_string())
            }
        }
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        tracing::warn!("Catalog request failed: {}", err);
        ApiError::new(ErrorCode::CatalogError, "Could not load products")
    }
}

impl From<PaymentError> for ApiError {
    fn from(err: PaymentError) -> Self {
        tracing::warn!("Payment request failed: {}", err);
        ApiError::new(ErrorCode::PaymentError, err.to_string())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
