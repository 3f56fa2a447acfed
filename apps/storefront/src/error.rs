//! # API Error Type
//!
//! Unified error type for storefront commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the storefront                         │
//! │                                                                         │
//! │  Shell command ("add beeswax")                                          │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Storefront command                                              │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │  Unknown product? ─── ApiError::not_found ───────────┐          │  │
//! │  │         │                                             │          │  │
//! │  │  CartError? ───────── From<CartError> ───────── ApiError ──────►│  │
//! │  │         │                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  Shell prints: "[InvalidQuantity] Пожалуйста, выберите количество"     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use hive_core::CartError;
use hive_store::StorageError;
use serde::Serialize;
use thiserror::Error;

use crate::notification::CHOOSE_QUANTITY;

/// Error returned from storefront commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Product not found: mead"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for command responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Unknown product id
    NotFound,

    /// Quantity was zero or negative
    InvalidQuantity,

    /// Input validation failed
    ValidationError,

    /// Checkout attempted with nothing in the cart
    EmptyCart,

    /// Storage could not be opened
    StorageError,

    /// Configuration could not be loaded
    ConfigError,

    /// Terminal input/output failed
    Internal,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    pub fn empty_cart() -> Self {
        ApiError::new(ErrorCode::EmptyCart, "Cart is empty")
    }
}

/// Converts cart errors to API errors.
impl From<CartError> for ApiError {
    fn from(err: CartError) -> Self {
        match err {
            CartError::InvalidQuantity { .. } => {
                ApiError::new(ErrorCode::InvalidQuantity, CHOOSE_QUANTITY)
            }
            CartError::InvalidPrice { .. }
            | CartError::QuantityOverflow { .. }
            | CartError::TotalOverflow { .. }
            | CartError::Validation(_) => ApiError::validation(err.to_string()),
        }
    }
}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        tracing::error!("Storage error: {}", err);
        ApiError::new(ErrorCode::StorageError, err.to_string())
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        ApiError::new(ErrorCode::ConfigError, err.to_string())
    }
}

impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        tracing::error!("I/O error: {}", err);
        ApiError::new(ErrorCode::Internal, err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

// =============================================================================
// Config Error
// =============================================================================

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
