//! # Error Types
//!
//! Domain-specific error types for hive-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  hive-core errors (this file)                                          │
//! │  ├── CartError        - Rejected cart mutations                        │
//! │  └── ValidationError  - Input / restored-data validation failures      │
//! │                                                                         │
//! │  hive-store errors (separate crate)                                    │
//! │  └── StorageError     - Read/write failures (never fatal)              │
//! │                                                                         │
//! │  storefront errors (in app)                                            │
//! │  └── ApiError         - What the shopper sees                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every `CartError` means "the call was rejected and the cart is unchanged".

use thiserror::Error;

// =============================================================================
// Cart Error
// =============================================================================

/// A cart mutation that was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    /// Quantity passed to `add_item` was zero or negative.
    ///
    /// ## User Workflow
    /// ```text
    /// Pending qty: 0
    ///      │
    ///      ▼
    /// add_item(.., 0) → InvalidQuantity { requested: 0 }
    ///      │
    ///      ▼
    /// UI shows: "Пожалуйста, выберите количество"
    /// ```
    #[error("Quantity must be positive, got {requested}")]
    InvalidQuantity { requested: i64 },

    /// Unit price was zero, negative, or above `MAX_UNIT_PRICE`.
    #[error("Unit price must be between 1 and {}, got {price}", crate::MAX_UNIT_PRICE)]
    InvalidPrice { price: i64 },

    /// The resulting quantity does not fit the line item counter.
    #[error("Quantity for {id} would overflow: current {current}, requested {requested}")]
    QuantityOverflow {
        id: String,
        current: u32,
        requested: i64,
    },

    /// The cart total would no longer fit in `Money`.
    #[error("Cart total would overflow when adding {id}")]
    TotalOverflow { id: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is too large.
    #[error("{field} must be at most {max}")]
    TooLarge { field: String, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Duplicate value (two line items with one id).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CartError.
pub type CartResult<T> = Result<T, CartError>;

// =============================================================================
// Unit Tests
// =============================================================================
