//! # Storage Error Types
//!
//! Error types for persisted-cart operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  io::Error / serde_json::Error                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StorageError (this module) ← Adds key and categorization              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CartStore                                                             │
//! │   ├── on open:   Read / Corrupt  → warn!, start with an empty cart     │
//! │   └── on mutate: Write           → warn!, keep the in-memory change    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `CartStore` never returns these to its callers. Backends and the codec do,
//! so tests and the storefront can still inspect them directly.

use thiserror::Error;

/// Persistence errors.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backend could not read the slot.
    #[error("Failed to read '{key}': {reason}")]
    Read { key: String, reason: String },

    /// The backend could not write the slot.
    #[error("Failed to write '{key}': {reason}")]
    Write { key: String, reason: String },

    /// The slot was read but its content is not a valid cart.
    ///
    /// ## When This Occurs
    /// - Not JSON at all (truncated write, hand-edited file)
    /// - JSON of the wrong shape
    /// - Valid shape that breaks a cart invariant (duplicate id, zero quantity)
    #[error("Persisted cart under '{key}' is malformed: {reason}")]
    Corrupt { key: String, reason: String },

    /// Key contains characters the backend cannot store.
    #[error("Invalid storage key '{0}'")]
    InvalidKey(String),

    /// No platform data directory could be determined.
    #[error("Could not determine a data directory")]
    NoDataDir,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StorageError {
    pub fn read(key: impl Into<String>, reason: impl ToString) -> Self {
        StorageError::Read {
            key: key.into(),
            reason: reason.to_string(),
        }
    }

    pub fn write(key: impl Into<String>, reason: impl ToString) -> Self {
        StorageError::Write {
            key: key.into(),
            reason: reason.to_string(),
        }
    }

    pub fn corrupt(key: impl Into<String>, reason: impl ToString) -> Self {
        StorageError::Corrupt {
            key: key.into(),
            reason: reason.to_string(),
        }
    }
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = StorageError::corrupt("cart", "expected value at line 1 column 1");
        assert_eq!(
            err.to_string(),
            "Persisted cart under 'cart' is malformed: expected value at line 1 column 1"
        );

        let err = StorageError::write("cart", "disk full");
        assert_eq!(err.to_string(), "Failed to write 'cart': disk full");
    }
}
