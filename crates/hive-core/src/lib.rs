//! # hive-core: Pure Cart Rules for the Hive storefront
//!
//! This crate holds the cart state machine as pure functions over an owned
//! value. Nothing here touches storage; `hive-store` wraps [`CartState`] with
//! persistence.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Hive Cart Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Storefront (presentation glue)                  │   │
//! │  │   Catalog ──► Pending qty ──► Cart modal ──► Mock checkout      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ pull: snapshot / totals                │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                hive-store (CartStore + storage)                 │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ hive-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │ validation│  │   │
//! │  │   │ LineItem  │  │   Money   │  │ CartState │  │   rules   │  │   │
//! │  │   │ Catalog   │  │           │  │           │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORAGE • PURE FUNCTIONS                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (ProductId, LineItem, Product, ProductCatalog)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - The cart state and its mutation rules
//! - [`error`] - Domain error types
//! - [`validation`] - Input and restored-data validation
//!
//! ## Example Usage
//!
//! ```rust
//! use hive_core::{CartState, ProductId};
//!
//! let mut cart = CartState::new();
//! cart.add_item(ProductId::new("summer-honey"), "Летний мед", 650, 2).unwrap();
//!
//! assert_eq!(cart.total_item_count(), 2);
//! assert_eq!(cart.total_price().minor(), 1300);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::CartState;
pub use error::{CartError, CartResult, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Storage key the cart is persisted under unless configured otherwise.
pub const DEFAULT_CART_KEY: &str = "cart";

/// Largest accepted unit price, in minor units.
///
/// Keeps `price × u32::MAX` inside `i64`, so a single line total can always be
/// computed.
pub const MAX_UNIT_PRICE: i64 = 1_000_000_000;

/// Maximum length of a product display name, in characters.
pub const MAX_PRODUCT_NAME_LEN: usize = 200;
