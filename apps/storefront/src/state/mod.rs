//! # State Module
//!
//! Session state that lives beside the cart but is not part of it.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Storefront State                                     │
//! │                                                                         │
//! │  ┌──────────────────────┐  ┌──────────────────────┐                    │
//! │  │   ConfigState        │  │  PendingQuantities   │                    │
//! │  │                      │  │                      │                    │
//! │  │  • store name        │  │  • one input per     │                    │
//! │  │  • currency symbol   │  │    catalog product   │                    │
//! │  │  • storage key/dir   │  │  • floor at 0        │                    │
//! │  └──────────────────────┘  └──────────────────────┘                    │
//! │                                                                         │
//! │  ConfigState: read-only after initialization                           │
//! │  PendingQuantities: reset on every successful "add to cart"            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod pending;

pub use config::ConfigState;
pub use pending::PendingQuantities;
