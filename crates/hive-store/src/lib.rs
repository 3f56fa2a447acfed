//! # hive-store: Persistence Layer for the Hive cart
//!
//! Wraps the pure [`hive_core::CartState`] with a durable key-value mirror.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Hive Cart Data Flow                              │
//! │                                                                         │
//! │  Storefront action (add to cart)                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    hive-store (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   CartStore   │    │     codec     │    │   storage    │  │   │
//! │  │   │  (store.rs)   │───►│  (codec.rs)   │───►│ KeyValue-    │  │   │
//! │  │   │               │    │  JSON array   │    │ Storage      │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  MemoryStorage (tests)  |  FileStorage (<data dir>/cart.json)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - `CartStore`, the cart state machine with persistence
//! - [`storage`] - `KeyValueStorage` trait and `MemoryStorage`
//! - [`file`] - `FileStorage`
//! - [`codec`] - Persisted JSON form of a cart
//! - [`error`] - Storage error types
//!
//! ## Usage
//!
//! ```rust,no_run
//! use hive_store::{CartStore, FileStorage};
//!
//! let storage = FileStorage::open_default()?;
//! let mut store = CartStore::open(storage);
//! store.add_item("beeswax", "100% пчелиный воск", 250, 1)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod codec;
pub mod error;
pub mod file;
pub mod storage;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StorageError, StorageResult};
pub use file::FileStorage;
pub use storage::{KeyValueStorage, MemoryStorage};
pub use store::CartStore;
