//! # Cart Store
//!
//! `CartStore` owns the cart state and its durable mirror, and exposes the
//! only legal mutation paths.
//!
//! ## Persistence Protocol
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    CartStore Lifecycle                                  │
//! │                                                                         │
//! │  open(storage)                                                          │
//! │       │                                                                 │
//! │       ├── slot holds a valid cart ─────► restore it                    │
//! │       ├── slot empty ──────────────────► empty cart                    │
//! │       └── slot unreadable / malformed ─► warn!, empty cart             │
//! │                                                                         │
//! │  add_item / change_quantity / remove_item / clear                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  mutate CartState in memory                                            │
//! │       │  (only if something changed)                                   │
//! │       ▼                                                                 │
//! │  save_cart(storage) ── fails? ──► warn!, in-memory change stands       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Durability is best-effort: a failed write never undoes the mutation and is
//! never reported to the caller.

use hive_core::{CartResult, CartState, LineItem, Money, ProductId, DEFAULT_CART_KEY};
use tracing::{debug, info, warn};

use crate::codec::{load_cart, save_cart};
use crate::storage::KeyValueStorage;

/// The cart state machine with injected persistence.
///
/// ## Usage
/// ```rust
/// use hive_store::{CartStore, MemoryStorage};
///
/// let mut store = CartStore::open(MemoryStorage::new());
/// store.add_item("summer-honey", "Летний мед", 650, 2).unwrap();
///
/// assert_eq!(store.total_item_count(), 2);
/// assert_eq!(store.total_price().minor(), 1300);
/// assert!(store.storage().raw("cart").is_some());
/// ```
#[derive(Debug)]
pub struct CartStore<S: KeyValueStorage> {
    state: CartState,
    storage: S,
    key: String,
}

impl<S: KeyValueStorage> CartStore<S> {
    /// Restores the cart stored under the default key.
    pub fn open(storage: S) -> Self {
        Self::open_with_key(storage, DEFAULT_CART_KEY)
    }

    /// Restores the cart stored under `key`.
    ///
    /// Never fails: an absent or malformed slot yields an empty cart.
    pub fn open_with_key(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();

        let state = match load_cart(&storage, &key) {
            Ok(Some(state)) => {
                info!(
                    key = %key,
                    items = state.len(),
                    quantity = state.total_item_count(),
                    "Cart restored"
                );
                state
            }
            Ok(None) => {
                debug!(key = %key, "No persisted cart, starting empty");
                CartState::new()
            }
            Err(e) => {
                warn!(key = %key, error = %e, "Persisted cart unusable, starting empty");
                CartState::new()
            }
        };

        CartStore {
            state,
            storage,
            key,
        }
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Adds `quantity` of a product, merging with an existing line.
    ///
    /// ## Returns
    /// - `Ok(&CartState)` - the updated cart (already persisted)
    /// - `Err(InvalidQuantity)` if `quantity <= 0`; the cart is unchanged and
    ///   nothing is written
    pub fn add_item(
        &mut self,
        id: impl Into<ProductId>,
        name: &str,
        unit_price: i64,
        quantity: i64,
    ) -> CartResult<&CartState> {
        let id = id.into();
        debug!(id = %id, unit_price, quantity, "add_item");

        self.state.add_item(id, name, unit_price, quantity)?;
        self.persist();
        Ok(&self.state)
    }

    /// Applies a signed quantity change. Reaching zero removes the item.
    ///
    /// ## Returns
    /// `true` if the cart changed; an unknown id is a silent no-op.
    pub fn change_quantity(&mut self, id: &str, delta: i64) -> bool {
        let changed = self.state.change_quantity(id, delta);
        debug!(id = %id, delta, changed, "change_quantity");

        if changed {
            self.persist();
        }
        changed
    }

    /// Removes a product line if present.
    pub fn remove_item(&mut self, id: &str) -> bool {
        let removed = self.state.remove_item(id);
        debug!(id = %id, removed, "remove_item");

        if removed {
            self.persist();
        }
        removed
    }

    /// Empties the cart (used after checkout).
    pub fn clear(&mut self) -> bool {
        let cleared = self.state.clear();
        debug!(cleared, "clear");

        if cleared {
            self.persist();
        }
        cleared
    }

    // =========================================================================
    // Reads
    // =========================================================================

    pub fn total_item_count(&self) -> u64 {
        self.state.total_item_count()
    }

    pub fn total_price(&self) -> Money {
        self.state.total_price()
    }

    /// Current line items in first-added order, for rendering.
    pub fn snapshot(&self) -> &[LineItem] {
        self.state.items()
    }

    pub fn state(&self) -> &CartState {
        &self.state
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_key(&self) -> &str {
        &self.key
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    fn persist(&mut self) {
        if let Err(e) = save_cart(&mut self.storage, &self.key, &self.state) {
            warn!(
                key = %self.key,
                error = %e,
                "Failed to persist cart, keeping in-memory state"
            );
        }
    }
}
