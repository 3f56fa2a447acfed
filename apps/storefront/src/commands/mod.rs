//! # Storefront Commands
//!
//! Everything a shopper can do, as methods on [`Storefront`].
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (Storefront + modal/pending/view)
//! ├── cart.rs      ◄─── add_to_cart, change_cart_item, remove_from_cart
//! └── checkout.rs  ◄─── checkout, CheckoutReceipt
//! ```
//!
//! ## Command Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Front-end (shell.rs)                                                  │
//! │       │  "add beeswax"                                                 │
//! │       ▼                                                                 │
//! │  Storefront::add_to_cart("beeswax")                                    │
//! │       │                                                                 │
//! │       ├── catalog lookup ──────────── NotFound                         │
//! │       ├── pending.take() == 0 ─────── warning + InvalidQuantity        │
//! │       └── CartStore::add_item ─────── persisted, "added" toast         │
//! │                                                                         │
//! │  Result<T, ApiError> back to the front-end                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod cart;
pub mod checkout;

use chrono::Utc;
use hive_core::ProductCatalog;
use hive_store::{CartStore, KeyValueStorage};
use tracing::debug;

use crate::error::ApiError;
use crate::notification::NotificationCenter;
use crate::state::{ConfigState, PendingQuantities};
use crate::view::{self, CartView, CatalogEntryView};

pub use checkout::CheckoutReceipt;

/// One shopper session: the persisted cart plus everything around it.
#[derive(Debug)]
pub struct Storefront<S: KeyValueStorage> {
    cart: CartStore<S>,
    catalog: ProductCatalog,
    pending: PendingQuantities,
    notifications: NotificationCenter,
    config: ConfigState,
    modal_open: bool,
}

impl<S: KeyValueStorage> Storefront<S> {
    /// Restores the cart from `storage` under the configured key.
    pub fn new(storage: S, catalog: ProductCatalog, config: ConfigState) -> Self {
        let cart = CartStore::open_with_key(storage, config.storage_key.clone());
        let pending = PendingQuantities::for_catalog(&catalog);
        let notifications = NotificationCenter::with_secs(config.notification_secs);

        Storefront {
            cart,
            catalog,
            pending,
            notifications,
            config,
            modal_open: false,
        }
    }

    // =========================================================================
    // Modal
    // =========================================================================

    pub fn open_cart(&mut self) -> CartView {
        debug!("open_cart command");
        self.modal_open = true;
        self.view()
    }

    pub fn close_cart(&mut self) {
        debug!("close_cart command");
        self.modal_open = false;
    }

    pub fn is_cart_open(&self) -> bool {
        self.modal_open
    }

    // =========================================================================
    // Pending quantity inputs
    // =========================================================================

    pub fn increase_pending(&mut self, product_id: &str) -> Result<u32, ApiError> {
        self.pending
            .increase(product_id)
            .ok_or_else(|| ApiError::not_found("Product", product_id))
    }

    pub fn decrease_pending(&mut self, product_id: &str) -> Result<u32, ApiError> {
        self.pending
            .decrease(product_id)
            .ok_or_else(|| ApiError::not_found("Product", product_id))
    }

    // =========================================================================
    // Views
    // =========================================================================

    /// The cart as the modal and header badge show it.
    pub fn view(&self) -> CartView {
        view::render(
            self.cart.snapshot(),
            self.cart.total_item_count(),
            self.cart.total_price(),
            &self.config,
        )
    }

    pub fn catalog_view(&self) -> Vec<CatalogEntryView> {
        view::render_catalog(&self.catalog, &self.pending, &self.config)
    }

    /// Active toasts, dropping any that have expired.
    pub fn notifications(&mut self) -> &NotificationCenter {
        self.notifications.prune(Utc::now());
        &self.notifications
    }

    pub fn notifications_mut(&mut self) -> &mut NotificationCenter {
        &mut self.notifications
    }

    pub fn cart(&self) -> &CartStore<S> {
        &self.cart
    }

    pub fn config(&self) -> &ConfigState {
        &self.config
    }

    pub fn into_storage(self) -> S {
        self.cart.into_storage()
    }
}
