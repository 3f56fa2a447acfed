//! # Checkout
//!
//! Mock order placement. No payment or delivery happens; the receipt is what
//! a real order backend would be handed.

use chrono::{DateTime, Utc};
use hive_core::{LineItem, Money};
use hive_store::KeyValueStorage;
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use super::Storefront;
use crate::error::ApiError;
use crate::notification::ORDER_THANKS;

/// Snapshot of the cart at the moment of checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutReceipt {
    pub order_id: Uuid,
    pub placed_at: DateTime<Utc>,
    pub store_name: String,
    pub items: Vec<LineItem>,
    pub item_count: u64,
    pub total: Money,
}

impl<S: KeyValueStorage> Storefront<S> {
    /// Places the order.
    ///
    /// ## Behavior
    /// - Empty cart: `EmptyCart`, nothing changes
    /// - Otherwise: receipt is built, the cart is cleared (and persisted),
    ///   the modal closes, and the thank-you toast is shown
    pub fn checkout(&mut self) -> Result<CheckoutReceipt, ApiError> {
        if self.cart.snapshot().is_empty() {
            return Err(ApiError::empty_cart());
        }

        let placed_at = Utc::now();
        let receipt = CheckoutReceipt {
            order_id: Uuid::new_v4(),
            placed_at,
            store_name: self.config.store_name.clone(),
            items: self.cart.snapshot().to_vec(),
            item_count: self.cart.total_item_count(),
            total: self.cart.total_price(),
        };

        info!(
            order_id = %receipt.order_id,
            item_count = receipt.item_count,
            total = %receipt.total,
            "Order placed"
        );

        self.cart.clear();
        self.modal_open = false;
        self.notifications.success(ORDER_THANKS, placed_at);

        Ok(receipt)
    }
}
