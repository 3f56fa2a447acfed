//! # Cart Commands
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │  Empty   │────►│ In Cart  │────►│  Modal   │────►│ Checkout │       │
//! │  │  Cart    │     │          │     │  open    │     │          │       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │                        │                                  │             │
//! │                   add_to_cart                       (checkout.rs)      │
//! │                   change_cart_item                        │             │
//! │                   remove_from_cart                        ▼             │
//! │                                                     back to empty      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use hive_store::KeyValueStorage;
use tracing::{debug, info};

use super::Storefront;
use crate::error::ApiError;
use crate::notification::{ADDED_TO_CART, CHOOSE_QUANTITY};
use crate::view::CartView;

impl<S: KeyValueStorage> Storefront<S> {
    /// Commits the pending quantity of a product to the cart.
    ///
    /// ## Behavior
    /// - Unknown product: `NotFound`, nothing changes
    /// - Pending quantity 0: warning toast and `InvalidQuantity`
    /// - Otherwise the quantity merges into the cart (name and price are
    ///   copied from the catalog), the input resets to 0, and the "added"
    ///   toast is shown
    pub fn add_to_cart(&mut self, product_id: &str) -> Result<CartView, ApiError> {
        debug!(product_id = %product_id, "add_to_cart command");

        let product = self
            .catalog
            .get(product_id)
            .ok_or_else(|| ApiError::not_found("Product", product_id))?;

        let quantity = self.pending.take(product_id);
        if quantity == 0 {
            self.notifications.warning(CHOOSE_QUANTITY, Utc::now());
            return Err(hive_core::CartError::InvalidQuantity { requested: 0 }.into());
        }

        if let Err(err) = self.cart.add_item(
            product.id.clone(),
            &product.name,
            product.unit_price.minor(),
            i64::from(quantity),
        ) {
            self.pending.set(product_id, quantity);
            return Err(err.into());
        }

        info!(product_id = %product_id, quantity, "Added to cart");
        self.notifications.success(ADDED_TO_CART, Utc::now());

        Ok(self.view())
    }

    /// The − / + buttons inside the cart modal.
    ///
    /// An unknown id is a no-op; the returned view is unchanged.
    pub fn change_cart_item(&mut self, product_id: &str, delta: i64) -> CartView {
        debug!(product_id = %product_id, delta, "change_cart_item command");
        self.cart.change_quantity(product_id, delta);
        self.view()
    }

    pub fn remove_from_cart(&mut self, product_id: &str) -> CartView {
        debug!(product_id = %product_id, "remove_from_cart command");
        self.cart.remove_item(product_id);
        self.view()
    }
}

#[cfg(test)]
mod tests {
    use hive_core::ProductCatalog;
    use hive_store::MemoryStorage;

    use super::*;
    use crate::error::ErrorCode;
    use crate::notification::NotificationLevel;
    use crate::state::ConfigState;

    fn storefront() -> Storefront<MemoryStorage> {
        Storefront::new(
            MemoryStorage::new(),
            ProductCatalog::storefront(),
            ConfigState::default(),
        )
    }

    #[test]
    fn test_add_commits_pending_and_resets_it() {
        let mut shop = storefront();
        shop.increase_pending("summer-honey").unwrap();
        shop.increase_pending("summer-honey").unwrap();

        let view = shop.add_to_cart("summer-honey").unwrap();
        assert_eq!(view.badge_count, 2);
        assert_eq!(view.total_label, "1300 ₽");

        let entry = shop
            .catalog_view()
            .into_iter()
            .find(|e| e.id == "summer-honey")
            .unwrap();
        assert_eq!(entry.pending, 0);

        let toast = shop.notifications_mut().latest().unwrap().clone();
        assert_eq!(toast.message, ADDED_TO_CART);
        assert_eq!(toast.level, NotificationLevel::Success);
    }

    #[test]
    fn test_add_with_zero_pending_warns() {
        let mut shop = storefront();

        let err = shop.add_to_cart("beeswax").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidQuantity);
        assert!(shop.view().is_empty());

        let toast = shop.notifications_mut().latest().unwrap().clone();
        assert_eq!(toast.message, CHOOSE_QUANTITY);
        assert_eq!(toast.level, NotificationLevel::Warning);
    }

    #[test]
    fn test_add_unknown_product() {
        let mut shop = storefront();
        let err = shop.add_to_cart("mead").unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert!(shop.notifications_mut().active().is_empty());
    }

    #[test]
    fn test_modal_plus_minus_and_remove() {
        let mut shop = storefront();
        shop.increase_pending("beeswax").unwrap();
        shop.add_to_cart("beeswax").unwrap();

        let view = shop.change_cart_item("beeswax", 1);
        assert_eq!(view.lines[0].quantity, 2);

        let view = shop.change_cart_item("beeswax", -2);
        assert!(view.is_empty());

        shop.increase_pending("beeswax").unwrap();
        shop.add_to_cart("beeswax").unwrap();
        assert!(shop.remove_from_cart("beeswax").is_empty());
    }

    #[test]
    fn test_cart_persists_under_configured_key() {
        let config = ConfigState {
            storage_key: "basket".to_string(),
            ..ConfigState::default()
        };
        let mut shop = Storefront::new(MemoryStorage::new(), ProductCatalog::storefront(), config);
        shop.increase_pending("soft-set-honey").unwrap();
        shop.add_to_cart("soft-set-honey").unwrap();

        let storage = shop.into_storage();
        assert!(storage.raw("basket").is_some());
        assert!(storage.raw("cart").is_none());
    }
}
