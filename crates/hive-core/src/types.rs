//! # Domain Types
//!
//! Core domain types used throughout the cart.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │ ProductCatalog  │   │    Product      │   │    LineItem     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  fixed table    │──►│  id             │──►│  id             │       │
//! │  │  (read-only)    │   │  name           │   │  name           │       │
//! │  │                 │   │  unit_price     │   │  price          │       │
//! │  └─────────────────┘   └─────────────────┘   │  quantity ≥ 1   │       │
//! │                                              └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Persisted Shape
//! A `LineItem` serializes to `{"id", "name", "price", "quantity"}`. That record
//! layout is the durable storage contract, so field renames here are breaking.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Product Id
// =============================================================================

/// Stable identifier of a catalog entry, e.g. `summer-honey`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        ProductId(id.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lets maps keyed by `ProductId` be queried with a plain `&str`.
impl Borrow<str> for ProductId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        ProductId(id.to_string())
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        ProductId(id)
    }
}

impl PartialEq<str> for ProductId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ProductId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

// =============================================================================
// Line Item
// =============================================================================

/// One product entry in the cart.
///
/// ## Invariants (enforced by `CartState`)
/// - `quantity >= 1`; an item whose quantity reaches zero is removed
/// - `price > 0`
/// - `id` is unique within a cart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LineItem {
    /// Product identifier.
    pub id: ProductId,

    /// Display name at time of adding.
    pub name: String,

    /// Unit price in minor units at time of adding.
    #[serde(rename = "price")]
    pub unit_price: Money,

    /// Quantity in cart.
    pub quantity: u32,
}

impl LineItem {
    /// Calculates the line total (unit price × quantity).
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Product Catalog
// =============================================================================

/// A product offered on the storefront.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub unit_price: Money,
}

impl Product {
    fn new(id: &str, name: &str, unit_price: i64) -> Self {
        Product {
            id: ProductId::new(id),
            name: name.to_string(),
            unit_price: Money::from_minor(unit_price),
        }
    }
}

/// Read-only table of the products the storefront sells.
///
/// The catalog lives outside the cart: the cart copies `name` and
/// `unit_price` into each `LineItem` when an item is added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductCatalog {
    products: Vec<Product>,
}

impl ProductCatalog {
    /// The fixed honey storefront table.
    ///
    /// ```text
    /// summer-honey    Летний мед - 227г/8oz          650
    /// soft-set-honey  Крем-мед - 227г/8oz            650
    /// beeswax         100% пчелиный воск ... блок    250
    /// ```
    pub fn storefront() -> Self {
        ProductCatalog {
            products: vec![
                Product::new("summer-honey", "Летний мед - 227г/8oz", 650),
                Product::new("soft-set-honey", "Крем-мед - 227г/8oz", 650),
                Product::new(
                    "beeswax",
                    "100% пчелиный воск для творческих проектов 1oz/28г блок",
                    250,
                ),
            ],
        }
    }

    /// Looks up a product by id.
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Products in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for ProductCatalog {
    fn default() -> Self {
        ProductCatalog::storefront()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_item_wire_shape() {
        let item = LineItem {
            id: ProductId::new("summer-honey"),
            name: "Летний мед".to_string(),
            unit_price: Money::from_minor(650),
            quantity: 2,
        };

        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": "summer-honey",
                "name": "Летний мед",
                "price": 650,
                "quantity": 2
            })
        );
    }

    #[test]
    fn test_line_item_rejects_negative_quantity() {
        let json = r#"{"id":"beeswax","name":"Воск","price":250,"quantity":-1}"#;
        assert!(serde_json::from_str::<LineItem>(json).is_err());
    }

    #[test]
    fn test_product_id_map_lookup_by_str() {
        use std::collections::HashMap;

        let mut stock: HashMap<ProductId, u32> = HashMap::new();
        stock.insert(ProductId::new("beeswax"), 4);

        assert_eq!(stock.get("beeswax"), Some(&4));
        assert_eq!(stock.get("summer-honey"), None);
    }

    #[test]
    fn test_line_total() {
        let item = LineItem {
            id: ProductId::new("beeswax"),
            name: "Воск".to_string(),
            unit_price: Money::from_minor(250),
            quantity: 4,
        };
        assert_eq!(item.line_total().minor(), 1000);
    }

    #[test]
    fn test_storefront_catalog() {
        let catalog = ProductCatalog::storefront();
        assert_eq!(catalog.len(), 3);

        let honey = catalog.get("summer-honey").unwrap();
        assert_eq!(honey.unit_price.minor(), 650);
        assert_eq!(catalog.get("beeswax").unwrap().unit_price.minor(), 250);
        assert!(catalog.get("mead").is_none());

        let ids: Vec<&str> = catalog.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["summer-honey", "soft-set-honey", "beeswax"]);
    }
}
