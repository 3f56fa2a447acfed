//! # Cart State
//!
//! The ordered list of line items and the only legal ways to change it.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart State Operations                                │
//! │                                                                         │
//! │  Shopper Action           Operation                Cart State Change    │
//! │  ──────────────           ─────────                ─────────────────    │
//! │                                                                         │
//! │  Click "add" ────────────► add_item() ───────────► merge or push       │
//! │                                                                         │
//! │  Click + / − in modal ───► change_quantity() ────► qty += delta        │
//! │                                                    (0 ⇒ removed)       │
//! │                                                                         │
//! │  Click × ────────────────► remove_item() ────────► items.retain(..)    │
//! │                                                                         │
//! │  Checkout ───────────────► clear() ──────────────► items.clear()       │
//! │                                                                         │
//! │  Render ─────────────────► items() / totals ─────► (read only)         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every operation is total: it either produces a new valid state or leaves
//! the state untouched.

use serde::{Deserialize, Serialize};

use crate::error::{CartError, CartResult, ValidationError};
use crate::money::Money;
use crate::types::{LineItem, ProductId};
use crate::validation::{
    validate_line_items, validate_product_id, validate_product_name, validate_quantity,
    validate_unit_price,
};

/// The shopping cart.
///
/// ## Invariants
/// - Items are unique by `id` (adding the same product increases quantity)
/// - Every quantity is ≥ 1 (a quantity reaching zero removes the item)
/// - Items keep first-added order
/// - `total_price()` fits in `Money` without overflow
///
/// Serializes as a bare JSON array of line items; deserializing re-checks the
/// invariants, so a value that decodes is always a valid cart.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<LineItem>", into = "Vec<LineItem>")]
pub struct CartState {
    items: Vec<LineItem>,
}

impl CartState {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        CartState { items: Vec::new() }
    }

    /// Builds a cart from existing line items, checking every invariant.
    pub fn from_items(items: Vec<LineItem>) -> Result<Self, ValidationError> {
        validate_line_items(&items)?;
        Ok(CartState { items })
    }

    /// Adds a product to the cart or increases its quantity if already present.
    ///
    /// ## Behavior
    /// - `quantity <= 0`: `InvalidQuantity`, nothing changes
    /// - Product already in cart: quantity grows by `quantity`; the stored
    ///   name and price stay as first added
    /// - Product not in cart: appended at the end
    /// - Resulting cart total would overflow: `TotalOverflow`, nothing changes
    pub fn add_item(
        &mut self,
        id: ProductId,
        name: impl Into<String>,
        unit_price: i64,
        quantity: i64,
    ) -> CartResult<()> {
        validate_quantity(quantity)?;
        validate_unit_price(unit_price)?;
        validate_product_id(id.as_str())?;

        let position = self.position(id.as_str());
        let current = position.map(|i| self.items[i].quantity).unwrap_or(0);

        let new_qty = u32::try_from(quantity)
            .ok()
            .and_then(|q| current.checked_add(q))
            .ok_or_else(|| CartError::QuantityOverflow {
                id: id.to_string(),
                current,
                requested: quantity,
            })?;

        let line_price = match position {
            Some(i) => self.items[i].unit_price,
            None => Money::from_minor(unit_price),
        };
        line_price
            .checked_multiply_quantity(new_qty)
            .and_then(|line| self.total_without(position).checked_add(line))
            .ok_or_else(|| CartError::TotalOverflow { id: id.to_string() })?;

        match position {
            Some(i) => self.items[i].quantity = new_qty,
            None => {
                let name = name.into();
                validate_product_name(&name)?;
                self.items.push(LineItem {
                    id,
                    name,
                    unit_price: Money::from_minor(unit_price),
                    quantity: new_qty,
                });
            }
        }

        Ok(())
    }

    /// Changes an item's quantity by a signed delta.
    ///
    /// ## Behavior
    /// - Result is floored at 0; exactly 0 removes the item
    /// - Results saturate at `u32::MAX`, or lower if the cart total would
    ///   otherwise overflow
    /// - Unknown id: no-op
    ///
    /// ## Returns
    /// `true` if the cart actually changed.
    pub fn change_quantity(&mut self, id: &str, delta: i64) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };

        let current = self.items[index].quantity;
        let next = (current as i64).saturating_add(delta).max(0);

        if next == 0 {
            self.items.remove(index);
            return true;
        }

        let next = u32::try_from(next)
            .unwrap_or(u32::MAX)
            .min(self.max_quantity(index));
        if next == current {
            return false;
        }

        self.items[index].quantity = next;
        true
    }

    /// Removes an item from the cart by product id.
    ///
    /// ## Returns
    /// `true` if an item was removed.
    pub fn remove_item(&mut self, id: &str) -> bool {
        let initial_len = self.items.len();
        self.items.retain(|i| i.id != id);
        self.items.len() != initial_len
    }

    /// Clears all items from the cart.
    ///
    /// ## Returns
    /// `true` if the cart held anything.
    pub fn clear(&mut self) -> bool {
        let had_items = !self.items.is_empty();
        self.items.clear();
        had_items
    }

    /// Sum of all quantities.
    pub fn total_item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Sum of `price × quantity` over all items.
    pub fn total_price(&self) -> Money {
        self.items.iter().map(LineItem::line_total).sum()
    }

    /// Items in first-added order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Looks up a line item by product id.
    pub fn get(&self, id: &str) -> Option<&LineItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Number of distinct products in the cart.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|i| i.id == id)
    }

    /// Cart total leaving out the item at `skip`.
    fn total_without(&self, skip: Option<usize>) -> Money {
        self.items
            .iter()
            .enumerate()
            .filter(|(i, _)| Some(*i) != skip)
            .map(|(_, item)| item.line_total())
            .sum()
    }

    /// Largest quantity the item at `index` can hold while the total still fits.
    fn max_quantity(&self, index: usize) -> u32 {
        let room = i64::MAX - self.total_without(Some(index)).minor();
        let unit_price = self.items[index].unit_price.minor().max(1);
        u32::try_from(room / unit_price).unwrap_or(u32::MAX)
    }
}

impl TryFrom<Vec<LineItem>> for CartState {
    type Error = ValidationError;

    fn try_from(items: Vec<LineItem>) -> Result<Self, Self::Error> {
        CartState::from_items(items)
    }
}

impl From<CartState> for Vec<LineItem> {
    fn from(cart: CartState) -> Self {
        cart.items
    }
}
