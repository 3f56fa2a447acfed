//! # Render Model
//!
//! Display-ready projections of the cart and catalog. Front-ends only format
//! these; all arithmetic has already happened in the cart.
//!
//! ```text
//! ┌────────────────────────────────────────────────┐
//! │  Корзина                              🛒 3     │
//! ├────────────────────────────────────────────────┤
//! │  Летний мед - 227г/8oz                         │
//! │  650 ₽ за шт.          [-] 2 [+]     1300 ₽   │
//! │  100% пчелиный воск ...                        │
//! │  250 ₽ за шт.          [-] 1 [+]      250 ₽   │
//! ├────────────────────────────────────────────────┤
//! │  Итого: 1550 ₽                                 │
//! └────────────────────────────────────────────────┘
//! ```

use std::fmt;

use hive_core::{LineItem, Money, ProductCatalog, ProductId};
use serde::Serialize;

use crate::notification::EMPTY_CART_TEXT;
use crate::state::{ConfigState, PendingQuantities};

/// One row of the cart modal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineView {
    pub id: ProductId,
    pub name: String,
    pub unit_price_label: String,
    pub quantity: u32,
    pub line_total_label: String,
}

/// The cart modal plus the header badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    pub badge_count: u64,
    pub lines: Vec<CartLineView>,
    pub total_label: String,
    /// Set only when there are no lines
    pub empty_message: Option<String>,
}

impl CartView {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Projects cart contents into a [`CartView`].
pub fn render(
    items: &[LineItem],
    total_count: u64,
    total_price: Money,
    config: &ConfigState,
) -> CartView {
    let lines = items
        .iter()
        .map(|item| CartLineView {
            id: item.id.clone(),
            name: item.name.clone(),
            unit_price_label: format!("{} за шт.", config.format_price(item.unit_price)),
            quantity: item.quantity,
            line_total_label: config.format_price(item.line_total()),
        })
        .collect::<Vec<_>>();

    let empty_message = lines.is_empty().then(|| EMPTY_CART_TEXT.to_string());

    CartView {
        badge_count: total_count,
        lines,
        total_label: config.format_price(total_price),
        empty_message,
    }
}

impl fmt::Display for CartView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Корзина ({})", self.badge_count)?;

        if let Some(message) = &self.empty_message {
            return writeln!(f, "  {}", message);
        }

        for line in &self.lines {
            writeln!(f, "  {} [{}]", line.name, line.id)?;
            writeln!(
                f,
                "    {}  x{}  = {}",
                line.unit_price_label, line.quantity, line.line_total_label
            )?;
        }

        writeln!(f, "Итого: {}", self.total_label)
    }
}

/// One catalog card with its pending quantity input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntryView {
    pub id: ProductId,
    pub name: String,
    pub price_label: String,
    pub pending: u32,
}

impl fmt::Display for CatalogEntryView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<16} {:<60} {:>8}  [{}]",
            self.id.as_str(),
            self.name,
            self.price_label,
            self.pending
        )
    }
}

pub fn render_catalog(
    catalog: &ProductCatalog,
    pending: &PendingQuantities,
    config: &ConfigState,
) -> Vec<CatalogEntryView> {
    catalog
        .iter()
        .map(|p| CatalogEntryView {
            id: p.id.clone(),
            name: p.name.clone(),
            price_label: config.format_price(p.unit_price),
            pending: pending.get(p.id.as_str()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, name: &str, price: i64, qty: u32) -> LineItem {
        LineItem {
            id: ProductId::new(id),
            name: name.to_string(),
            unit_price: Money::from_minor(price),
            quantity: qty,
        }
    }

    #[test]
    fn test_render_lines_and_totals() {
        let items = vec![
            item("summer-honey", "Летний мед - 227г/8oz", 650, 2),
            item("beeswax", "Воск", 250, 1),
        ];
        let view = render(&items, 3, Money::from_minor(1550), &ConfigState::default());

        assert_eq!(view.badge_count, 3);
        assert_eq!(view.lines.len(), 2);
        assert_eq!(view.lines[0].unit_price_label, "650 ₽ за шт.");
        assert_eq!(view.lines[0].line_total_label, "1300 ₽");
        assert_eq!(view.total_label, "1550 ₽");
        assert_eq!(view.empty_message, None);
    }

    #[test]
    fn test_render_empty() {
        let view = render(&[], 0, Money::zero(), &ConfigState::default());

        assert!(view.is_empty());
        assert_eq!(view.empty_message.as_deref(), Some("Ваша корзина пуста"));
        assert_eq!(view.total_label, "0 ₽");
        assert!(view.to_string().contains("Ваша корзина пуста"));
    }

    #[test]
    fn test_display_lists_every_line() {
        let items = vec![item("beeswax", "Воск", 250, 4)];
        let text = render(&items, 4, Money::from_minor(1000), &ConfigState::default()).to_string();

        assert!(text.contains("Корзина (4)"));
        assert!(text.contains("250 ₽ за шт.  x4  = 1000 ₽"));
        assert!(text.contains("Итого: 1000 ₽"));
    }

    #[test]
    fn test_catalog_shows_pending() {
        let catalog = ProductCatalog::storefront();
        let mut pending = PendingQuantities::for_catalog(&catalog);
        pending.increase("beeswax");

        let entries = render_catalog(&catalog, &pending, &ConfigState::default());
        assert_eq!(entries.len(), 3);

        let beeswax = entries.iter().find(|e| e.id == "beeswax").unwrap();
        assert_eq!(beeswax.pending, 1);
        assert_eq!(beeswax.price_label, "250 ₽");
    }
}
