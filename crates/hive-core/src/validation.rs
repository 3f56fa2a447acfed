//! # Validation Module
//!
//! Input validation for cart mutations and for line items restored from
//! storage.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Points                                  │
//! │                                                                         │
//! │  add_item(id, name, price, qty)                                        │
//! │  ├── validate_product_id / validate_product_name                       │
//! │  ├── validate_unit_price                                               │
//! │  └── validate_quantity         → InvalidQuantity, no state change      │
//! │                                                                         │
//! │  restore from storage                                                  │
//! │  └── validate_line_items       → malformed blob, fall back to empty    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashSet;

use crate::error::{CartError, CartResult, ValidationError};
use crate::money::Money;
use crate::types::LineItem;
use crate::{MAX_PRODUCT_NAME_LEN, MAX_UNIT_PRICE};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product id: must not be blank.
pub fn validate_product_id(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    Ok(())
}

/// Validates a product display name.
///
/// ## Rules
/// - Must not be blank
/// - At most `MAX_PRODUCT_NAME_LEN` characters
///
/// ## Example
/// ```rust
/// use hive_core::validation::validate_product_name;
///
/// assert!(validate_product_name("Крем-мед - 227г/8oz").is_ok());
/// assert!(validate_product_name("   ").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_PRODUCT_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_PRODUCT_NAME_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a requested quantity for `add_item`.
///
/// ## User Workflow
/// ```text
/// Shopper leaves the quantity input at 0 and clicks "add"
///       │
///       ▼
/// validate_quantity(0) ← THIS FUNCTION
///       │
///       ├── qty <= 0? → InvalidQuantity (caller shows a warning)
///       │
///       └── OK → merge into cart
/// ```
pub fn validate_quantity(qty: i64) -> CartResult<()> {
    if qty <= 0 {
        return Err(CartError::InvalidQuantity { requested: qty });
    }

    Ok(())
}

/// Validates a unit price in minor units: `1..=MAX_UNIT_PRICE`.
pub fn validate_unit_price(price: i64) -> CartResult<()> {
    if price <= 0 || price > MAX_UNIT_PRICE {
        return Err(CartError::InvalidPrice { price });
    }

    Ok(())
}

// =============================================================================
// Collection Validators
// =============================================================================

/// Validates a sequence of line items read back from storage.
///
/// Serde already guarantees non-negative quantities; this adds the rules the
/// type system cannot express.
///
/// ## Rules
/// - Every id and name is non-blank
/// - Every quantity is at least 1
/// - Every price is positive and at most `MAX_UNIT_PRICE`
/// - No id appears twice
/// - The cart total fits in `Money`
pub fn validate_line_items(items: &[LineItem]) -> ValidationResult<()> {
    let mut seen = HashSet::with_capacity(items.len());
    let mut total = Money::zero();

    for item in items {
        validate_product_id(item.id.as_str())?;
        validate_product_name(&item.name)?;

        if item.quantity == 0 {
            return Err(ValidationError::MustBePositive {
                field: "quantity".to_string(),
            });
        }

        if !item.unit_price.is_positive() {
            return Err(ValidationError::MustBePositive {
                field: "price".to_string(),
            });
        }

        if item.unit_price.minor() > MAX_UNIT_PRICE {
            return Err(ValidationError::TooLarge {
                field: "price".to_string(),
                max: MAX_UNIT_PRICE,
            });
        }

        if !seen.insert(item.id.as_str()) {
            return Err(ValidationError::Duplicate {
                field: "id".to_string(),
                value: item.id.to_string(),
            });
        }

        total = item
            .unit_price
            .checked_multiply_quantity(item.quantity)
            .and_then(|line| total.checked_add(line))
            .ok_or_else(|| ValidationError::TooLarge {
                field: "total".to_string(),
                max: i64::MAX,
            })?;
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Money, ProductId};

    fn item(id: &str, price: i64, quantity: u32) -> LineItem {
        LineItem {
            id: ProductId::new(id),
            name: format!("Product {}", id),
            unit_price: Money::from_minor(price),
            quantity,
        }
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(1000).is_ok());

        assert_eq!(
            validate_quantity(0),
            Err(CartError::InvalidQuantity { requested: 0 })
        );
        assert!(validate_quantity(-3).is_err());
    }

    #[test]
    fn test_validate_unit_price() {
        assert!(validate_unit_price(250).is_ok());
        assert!(validate_unit_price(0).is_err());
        assert!(validate_unit_price(-650).is_err());
        assert!(validate_unit_price(MAX_UNIT_PRICE).is_ok());
        assert_eq!(
            validate_unit_price(MAX_UNIT_PRICE + 1),
            Err(CartError::InvalidPrice {
                price: MAX_UNIT_PRICE + 1
            })
        );
    }

    #[test]
    fn test_line_items_reject_oversized_price() {
        let items = vec![item("a", i64::MAX, 2)];
        assert!(matches!(
            validate_line_items(&items),
            Err(ValidationError::TooLarge { ref field, .. }) if field == "price"
        ));
    }

    #[test]
    fn test_line_items_reject_overflowing_total() {
        let items: Vec<LineItem> = (0..3)
            .map(|i| item(&format!("p{}", i), MAX_UNIT_PRICE, u32::MAX))
            .collect();

        assert!(matches!(
            validate_line_items(&items),
            Err(ValidationError::TooLarge { ref field, .. }) if field == "total"
        ));
        assert!(validate_line_items(&items[..2]).is_ok());
    }

    #[test]
    fn test_validate_product_id() {
        assert!(validate_product_id("beeswax").is_ok());
        assert!(validate_product_id("").is_err());
        assert!(validate_product_id("  ").is_err());
    }

    #[test]
    fn test_validate_product_name_length() {
        assert!(validate_product_name(&"м".repeat(MAX_PRODUCT_NAME_LEN)).is_ok());
        assert!(validate_product_name(&"м".repeat(MAX_PRODUCT_NAME_LEN + 1)).is_err());
    }

    #[test]
    fn test_validate_line_items() {
        assert!(validate_line_items(&[]).is_ok());
        assert!(validate_line_items(&[item("a", 650, 1), item("b", 250, 3)]).is_ok());

        assert!(validate_line_items(&[item("a", 650, 0)]).is_err());
        assert!(validate_line_items(&[item("a", 0, 1)]).is_err());
        assert_eq!(
            validate_line_items(&[item("a", 650, 1), item("a", 650, 2)]),
            Err(ValidationError::Duplicate {
                field: "id".to_string(),
                value: "a".to_string(),
            })
        );
    }
}
