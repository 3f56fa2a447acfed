//! # Pending Quantities
//!
//! The quantity inputs next to each catalog entry. A shopper dials a number
//! with the − / + buttons and then commits it with "add to cart"; the input
//! resets to 0 afterwards. None of this is cart state until committed.

use std::collections::HashMap;

use hive_core::{ProductCatalog, ProductId};

/// Per-product quantity inputs, floored at 0.
#[derive(Debug, Clone, Default)]
pub struct PendingQuantities {
    inputs: HashMap<ProductId, u32>,
}

impl PendingQuantities {
    /// One input per catalog product, all at 0.
    pub fn for_catalog(catalog: &ProductCatalog) -> Self {
        PendingQuantities {
            inputs: catalog.iter().map(|p| (p.id.clone(), 0)).collect(),
        }
    }

    /// Current value; 0 for unknown products.
    pub fn get(&self, id: &str) -> u32 {
        self.inputs.get(id).copied().unwrap_or(0)
    }

    /// Adds one. `None` if the product has no input.
    pub fn increase(&mut self, id: &str) -> Option<u32> {
        self.adjust(id, 1)
    }

    /// Subtracts one, never going below 0. `None` if the product has no input.
    pub fn decrease(&mut self, id: &str) -> Option<u32> {
        self.adjust(id, -1)
    }

    /// Sets the input directly (typed value).
    pub fn set(&mut self, id: &str, value: u32) -> Option<u32> {
        let slot = self.slot(id)?;
        *slot = value;
        Some(value)
    }

    /// Returns the value and resets the input to 0.
    pub fn take(&mut self, id: &str) -> u32 {
        self.slot(id).map(std::mem::take).unwrap_or(0)
    }

    fn adjust(&mut self, id: &str, delta: i64) -> Option<u32> {
        let slot = self.slot(id)?;
        let next = (i64::from(*slot) + delta).clamp(0, i64::from(u32::MAX));
        *slot = next as u32;
        Some(*slot)
    }

    fn slot(&mut self, id: &str) -> Option<&mut u32> {
        self.inputs.get_mut(id)
    }
}
