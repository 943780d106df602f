//! Inventory-driven enable/disable gate.

use serde::{Deserialize, Serialize};

use catsync_model::NormalizedProduct;

/// Policy for converting on-hand quantity into the `active` flag.
///
/// `inventory_overrides_flag` resolves an open policy point: when a feed
/// carries both an explicit status flag and inventory data, inventory wins
/// by default. Setting it to `false` makes the explicit flag authoritative
/// and ignores quantities entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatePolicy {
    /// Products with quantity strictly above this are enabled.
    pub threshold: i64,
    /// Whether inventory data overrides the feed's explicit status flag.
    pub inventory_overrides_flag: bool,
}

impl Default for GatePolicy {
    fn default() -> Self {
        Self {
            threshold: 0,
            inventory_overrides_flag: true,
        }
    }
}

impl GatePolicy {
    /// Applies the gate to one record. Records without inventory data pass
    /// through with `active` untouched.
    pub fn apply(&self, mut product: NormalizedProduct) -> NormalizedProduct {
        if self.inventory_overrides_flag {
            if let Some(quantity) = product.quantity_available {
                product.active = quantity > self.threshold;
            }
        }
        product
    }

    /// Applies the gate across a collection, preserving input order.
    pub fn apply_all(&self, products: Vec<NormalizedProduct>) -> Vec<NormalizedProduct> {
        products
            .into_iter()
            .map(|product| self.apply(product))
            .collect()
    }
}

/// Splits a gated collection into `(enabled, disabled)`, preserving the
/// original relative order within each side. The two lengths are the
/// "N enabled / M disabled" summary reported for a batch.
pub fn partition(products: &[NormalizedProduct]) -> (Vec<NormalizedProduct>, Vec<NormalizedProduct>) {
    products
        .iter()
        .cloned()
        .partition(|product| product.active)
}
