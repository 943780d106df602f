//! The normalized product record produced by the schema mapper.

use serde::{Deserialize, Serialize};

use crate::key::ProductKey;

/// Maximum number of volume-pricing slots in the target schema.
pub const PRICE_TIER_SLOTS: usize = 6;

/// One volume-pricing tier: buy at least `minimum_quantity`, pay
/// `unit_price` each. The optional single-character `price_code` carries the
/// supplier's discount code for the tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceTier {
    pub minimum_quantity: u32,
    pub unit_price: f64,
    pub price_code: Option<char>,
}

/// A supplier product in the fixed target schema.
///
/// Instances are immutable once the mapper has built them; the inventory
/// gate returns adjusted copies rather than mutating in place. A zero price
/// or quantity never appears in the record — the target store reads 0/blank
/// as "this tier does not exist", so zero-valued slots are omitted entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedProduct {
    pub supplier_id: String,
    pub item_number: String,
    /// Account that owns the imported product in the downstream store.
    pub owner_id: String,
    pub product_name: String,
    pub description: String,
    /// Two-sided phrase, e.g. "5 to 10 Working Days".
    pub production_time: Option<String>,
    /// What decoration the listed prices already include.
    pub included_decoration: Option<String>,
    /// Sorted strictly ascending by `minimum_quantity`; at most
    /// [`PRICE_TIER_SLOTS`] entries.
    pub price_tiers: Vec<PriceTier>,
    pub setup_charge: Option<f64>,
    pub setup_price_code: Option<String>,
    pub image_url: Option<String>,
    /// Category path segments; "::" inside a segment denotes hierarchy.
    pub categories: Vec<String>,
    pub colors: Option<String>,
    pub sizes: Option<String>,
    /// Whether the product is live in the downstream catalog.
    pub active: bool,
    /// On-hand units reported by the feed, when the feed carries inventory.
    pub quantity_available: Option<i64>,
}

impl NormalizedProduct {
    pub fn key(&self) -> ProductKey {
        ProductKey::new(self.supplier_id.clone(), self.item_number.clone())
    }
}
