//! Replink daily inventory feed mapping.
//!
//! The Replink feed is a daily per-item dump: single distributor price, an
//! on-hand quantity, an item status flag, and up to eighteen feature lines
//! that fold into the description. Inventory drives the enable/disable
//! decision downstream in the gate.

use serde::{Deserialize, Serialize};

use catsync_model::{NormalizedProduct, PriceTier, RawRow, Result};

use crate::mapper::{required, MapOptions};
use crate::normalization::{
    normalize_item_number, parse_inventory, parse_price, truncate, TEXT_FIELD_LIMIT,
};

/// Number of `Feature1..FeatureN` columns in the feed.
const FEATURE_COLUMNS: usize = 18;

/// Status value marking a purchasable item.
const STATUS_ACTIVE: &str = "Active";

/// Which of the feed's five price columns feeds the pricing tier.
///
/// Distributors resell at different levels, so the right price depends on
/// the importing account, not the feed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceSource {
    Msrp,
    Map,
    User,
    Jobber,
    #[default]
    Distributor,
}

impl PriceSource {
    pub fn column(self) -> &'static str {
        match self {
            Self::Msrp => "MSRP",
            Self::Map => "MAP",
            Self::User => "UserPrice",
            Self::Jobber => "JobberPrice",
            Self::Distributor => col::DISTRIBUTOR_PRICE,
        }
    }
}

mod col {
    pub const BRAND_NAME: &str = "BrandName";
    pub const USER_ACCOUNT_ID: &str = "UserAccountId";
    pub const ITEM_NUMBER: &str = "ItemNumber";
    pub const SHORT_NAME: &str = "ShortName";
    pub const SALES_COPY: &str = "SalesCopy";
    pub const IMAGE_URL: &str = "ImageURL";
    pub const CATEGORY_ID: &str = "RepLinkCategoryID";
    pub const QTY_AVAILABLE: &str = "QtyAvailable";
    pub const DISTRIBUTOR_PRICE: &str = "DistributorPrice";
    pub const PRICE_CODE: &str = "PriceCode";
    pub const ITEM_STATUS: &str = "ItemStatus";
    pub const COLORS: &str = "Colors";
    pub const SIZES: &str = "Sizes";
}

pub(crate) fn map(row: &RawRow, options: &MapOptions) -> Result<NormalizedProduct> {
    let quantity_available = parse_inventory(col::QTY_AVAILABLE, row.get(col::QTY_AVAILABLE))?;

    // Explicit flag from the feed; the inventory gate decides whether
    // on-hand quantity overrides it.
    let active = match row.get_non_empty(col::ITEM_STATUS) {
        Some(status) => status.eq_ignore_ascii_case(STATUS_ACTIVE),
        None => true,
    };

    Ok(NormalizedProduct {
        supplier_id: required(row, col::BRAND_NAME)?.to_string(),
        owner_id: required(row, col::USER_ACCOUNT_ID)?.to_string(),
        item_number: normalize_item_number(required(row, col::ITEM_NUMBER)?),
        product_name: truncate(required(row, col::SHORT_NAME)?, TEXT_FIELD_LIMIT),
        description: description(row)?,
        production_time: None,
        included_decoration: None,
        price_tiers: price_tiers(row, options.replink_price)?,
        setup_charge: None,
        setup_price_code: None,
        image_url: Some(required(row, col::IMAGE_URL)?.to_string()),
        categories: vec![truncate(required(row, col::CATEGORY_ID)?, TEXT_FIELD_LIMIT)],
        colors: row
            .get_non_empty(col::COLORS)
            .map(|value| truncate(value, TEXT_FIELD_LIMIT)),
        sizes: row
            .get_non_empty(col::SIZES)
            .map(|value| truncate(value, TEXT_FIELD_LIMIT)),
        active,
        quantity_available,
    })
}

/// Sales copy plus the non-empty feature lines as a trailing bullet list.
fn description(row: &RawRow) -> Result<String> {
    let mut description = required(row, col::SALES_COPY)?.to_string();

    let features: Vec<String> = (1..=FEATURE_COLUMNS)
        .filter_map(|i| {
            let column = format!("Feature{i}");
            row.get_non_empty(&column).map(|text| format!("- {text}"))
        })
        .collect();

    if !features.is_empty() {
        description.push_str("\n\n");
        description.push_str(&features.join("\n"));
    }
    Ok(description)
}

/// Replink carries a single price per source column: one tier at quantity 1
/// when the selected price survives zero-sanitization.
fn price_tiers(row: &RawRow, source: PriceSource) -> Result<Vec<PriceTier>> {
    let column = source.column();
    let price = parse_price(column, row.get(column))?;
    let price_code = row
        .get_non_empty(col::PRICE_CODE)
        .and_then(|code| code.chars().next());

    Ok(price
        .map(|unit_price| PriceTier {
            minimum_quantity: 1,
            unit_price,
            price_code,
        })
        .into_iter()
        .collect())
}
