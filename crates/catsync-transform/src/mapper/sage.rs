//! Sage-format supplier export mapping.
//!
//! Sage exports are periodic full-catalog dumps with six volume-pricing
//! slots (`Qty1`/`Prc1` .. `Qty6`/`Prc6`) and a positional price-code
//! string. They carry no inventory column, so mapped records come out
//! active and the inventory gate passes them through.

use catsync_model::{NormalizedProduct, PriceTier, RawRow, Result, PRICE_TIER_SLOTS};

use crate::mapper::required;
use crate::normalization::{
    included_decoration, normalize_item_number, parse_price, parse_quantity, production_time,
    split_price_code, truncate, TEXT_FIELD_LIMIT,
};

mod col {
    pub const SUPPLIER_ID: &str = "SupplierId";
    pub const USER_ID: &str = "UserId";
    pub const ITEM_NUM: &str = "ItemNum";
    pub const NAME: &str = "Name";
    pub const DESCRIPTION: &str = "Description";
    pub const PROD_TIME_LO: &str = "ProdTimeLo";
    pub const PROD_TIME_HI: &str = "ProdTimeHi";
    pub const PRICE_INCLUDE_CLR: &str = "PriceIncludeClr";
    pub const PRICE_INCLUDE_LOC: &str = "PriceIncludeLoc";
    pub const DECORATION_METHOD: &str = "DecorationMethod";
    pub const PIC_LINK: &str = "PicLink";
    pub const CAT1_NAME: &str = "Cat1Name";
    pub const CAT2_NAME: &str = "Cat2Name";
    pub const COLORS: &str = "Colors";
    pub const SIZES: &str = "Sizes";
    pub const SETUP_CHG: &str = "SetupChg";
    pub const SETUP_CHG_CODE: &str = "SetupChgCode";
    pub const PR_CODE: &str = "PrCode";
    pub const QTY: [&str; 6] = ["Qty1", "Qty2", "Qty3", "Qty4", "Qty5", "Qty6"];
    pub const PRC: [&str; 6] = ["Prc1", "Prc2", "Prc3", "Prc4", "Prc5", "Prc6"];
    pub const IMPRINT_SIZE_1: &str = "ImprintSize1";
    pub const IMPRINT_SIZE_2: &str = "ImprintSize2";
    pub const DIMENSIONS: [&str; 3] = ["Dimension1", "Dimension2", "Dimension3"];
    pub const PACKAGING: &str = "Packaging";
}

pub(crate) fn map(row: &RawRow) -> Result<NormalizedProduct> {
    let supplier_id = required(row, col::SUPPLIER_ID)?.to_string();
    let owner_id = required(row, col::USER_ID)?.to_string();
    let item_number = normalize_item_number(required(row, col::ITEM_NUM)?);
    let product_name = truncate(required(row, col::NAME)?, TEXT_FIELD_LIMIT);
    let description = description(row)?;

    let low = parse_quantity(col::PROD_TIME_LO, Some(required(row, col::PROD_TIME_LO)?))?;
    let high = parse_quantity(col::PROD_TIME_HI, row.get(col::PROD_TIME_HI))?;
    let production_time = production_time(low.map(i64::from), high.map(i64::from))
        .map(|phrase| truncate(&phrase, TEXT_FIELD_LIMIT));

    let decoration = included_decoration(
        required(row, col::PRICE_INCLUDE_CLR)?,
        required(row, col::PRICE_INCLUDE_LOC)?,
        required(row, col::DECORATION_METHOD)?,
    );

    Ok(NormalizedProduct {
        supplier_id,
        owner_id,
        item_number,
        product_name,
        description,
        production_time,
        included_decoration: Some(truncate(&decoration, TEXT_FIELD_LIMIT)),
        price_tiers: price_tiers(row)?,
        setup_charge: parse_price(col::SETUP_CHG, row.get(col::SETUP_CHG))?,
        setup_price_code: row
            .get_non_empty(col::SETUP_CHG_CODE)
            .map(|code| truncate(code, TEXT_FIELD_LIMIT)),
        image_url: Some(required(row, col::PIC_LINK)?.to_string()),
        categories: categories(row)?,
        colors: row
            .get_non_empty(col::COLORS)
            .map(|value| truncate(value, TEXT_FIELD_LIMIT)),
        sizes: row
            .get_non_empty(col::SIZES)
            .map(|value| truncate(value, TEXT_FIELD_LIMIT)),
        // Sage exports carry no inventory; the feed lists only purchasable
        // products, so everything maps in active.
        active: true,
        quantity_available: None,
    })
}

/// The mapped description plus a tab-keyed supplement block: maximum
/// imprint colors, imprint area, item size, and packaging, one line each,
/// after a blank line. Only lines the row has data for appear; an item
/// whose price includes no imprint gets no imprint-colors line.
fn description(row: &RawRow) -> Result<String> {
    let mut description = required(row, col::DESCRIPTION)?.to_string();

    let mut supplement = Vec::new();
    if let Some(colors) = row.get_non_empty(col::PRICE_INCLUDE_CLR) {
        if !colors.eq_ignore_ascii_case("blank") {
            supplement.push(format!(
                "Maximum Imprint Colors\t{} Maximum",
                title_case(colors)
            ));
        }
    }
    if let Some(size1) = row.get_non_empty(col::IMPRINT_SIZE_1) {
        match row.get_non_empty(col::IMPRINT_SIZE_2) {
            Some(size2) => supplement.push(format!("Imprint Area\t{size1}\" x {size2}\"")),
            None => supplement.push(format!("Imprint Area\t{size1}\"")),
        }
    }
    let dimensions: Vec<&str> = col::DIMENSIONS
        .iter()
        .filter_map(|column| row.get_non_empty(column))
        .filter(|value| !is_zero(value))
        .collect();
    if !dimensions.is_empty() {
        supplement.push(format!("Item Size\t{}\"", dimensions.join("\" x \"")));
    }
    if let Some(packaging) = row.get_non_empty(col::PACKAGING) {
        supplement.push(format!("Packaging\t{packaging}"));
    }

    if !supplement.is_empty() {
        description.push_str("\n\n");
        description.push_str(&supplement.join("\n"));
    }
    Ok(description)
}

/// Dimension columns are descriptive, so unparseable text passes through;
/// only a literal zero measurement is dropped.
fn is_zero(value: &str) -> bool {
    value.parse::<f64>().is_ok_and(|v| v == 0.0)
}

fn title_case(value: &str) -> String {
    value
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Builds the tier list from the six quantity/price slot pairs.
///
/// Codes attach positionally before sorting, so code `i` stays with slot
/// `i` even when the supplier listed the slots out of order. Slots missing
/// either side (or zero-sanitized away) are absent; duplicate minimum
/// quantities collapse to the first occurrence.
fn price_tiers(row: &RawRow) -> Result<Vec<PriceTier>> {
    let codes = split_price_code(row.get(col::PR_CODE).unwrap_or(""), PRICE_TIER_SLOTS);

    let mut tiers = Vec::with_capacity(PRICE_TIER_SLOTS);
    for slot in 0..PRICE_TIER_SLOTS {
        let quantity = parse_quantity(col::QTY[slot], row.get(col::QTY[slot]))?;
        let price = parse_price(col::PRC[slot], row.get(col::PRC[slot]))?;
        if let (Some(minimum_quantity), Some(unit_price)) = (quantity, price) {
            tiers.push(PriceTier {
                minimum_quantity,
                unit_price,
                price_code: codes[slot],
            });
        }
    }
    tiers.sort_by_key(|tier| tier.minimum_quantity);
    tiers.dedup_by_key(|tier| tier.minimum_quantity);
    Ok(tiers)
}

fn categories(row: &RawRow) -> Result<Vec<String>> {
    let cat1 = required(row, col::CAT1_NAME)?;
    let mut categories = vec![truncate(cat1, TEXT_FIELD_LIMIT)];
    if let Some(cat2) = row.get_non_empty(col::CAT2_NAME) {
        if cat2 != cat1 {
            categories.push(truncate(cat2, TEXT_FIELD_LIMIT));
        }
    }
    Ok(categories)
}
