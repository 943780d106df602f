//! Field-level normalization rules.
//!
//! Each rule is a pure function from raw feed values to one normalized
//! value; none reads or writes shared state:
//! - **production_time**: low/high day counts into the two-sided phrase
//! - **decoration**: included-decoration merge with the "Blank" sentinel
//! - **price_code**: positional split of the supplier price-code string
//! - **item_number**: canonical item-number form
//! - **numeric**: price/quantity parsing with the zero-sanitizer policy
//! - **text**: character-limit clamping for free-text fields

pub mod decoration;
pub mod item_number;
pub mod numeric;
pub mod price_code;
pub mod production_time;
pub mod text;

pub use decoration::{included_decoration, DECORATION_SEPARATOR, NO_IMPRINT};
pub use item_number::normalize_item_number;
pub use numeric::{parse_inventory, parse_price, parse_quantity};
pub use price_code::split_price_code;
pub use production_time::production_time;
pub use text::{truncate, TEXT_FIELD_LIMIT};
