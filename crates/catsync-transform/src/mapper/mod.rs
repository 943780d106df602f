//! Per-feed-type schema mapping.
//!
//! Each feed type owns one module holding a fixed column table and its
//! feed-specific derivations. Dispatch is a pure match over the closed
//! [`FeedType`] enum: adding a feed type means adding a module and an arm
//! here — the normalization rules and the pipeline are untouched.

use serde::{Deserialize, Serialize};

use catsync_model::{CatalogError, FeedType, NormalizedProduct, RawRow, Result};

pub mod replink;
pub mod sage;

pub use replink::PriceSource;

/// Per-call mapping options, injected by the caller and never mutated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapOptions {
    /// Which Replink price column feeds the pricing tier.
    pub replink_price: PriceSource,
}

/// Maps one decoded feed row to a normalized product record with default
/// options.
///
/// Fails with [`CatalogError::RequiredFieldMissing`] when a column the
/// feed's table marks required is absent or empty, and with
/// [`CatalogError::InvalidNumber`] when a price or quantity column holds
/// non-numeric text. Both are row-scoped: the pipeline skips the row and
/// continues the batch.
pub fn map_row(feed: FeedType, row: &RawRow) -> Result<NormalizedProduct> {
    map_row_with_options(feed, row, &MapOptions::default())
}

/// As [`map_row`], under explicit mapping options.
pub fn map_row_with_options(
    feed: FeedType,
    row: &RawRow,
    options: &MapOptions,
) -> Result<NormalizedProduct> {
    match feed {
        FeedType::Sage => sage::map(row),
        FeedType::Replink => replink::map(row, options),
    }
}

/// Fetches a required column, trimmed.
pub(crate) fn required<'a>(row: &'a RawRow, column: &'static str) -> Result<&'a str> {
    row.get_non_empty(column)
        .ok_or(CatalogError::RequiredFieldMissing { field: column })
}
