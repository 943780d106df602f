//! Batch transformation pipeline.
//!
//! Orchestrates the schema mapper and inventory gate over a full row set,
//! and optionally hands the result to the reconciliation engine. A
//! malformed row — or a row repeating an earlier row's identity key — is
//! skipped and recorded, never fatal to the batch; only a feed type that
//! cannot be resolved (or an ambiguous identity during reconciliation)
//! aborts a call.

use std::collections::BTreeSet;

use tracing::{info, warn};

use catsync_model::{CatalogError, ChangeSet, FeedType, NormalizedProduct, RawRow, Result};
use catsync_reconcile::reconcile;
use catsync_transform::{map_row, partition, GatePolicy};

/// One skipped input row and why it was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowFailure {
    /// Zero-based index of the row within the submitted batch.
    pub row_index: usize,
    pub reason: CatalogError,
}

/// Everything a transformation run produces.
#[derive(Debug, Clone, Default)]
pub struct TransformOutcome {
    /// All successfully mapped records, gated, in row order.
    pub products: Vec<NormalizedProduct>,
    /// Active subset of `products`, relative order preserved.
    pub enabled: Vec<NormalizedProduct>,
    /// Inactive subset of `products`, relative order preserved.
    pub disabled: Vec<NormalizedProduct>,
    /// Rows that failed mapping, with reasons, in row order.
    pub skipped: Vec<RowFailure>,
}

/// Transforms a batch of decoded feed rows with the default gate policy.
pub fn transform(feed: FeedType, rows: &[RawRow]) -> TransformOutcome {
    transform_with_policy(feed, rows, &GatePolicy::default())
}

/// Transforms a batch of decoded feed rows under an explicit gate policy.
pub fn transform_with_policy(
    feed: FeedType,
    rows: &[RawRow],
    policy: &GatePolicy,
) -> TransformOutcome {
    info!(feed = feed.as_str(), rows = rows.len(), "transforming batch");

    let mut products = Vec::with_capacity(rows.len());
    let mut skipped = Vec::new();
    let mut seen_keys = BTreeSet::new();
    for (row_index, row) in rows.iter().enumerate() {
        match map_row(feed, row) {
            Ok(product) => {
                // Identity keys must be unique within the batch; a repeated
                // key is a row failure for the later row, first wins.
                let key = product.key();
                if seen_keys.insert(key.normalized()) {
                    products.push(policy.apply(product));
                } else {
                    warn!(row_index, %key, "skipping row with repeated key");
                    skipped.push(RowFailure {
                        row_index,
                        reason: CatalogError::DuplicateKey { key },
                    });
                }
            }
            Err(reason) => {
                warn!(row_index, %reason, "skipping row");
                skipped.push(RowFailure { row_index, reason });
            }
        }
    }

    let (enabled, disabled) = partition(&products);
    info!(
        products = products.len(),
        enabled = enabled.len(),
        disabled = disabled.len(),
        skipped = skipped.len(),
        "batch transformed"
    );

    TransformOutcome {
        products,
        enabled,
        disabled,
        skipped,
    }
}

/// String-keyed entry point for callers that select feeds by code (HTTP
/// form fields, CLI flags). Fails with [`CatalogError::UnknownFeedType`]
/// before touching any row.
pub fn transform_named(feed: &str, rows: &[RawRow]) -> Result<TransformOutcome> {
    let feed: FeedType = feed.parse()?;
    Ok(transform(feed, rows))
}

/// Transforms a batch and diffs it against a previous normalized snapshot.
pub fn transform_and_reconcile(
    feed: FeedType,
    rows: &[RawRow],
    old: &[NormalizedProduct],
) -> Result<(TransformOutcome, ChangeSet)> {
    transform_and_reconcile_with_policy(feed, rows, old, &GatePolicy::default())
}

/// As [`transform_and_reconcile`], under an explicit gate policy.
pub fn transform_and_reconcile_with_policy(
    feed: FeedType,
    rows: &[RawRow],
    old: &[NormalizedProduct],
    policy: &GatePolicy,
) -> Result<(TransformOutcome, ChangeSet)> {
    let outcome = transform_with_policy(feed, rows, policy);
    let changes = reconcile(old, &outcome.products)?;
    Ok((outcome, changes))
}
