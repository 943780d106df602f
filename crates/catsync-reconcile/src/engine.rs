//! Snapshot diff implementation.

use std::collections::BTreeMap;

use tracing::info;

use catsync_model::{CatalogError, ChangeSet, NormalizedProduct, Result};

/// Computes the minimal change set between a previous snapshot and a
/// current one, both keyed by `(supplier_id, item_number)`.
///
/// Keys match on their normalized form (lowercase, whitespace stripped), so
/// a re-cased item number between snapshots does not churn as a
/// delete-plus-add. Ordering is stable: `adds` and `updates` follow
/// new-snapshot order, `deletes` follows old-snapshot order, and identical
/// inputs always yield the identical change set.
///
/// Fails with [`CatalogError::DuplicateKey`] when either snapshot holds two
/// records with the same normalized key — an ambiguous identity cannot be
/// diffed safely.
pub fn reconcile(old: &[NormalizedProduct], new: &[NormalizedProduct]) -> Result<ChangeSet> {
    let old_index = index(old)?;
    let new_index = index(new)?;

    let mut adds = Vec::new();
    let mut updates = Vec::new();
    for record in new {
        match old_index.get(&normalized_key(record)) {
            None => adds.push(record.clone()),
            Some(previous) => {
                if *previous != record {
                    updates.push(record.clone());
                }
            }
        }
    }

    let deletes: Vec<NormalizedProduct> = old
        .iter()
        .filter(|record| !new_index.contains_key(&normalized_key(record)))
        .cloned()
        .collect();

    info!(
        adds = adds.len(),
        updates = updates.len(),
        deletes = deletes.len(),
        "reconciled catalog snapshots"
    );

    Ok(ChangeSet {
        adds,
        updates,
        deletes,
    })
}

fn normalized_key(record: &NormalizedProduct) -> (String, String) {
    record.key().normalized()
}

/// Indexes a snapshot by normalized key, rejecting collisions.
fn index(
    snapshot: &[NormalizedProduct],
) -> Result<BTreeMap<(String, String), &NormalizedProduct>> {
    let mut by_key = BTreeMap::new();
    for record in snapshot {
        if by_key.insert(normalized_key(record), record).is_some() {
            return Err(CatalogError::DuplicateKey { key: record.key() });
        }
    }
    Ok(by_key)
}
