//! The minimal change set between two catalog snapshots.

use serde::{Deserialize, Serialize};

use crate::product::NormalizedProduct;

/// Result of reconciling a new snapshot against a previous one: three
/// disjoint sequences keyed by product identity.
///
/// `adds` and `updates` hold new-snapshot records in new-snapshot order;
/// `deletes` holds old-snapshot records in old-snapshot order. Records that
/// are identical in both snapshots appear in none of the three — a no-op
/// sync produces an empty change set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChangeSet {
    pub adds: Vec<NormalizedProduct>,
    pub updates: Vec<NormalizedProduct>,
    pub deletes: Vec<NormalizedProduct>,
}

impl ChangeSet {
    pub fn is_empty(&self) -> bool {
        self.adds.is_empty() && self.updates.is_empty() && self.deletes.is_empty()
    }

    /// Total number of records the downstream store must touch.
    pub fn total(&self) -> usize {
        self.adds.len() + self.updates.len() + self.deletes.len()
    }
}
