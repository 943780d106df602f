//! Catalog snapshot reconciliation.
//!
//! Diffs two normalized snapshots into the minimal set of additions,
//! updates, and removals the downstream catalog store must apply. The diff
//! is keyed by product identity, never by position, so reordered exports
//! produce no spurious changes.

pub mod engine;

pub use engine::reconcile;
