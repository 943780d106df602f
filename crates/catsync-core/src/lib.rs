//! Catalog transformation and reconciliation engine.
//!
//! The engine turns heterogeneous supplier feed rows into normalized
//! product records in the fixed target schema, classifies them through the
//! inventory gate, and can diff a new snapshot against a previous one into
//! the minimal change set for the downstream catalog store.
//!
//! Collaborators own all file decoding, serialization, and transport; the
//! engine works purely on in-memory rows and records. Three call contracts
//! cover every caller:
//!
//! - [`transform`] (and [`transform_named`] for string feed codes)
//! - [`reconcile`]
//! - [`transform_and_reconcile`]

pub mod pipeline;

pub use catsync_model::{
    CatalogError, ChangeSet, FeedType, NormalizedProduct, PriceTier, ProductKey, RawRow, Result,
};
pub use catsync_reconcile::reconcile;
pub use catsync_transform::GatePolicy;
pub use pipeline::{
    transform, transform_and_reconcile, transform_and_reconcile_with_policy, transform_named,
    transform_with_policy, RowFailure, TransformOutcome,
};
