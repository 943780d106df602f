//! Error types for catalog transformation and reconciliation.

use thiserror::Error;

use crate::key::ProductKey;

/// Errors surfaced by the catalog engine.
///
/// `UnknownFeedType` is fatal to a whole batch (no mapping table can be
/// chosen). `RequiredFieldMissing` and `InvalidNumber` are scoped to a single
/// row: the pipeline records them and continues with the rest of the batch.
/// `DuplicateKey` is fatal to a reconciliation call, since an ambiguous
/// identity cannot be diffed safely.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// No mapping table exists for the requested feed type.
    #[error("unknown feed type '{0}'")]
    UnknownFeedType(String),
    /// A column marked required in the feed's mapping table is absent or empty.
    #[error("required field missing: {field}")]
    RequiredFieldMissing { field: &'static str },
    /// A price or quantity column holds text that does not parse as a number.
    #[error("invalid number in {field}: '{value}'")]
    InvalidNumber { field: &'static str, value: String },
    /// Two records in the same snapshot share an identity key.
    #[error("duplicate product key {key}")]
    DuplicateKey { key: ProductKey },
}

pub type Result<T> = std::result::Result<T, CatalogError>;
