//! Supported feed types.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// The shape/convention of an incoming supplier or distributor export.
///
/// A closed set: each variant owns one mapping table in the transform crate.
/// Adding a feed type means adding a variant, its mapping module, and a
/// dispatch arm — nothing else changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedType {
    /// Periodic Sage-format supplier catalog export.
    Sage,
    /// Replink daily inventory feed (pipe-delimited at the source).
    Replink,
}

impl FeedType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sage => "sage",
            Self::Replink => "replink",
        }
    }
}

impl FromStr for FeedType {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sage" => Ok(Self::Sage),
            "replink" => Ok(Self::Replink),
            other => Err(CatalogError::UnknownFeedType(other.to_string())),
        }
    }
}
