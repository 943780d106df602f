//! Raw feed rows as decoded by the calling collaborator.

use serde::{Deserialize, Serialize};

/// One decoded row of a supplier feed: an insertion-ordered mapping of source
/// column name to raw string value.
///
/// The engine never mutates a `RawRow`; the collaborator that decoded the
/// feed file owns it. Column lookup is case-sensitive and returns the first
/// occurrence, matching the header order of the source export.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRow {
    columns: Vec<(String, String)>,
}

impl RawRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a column. Feed files occasionally repeat headers; later
    /// duplicates are kept but shadowed by the first for lookup.
    pub fn push(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.columns.push((column.into(), value.into()));
    }

    /// Returns the raw value of `column`, or `None` if the column is absent.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.columns
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
    }

    /// Returns the trimmed value of `column`, treating absent columns and
    /// whitespace-only values alike as `None`.
    pub fn get_non_empty(&self, column: &str) -> Option<&str> {
        self.get(column)
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Iterates `(column, value)` pairs in source order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.columns
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

impl<C: Into<String>, V: Into<String>> FromIterator<(C, V)> for RawRow {
    fn from_iter<I: IntoIterator<Item = (C, V)>>(iter: I) -> Self {
        Self {
            columns: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}
