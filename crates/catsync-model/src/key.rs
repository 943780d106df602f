//! Product identity keys.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The `(supplier_id, item_number)` pair identifying a product across
/// catalog snapshots.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProductKey {
    pub supplier_id: String,
    pub item_number: String,
}

impl ProductKey {
    pub fn new(supplier_id: impl Into<String>, item_number: impl Into<String>) -> Self {
        Self {
            supplier_id: supplier_id.into(),
            item_number: item_number.into(),
        }
    }

    /// The form used for key *matching*: lowercase with all whitespace
    /// removed. Supplier exports are inconsistent about item-number casing
    /// and spacing between snapshots ("AB 100" vs "ab100"), so equality for
    /// reconciliation works on this form while the record keeps the
    /// original text.
    pub fn normalized(&self) -> (String, String) {
        (squash(&self.supplier_id), squash(&self.item_number))
    }
}

fn squash(value: &str) -> String {
    value
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

impl fmt::Display for ProductKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.supplier_id, self.item_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_ignores_case_and_spacing() {
        let a = ProductKey::new("hit", "AB 100");
        let b = ProductKey::new("HIT", "ab100");
        assert_eq!(a.normalized(), b.normalized());
        assert_ne!(a, b);
    }
}
