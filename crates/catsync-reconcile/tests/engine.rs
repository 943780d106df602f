//! Tests for snapshot reconciliation.

use std::collections::BTreeSet;

use proptest::prelude::*;

use catsync_model::{CatalogError, NormalizedProduct, PriceTier, ProductKey};
use catsync_reconcile::reconcile;

fn product(supplier: &str, item: &str, price: f64) -> NormalizedProduct {
    NormalizedProduct {
        supplier_id: supplier.to_string(),
        item_number: item.to_string(),
        owner_id: "1".to_string(),
        product_name: format!("{item} product"),
        description: "desc".to_string(),
        production_time: None,
        included_decoration: None,
        price_tiers: vec![PriceTier {
            minimum_quantity: 1,
            unit_price: price,
            price_code: None,
        }],
        setup_charge: None,
        setup_price_code: None,
        image_url: None,
        categories: vec!["General".to_string()],
        colors: None,
        sizes: None,
        active: true,
        quantity_available: None,
    }
}

#[test]
fn identical_record_produces_no_changes() {
    let old = vec![product("hit", "AB-100", 1.25)];
    let new = vec![product("hit", "AB-100", 1.25)];

    let changes = reconcile(&old, &new).unwrap();
    assert!(changes.is_empty());
}

#[test]
fn empty_old_snapshot_is_a_full_import() {
    let new = vec![
        product("hit", "AB-100", 1.25),
        product("hit", "AB-200", 2.50),
        product("acme", "Z-9", 0.99),
    ];

    let changes = reconcile(&[], &new).unwrap();
    assert_eq!(changes.adds.len(), 3);
    assert!(changes.updates.is_empty());
    assert!(changes.deletes.is_empty());
    let items: Vec<&str> = changes.adds.iter().map(|p| p.item_number.as_str()).collect();
    assert_eq!(items, vec!["AB-100", "AB-200", "Z-9"]);
}

#[test]
fn empty_new_snapshot_deletes_everything() {
    let old = vec![product("hit", "AB-100", 1.25), product("hit", "AB-200", 2.50)];

    let changes = reconcile(&old, &[]).unwrap();
    assert!(changes.adds.is_empty());
    assert!(changes.updates.is_empty());
    let items: Vec<&str> = changes.deletes.iter().map(|p| p.item_number.as_str()).collect();
    assert_eq!(items, vec!["AB-100", "AB-200"]);
}

#[test]
fn both_empty_is_a_no_op() {
    let changes = reconcile(&[], &[]).unwrap();
    assert!(changes.is_empty());
}

#[test]
fn changed_price_emits_the_new_version() {
    let old = vec![product("hit", "AB-100", 1.25)];
    let new = vec![product("hit", "AB-100", 1.35)];

    let changes = reconcile(&old, &new).unwrap();
    assert!(changes.adds.is_empty());
    assert!(changes.deletes.is_empty());
    assert_eq!(changes.updates.len(), 1);
    assert_eq!(changes.updates[0].price_tiers[0].unit_price, 1.35);
}

#[test]
fn recased_key_matches_across_snapshots() {
    // Same identity, different casing/spacing: matched, and the text change
    // itself surfaces as an update rather than a delete-plus-add.
    let old = vec![product("hit", "AB 100", 1.25)];
    let new = vec![product("HIT", "ab100", 1.25)];

    let changes = reconcile(&old, &new).unwrap();
    assert!(changes.adds.is_empty());
    assert!(changes.deletes.is_empty());
    assert_eq!(changes.updates.len(), 1);
    assert_eq!(changes.updates[0].item_number, "ab100");
}

#[test]
fn mixed_changes_keep_snapshot_order() {
    let old = vec![
        product("hit", "A", 1.0),
        product("hit", "B", 2.0),
        product("hit", "C", 3.0),
    ];
    let new = vec![
        product("hit", "D", 4.0),
        product("hit", "B", 2.5),
        product("hit", "E", 5.0),
    ];

    let changes = reconcile(&old, &new).unwrap();
    let adds: Vec<&str> = changes.adds.iter().map(|p| p.item_number.as_str()).collect();
    let deletes: Vec<&str> = changes.deletes.iter().map(|p| p.item_number.as_str()).collect();
    let updates: Vec<&str> = changes.updates.iter().map(|p| p.item_number.as_str()).collect();
    assert_eq!(adds, vec!["D", "E"]);
    assert_eq!(deletes, vec!["A", "C"]);
    assert_eq!(updates, vec!["B"]);
}

#[test]
fn duplicate_key_in_a_snapshot_is_fatal() {
    let new = vec![product("hit", "AB-100", 1.25), product("hit", "ab 100", 1.30)];

    let err = reconcile(&[], &new).unwrap_err();
    assert_eq!(
        err,
        CatalogError::DuplicateKey {
            key: ProductKey::new("hit", "ab 100"),
        }
    );
}

fn snapshot(keys: &BTreeSet<u32>, reprice: impl Fn(u32) -> f64) -> Vec<NormalizedProduct> {
    keys.iter()
        .map(|k| product("hit", &format!("ITEM-{k}"), reprice(*k)))
        .collect()
}

proptest! {
    #[test]
    fn reconcile_is_idempotent(keys in prop::collection::btree_set(0u32..500, 0..40)) {
        let s = snapshot(&keys, |k| f64::from(k) * 0.1 + 1.0);
        let changes = reconcile(&s, &s).unwrap();
        prop_assert!(changes.is_empty());
    }

    #[test]
    fn every_key_lands_in_exactly_one_bucket(
        old_keys in prop::collection::btree_set(0u32..60, 0..30),
        new_keys in prop::collection::btree_set(0u32..60, 0..30),
    ) {
        // Keys divisible by 3 change price between snapshots.
        let old = snapshot(&old_keys, |k| f64::from(k) + 1.0);
        let new = snapshot(&new_keys, |k| {
            if k % 3 == 0 { f64::from(k) + 2.0 } else { f64::from(k) + 1.0 }
        });

        let changes = reconcile(&old, &new).unwrap();

        let bucket: Vec<BTreeSet<String>> = [&changes.adds, &changes.updates, &changes.deletes]
            .iter()
            .map(|side| side.iter().map(|p| p.item_number.clone()).collect())
            .collect();
        let (adds, updates, deletes) = (&bucket[0], &bucket[1], &bucket[2]);

        let all_keys: BTreeSet<String> = old_keys
            .union(&new_keys)
            .map(|k| format!("ITEM-{k}"))
            .collect();
        for key_set in [adds, updates, deletes] {
            prop_assert!(key_set.is_subset(&all_keys));
        }
        prop_assert!(adds.is_disjoint(updates));
        prop_assert!(adds.is_disjoint(deletes));
        prop_assert!(updates.is_disjoint(deletes));

        for k in &all_keys {
            let touched =
                usize::from(adds.contains(k)) + usize::from(updates.contains(k)) + usize::from(deletes.contains(k));
            prop_assert!(touched <= 1, "key {k} appeared in {touched} buckets");
        }

        // Re-running on identical inputs yields the identical change set.
        prop_assert_eq!(changes.clone(), reconcile(&old, &new).unwrap());
    }
}
