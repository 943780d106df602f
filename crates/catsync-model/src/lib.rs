pub mod changeset;
pub mod error;
pub mod feed;
pub mod key;
pub mod product;
pub mod row;

pub use changeset::ChangeSet;
pub use error::{CatalogError, Result};
pub use feed::FeedType;
pub use key::ProductKey;
pub use product::{NormalizedProduct, PriceTier, PRICE_TIER_SLOTS};
pub use row::RawRow;

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_product() -> NormalizedProduct {
        NormalizedProduct {
            supplier_id: "hit".to_string(),
            item_number: "3020-10 x 8".to_string(),
            owner_id: "42".to_string(),
            product_name: "Stadium Cup".to_string(),
            description: "22 oz. stadium cup.".to_string(),
            production_time: Some("5 to 10 Working Days".to_string()),
            included_decoration: Some("One Color|One Location|Screen Print".to_string()),
            price_tiers: vec![
                PriceTier {
                    minimum_quantity: 100,
                    unit_price: 1.25,
                    price_code: Some('C'),
                },
                PriceTier {
                    minimum_quantity: 250,
                    unit_price: 1.10,
                    price_code: Some('C'),
                },
            ],
            setup_charge: Some(55.0),
            setup_price_code: Some("G".to_string()),
            image_url: Some("https://cdn.example.com/3020.jpg".to_string()),
            categories: vec!["Drinkware::Cups".to_string()],
            colors: Some("Red, White, Blue".to_string()),
            sizes: None,
            active: true,
            quantity_available: None,
        }
    }

    #[test]
    fn product_serializes_round_trip() {
        let product = sample_product();
        let json = serde_json::to_string(&product).expect("serialize product");
        let round: NormalizedProduct = serde_json::from_str(&json).expect("deserialize product");
        assert_eq!(round, product);
    }

    #[test]
    fn key_reflects_identity_fields() {
        let product = sample_product();
        assert_eq!(product.key(), ProductKey::new("hit", "3020-10 x 8"));
    }

    #[test]
    fn empty_changeset_reports_empty() {
        let set = ChangeSet::default();
        assert!(set.is_empty());
        assert_eq!(set.total(), 0);
    }
}
