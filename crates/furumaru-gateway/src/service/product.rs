use super::{unique, unix, ReviewRates};
use crate::types;
use furumaru_core::domain::entities as entity;
use furumaru_core::Prefecture;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::collections::HashMap;
use std::ops::Deref;

impl From<entity::ProductStatus> for types::ProductStatus {
    fn from(status: entity::ProductStatus) -> Self {
        match status {
            entity::ProductStatus::Presale => Self::Presale,
            entity::ProductStatus::ForSale => Self::ForSale,
            entity::ProductStatus::OutOfSale => Self::OutOfSale,
            entity::ProductStatus::Private | entity::ProductStatus::Archived => Self::Unknown,
        }
    }
}

impl From<entity::StorageMethodType> for types::StorageMethodType {
    fn from(storage: entity::StorageMethodType) -> Self {
        match storage {
            entity::StorageMethodType::Normal => Self::Normal,
            entity::StorageMethodType::CoolDark => Self::CoolDark,
            entity::StorageMethodType::Refrigerated => Self::Refrigerated,
            entity::StorageMethodType::Frozen => Self::Frozen,
            entity::StorageMethodType::Unknown => Self::Unknown,
        }
    }
}

impl From<entity::DeliveryType> for types::DeliveryType {
    fn from(delivery: entity::DeliveryType) -> Self {
        match delivery {
            entity::DeliveryType::Normal => Self::Normal,
            entity::DeliveryType::Refrigerated => Self::Refrigerated,
            entity::DeliveryType::Frozen => Self::Frozen,
            entity::DeliveryType::Unknown => Self::Unknown,
        }
    }
}

/// Converts a recorded weight to kilograms rounded to one decimal place.
///
/// Computed in decimal so that e.g. 1250 g renders as 1.3 rather than a
/// binary approximation.
#[must_use]
pub fn product_weight(weight: i64, unit: entity::WeightUnit) -> f64 {
    let kilograms = match unit {
        entity::WeightUnit::Gram => Decimal::new(weight, 3),
        entity::WeightUnit::Kilogram => Decimal::from(weight),
    };
    kilograms
        .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// A product listing.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    response: types::Product,
    revision_id: i64,
}

impl Product {
    /// Builds the listing. The category is resolved through the product type;
    /// an unknown type leaves it empty.
    #[must_use]
    pub fn new(
        product: &entity::Product,
        product_type: Option<&entity::ProductType>,
        rate: types::ProductRate,
    ) -> Self {
        let response = types::Product {
            id: product.id.clone(),
            coordinator_id: product.coordinator_id.clone(),
            producer_id: product.producer_id.clone(),
            category_id: product_type
                .map(|t| t.category_id.clone())
                .unwrap_or_default(),
            product_type_id: product.type_id.clone(),
            product_tag_ids: product.tag_ids.clone(),
            name: product.name.clone(),
            description: product.description.clone(),
            status: product.status.into(),
            inventory: product.inventory,
            weight: product_weight(product.weight, product.weight_unit),
            item_unit: product.item_unit.clone(),
            item_description: product.item_description.clone(),
            thumbnail_url: product.thumbnail_url().unwrap_or_default().to_string(),
            media: product
                .media
                .iter()
                .map(|m| types::ProductMedia {
                    url: m.url.clone(),
                    is_thumbnail: m.is_thumbnail,
                })
                .collect(),
            price: product.price(),
            expiration_date: product.expiration_date,
            recommended_points: product.recommended_points.clone(),
            storage_method_type: product.storage_method_type.into(),
            delivery_type: product.delivery_type.into(),
            box60_rate: product.box60_rate,
            box80_rate: product.box80_rate,
            box100_rate: product.box100_rate,
            origin_prefecture: Prefecture::name_of(product.origin_prefecture_code),
            origin_city: product.origin_city.clone(),
            rate,
            start_at: unix(&product.start_at),
            end_at: unix(&product.end_at),
        };
        Self {
            response,
            revision_id: product.revision.id,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.response.id
    }

    /// Price revision the listing was built from.
    #[must_use]
    pub const fn revision_id(&self) -> i64 {
        self.revision_id
    }

    /// On sale and in stock.
    #[must_use]
    pub fn is_for_sale(&self) -> bool {
        self.response.status == types::ProductStatus::ForSale && self.response.inventory > 0
    }

    #[must_use]
    pub fn response(&self) -> &types::Product {
        &self.response
    }

    #[must_use]
    pub fn into_response(self) -> types::Product {
        self.response
    }
}

/// Product listings in input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Products(Vec<Product>);

impl Products {
    #[must_use]
    pub fn new(
        products: &[entity::Product],
        product_types: &HashMap<String, entity::ProductType>,
        rates: &ReviewRates,
    ) -> Self {
        Self(
            products
                .iter()
                .map(|p| {
                    Product::new(p, product_types.get(&p.type_id), rates.product_rate(&p.id))
                })
                .collect(),
        )
    }

    /// Moves purchasable products to the front. Stable, ties ordered by ID.
    pub fn sort_by_for_sale(&mut self) {
        self.0.sort_by(|a, b| {
            b.is_for_sale()
                .cmp(&a.is_for_sale())
                .then_with(|| a.id().cmp(b.id()))
        });
    }

    /// Distinct coordinator IDs, first-seen order.
    #[must_use]
    pub fn coordinator_ids(&self) -> Vec<String> {
        unique(self.0.iter().map(|p| p.response.coordinator_id.clone()))
    }

    /// Distinct producer IDs, first-seen order.
    #[must_use]
    pub fn producer_ids(&self) -> Vec<String> {
        unique(self.0.iter().map(|p| p.response.producer_id.clone()))
    }

    /// Indexes the products by ID.
    #[must_use]
    pub fn map(&self) -> HashMap<String, Product> {
        self.0
            .iter()
            .map(|p| (p.id().to_string(), p.clone()))
            .collect()
    }

    /// Indexes the products by price revision, for resolving order items.
    #[must_use]
    pub fn map_by_revision(&self) -> HashMap<i64, Product> {
        self.0
            .iter()
            .map(|p| (p.revision_id, p.clone()))
            .collect()
    }

    #[must_use]
    pub fn response(&self) -> Vec<types::Product> {
        self.0.iter().map(|p| p.response.clone()).collect()
    }
}

impl Deref for Products {
    type Target = [Product];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use std::collections::BTreeMap;

    fn product(id: &str, status: entity::ProductStatus, inventory: i64) -> entity::Product {
        entity::Product {
            id: id.to_string(),
            coordinator_id: "coordinator-id".to_string(),
            producer_id: "producer-id".to_string(),
            type_id: "product-type-id".to_string(),
            tag_ids: vec!["tag-id".to_string()],
            name: "新鮮なじゃがいも".to_string(),
            description: "新鮮なじゃがいもをお届けします。".to_string(),
            public: true,
            status,
            inventory,
            weight: 1300,
            weight_unit: entity::WeightUnit::Gram,
            item: 1,
            item_unit: "袋".to_string(),
            item_description: "1袋あたり100gのじゃがいも".to_string(),
            media: vec![
                entity::ProductMedia {
                    url: "https://example.com/thumbnail01.png".to_string(),
                    is_thumbnail: true,
                },
                entity::ProductMedia {
                    url: "https://example.com/thumbnail02.png".to_string(),
                    is_thumbnail: false,
                },
            ],
            expiration_date: 7,
            recommended_points: vec!["ポイント1".to_string(), "ポイント2".to_string()],
            storage_method_type: entity::StorageMethodType::Normal,
            delivery_type: entity::DeliveryType::Normal,
            box60_rate: 50,
            box80_rate: 40,
            box100_rate: 30,
            origin_prefecture_code: 25,
            origin_city: "彦根市".to_string(),
            start_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            end_at: Utc.with_ymd_and_hms(2024, 12, 31, 0, 0, 0).unwrap(),
            revision: entity::ProductRevision {
                id: 1,
                product_id: id.to_string(),
                price: 400,
            },
            ..Default::default()
        }
    }

    fn product_type() -> entity::ProductType {
        entity::ProductType {
            id: "product-type-id".to_string(),
            category_id: "category-id".to_string(),
            name: "じゃがいも".to_string(),
            icon_url: String::new(),
        }
    }

    #[test]
    fn test_product_weight() {
        use entity::WeightUnit::{Gram, Kilogram};

        assert_eq!(product_weight(1300, Gram), 1.3);
        assert_eq!(product_weight(1250, Gram), 1.3);
        assert_eq!(product_weight(1249, Gram), 1.2);
        assert_eq!(product_weight(50, Gram), 0.1);
        assert_eq!(product_weight(40, Gram), 0.0);
        assert_eq!(product_weight(0, Gram), 0.0);
        assert_eq!(product_weight(2, Kilogram), 2.0);
    }

    #[test]
    fn test_product_status() {
        use entity::ProductStatus as S;

        assert_eq!(types::ProductStatus::from(S::Presale), types::ProductStatus::Presale);
        assert_eq!(types::ProductStatus::from(S::ForSale), types::ProductStatus::ForSale);
        assert_eq!(types::ProductStatus::from(S::OutOfSale), types::ProductStatus::OutOfSale);
        assert_eq!(types::ProductStatus::from(S::Private), types::ProductStatus::Unknown);
        assert_eq!(types::ProductStatus::from(S::Archived), types::ProductStatus::Unknown);
    }

    #[test]
    fn test_product_new() {
        let product_type = product_type();
        let rate = types::ProductRate {
            average: 2.5,
            count: 4,
            detail: BTreeMap::from([(1, 2), (2, 0), (3, 1), (4, 0), (5, 1)]),
        };
        let actual = Product::new(
            &product("product-id", entity::ProductStatus::ForSale, 100),
            Some(&product_type),
            rate.clone(),
        );
        let expected = types::Product {
            id: "product-id".to_string(),
            coordinator_id: "coordinator-id".to_string(),
            producer_id: "producer-id".to_string(),
            category_id: "category-id".to_string(),
            product_type_id: "product-type-id".to_string(),
            product_tag_ids: vec!["tag-id".to_string()],
            name: "新鮮なじゃがいも".to_string(),
            description: "新鮮なじゃがいもをお届けします。".to_string(),
            status: types::ProductStatus::ForSale,
            inventory: 100,
            weight: 1.3,
            item_unit: "袋".to_string(),
            item_description: "1袋あたり100gのじゃがいも".to_string(),
            thumbnail_url: "https://example.com/thumbnail01.png".to_string(),
            media: vec![
                types::ProductMedia {
                    url: "https://example.com/thumbnail01.png".to_string(),
                    is_thumbnail: true,
                },
                types::ProductMedia {
                    url: "https://example.com/thumbnail02.png".to_string(),
                    is_thumbnail: false,
                },
            ],
            price: 400,
            expiration_date: 7,
            recommended_points: vec!["ポイント1".to_string(), "ポイント2".to_string()],
            storage_method_type: types::StorageMethodType::Normal,
            delivery_type: types::DeliveryType::Normal,
            box60_rate: 50,
            box80_rate: 40,
            box100_rate: 30,
            origin_prefecture: "滋賀県".to_string(),
            origin_city: "彦根市".to_string(),
            rate,
            start_at: 1_704_067_200,
            end_at: 1_735_603_200,
        };
        assert_eq!(actual.response(), &expected);
        assert_eq!(actual.revision_id(), 1);
        assert!(actual.is_for_sale());
    }

    #[test]
    fn test_product_without_type_or_thumbnail() {
        let mut entity = product("product-id", entity::ProductStatus::Presale, 10);
        entity.media.clear();
        let actual = Product::new(&entity, None, types::ProductRate::default());
        assert_eq!(actual.response().category_id, "");
        assert_eq!(actual.response().thumbnail_url, "");
        assert!(!actual.is_for_sale());
    }

    #[test]
    fn test_products_sort_by_for_sale() {
        use entity::ProductStatus::{ForSale, OutOfSale, Presale};

        let product_types = HashMap::from([("product-type-id".to_string(), product_type())]);
        let mut products = Products::new(
            &[
                product("d", ForSale, 0),
                product("b", OutOfSale, 10),
                product("c", ForSale, 5),
                product("a", Presale, 10),
                product("e", ForSale, 1),
            ],
            &product_types,
            &ReviewRates::default(),
        );
        products.sort_by_for_sale();

        let ids: Vec<_> = products.iter().map(|p| p.id().to_string()).collect();
        assert_eq!(ids, vec!["c", "e", "a", "b", "d"]);
    }

    #[test]
    fn test_products_aggregation() {
        let mut second = product("p-2", entity::ProductStatus::ForSale, 1);
        second.producer_id = "producer-2".to_string();
        second.revision.id = 7;
        let products = Products::new(
            &[product("p-1", entity::ProductStatus::ForSale, 1), second],
            &HashMap::new(),
            &ReviewRates::default(),
        );

        assert_eq!(products.coordinator_ids(), vec!["coordinator-id"]);
        assert_eq!(products.producer_ids(), vec!["producer-id", "producer-2"]);
        assert_eq!(products.map()["p-2"].revision_id(), 7);
        assert_eq!(products.map_by_revision()[&7].id(), "p-2");
        assert_eq!(products.response().len(), 2);
        assert_eq!(products.response()[0].rate.detail.len(), 5);
    }

    #[test]
    fn test_product_json_keys() {
        let actual = Product::new(
            &product("product-id", entity::ProductStatus::ForSale, 1),
            None,
            types::ProductRate::default(),
        );
        let json = serde_json::to_value(actual.response()).unwrap();
        assert_eq!(json["status"], 2);
        assert_eq!(json["box60Rate"], 50);
        assert_eq!(json["originPrefecture"], "滋賀県");
        assert_eq!(json["weight"], 1.3);
        assert!(json.get("revisionId").is_none());
    }
}
