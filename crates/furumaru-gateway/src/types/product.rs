use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

response_enum! {
    /// Sale status shown to buyers.
    pub enum ProductStatus {
        /// Sale not started.
        Presale = 1,
        ForSale = 2,
        OutOfSale = 3,
    }
}

response_enum! {
    /// Storage instructions.
    pub enum StorageMethodType {
        /// Room temperature.
        Normal = 1,
        /// Cool, dark place.
        CoolDark = 2,
        Refrigerated = 3,
        Frozen = 4,
    }
}

response_enum! {
    /// Shipping temperature zone.
    pub enum DeliveryType {
        Normal = 1,
        Refrigerated = 2,
        Frozen = 3,
    }
}

/// Product image or video.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductMedia {
    pub url: String,
    pub is_thumbnail: bool,
}

/// Review statistics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductRate {
    pub average: f64,
    pub count: i64,
    /// Number of reviews per star (1..=5).
    pub detail: BTreeMap<i64, i64>,
}

/// Product listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub coordinator_id: String,
    pub producer_id: String,
    pub category_id: String,
    pub product_type_id: String,
    pub product_tag_ids: Vec<String>,
    pub name: String,
    pub description: String,
    #[schema(value_type = i32)]
    pub status: ProductStatus,
    pub inventory: i64,
    /// Kilograms, one decimal place.
    pub weight: f64,
    pub item_unit: String,
    pub item_description: String,
    pub thumbnail_url: String,
    pub media: Vec<ProductMedia>,
    pub price: i64,
    /// Days until expiry.
    pub expiration_date: i64,
    pub recommended_points: Vec<String>,
    #[schema(value_type = i32)]
    pub storage_method_type: StorageMethodType,
    #[schema(value_type = i32)]
    pub delivery_type: DeliveryType,
    pub box60_rate: i64,
    pub box80_rate: i64,
    pub box100_rate: i64,
    pub origin_prefecture: String,
    pub origin_city: String,
    pub rate: ProductRate,
    pub start_at: i64,
    pub end_at: i64,
}
