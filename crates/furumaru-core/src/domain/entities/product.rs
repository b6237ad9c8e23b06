//! Product entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sale status derived by the store service from the public flag and sale period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProductStatus {
    /// Not published.
    #[default]
    Private,
    /// Published, sale period not started yet.
    Presale,
    /// Within the sale period.
    ForSale,
    /// Sale period ended.
    OutOfSale,
    /// Retired from the catalogue.
    Archived,
}

/// Unit the product weight is recorded in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WeightUnit {
    #[default]
    Gram,
    Kilogram,
}

/// How the product must be kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StorageMethodType {
    #[default]
    Unknown,
    Normal,
    CoolDark,
    Refrigerated,
    Frozen,
}

/// Temperature zone used for shipping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryType {
    #[default]
    Unknown,
    Normal,
    Refrigerated,
    Frozen,
}

/// Image or video attached to a product.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductMedia {
    pub url: String,
    pub is_thumbnail: bool,
}

/// Price snapshot. Orders reference revisions rather than products so that
/// later price changes never alter past orders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRevision {
    pub id: i64,
    pub product_id: String,
    pub price: i64,
}

/// A product listed on the marketplace.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub coordinator_id: String,
    pub producer_id: String,
    pub type_id: String,
    pub tag_ids: Vec<String>,
    pub name: String,
    pub description: String,
    pub public: bool,
    pub status: ProductStatus,
    pub inventory: i64,
    pub weight: i64,
    pub weight_unit: WeightUnit,
    pub item: i64,
    pub item_unit: String,
    pub item_description: String,
    pub media: Vec<ProductMedia>,
    pub expiration_date: i64,
    pub recommended_points: Vec<String>,
    pub storage_method_type: StorageMethodType,
    pub delivery_type: DeliveryType,
    pub box60_rate: i64,
    pub box80_rate: i64,
    pub box100_rate: i64,
    pub origin_prefecture_code: i32,
    pub origin_city: String,
    pub start_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
    pub revision: ProductRevision,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Returns the URL of the media flagged as thumbnail.
    #[must_use]
    pub fn thumbnail_url(&self) -> Option<&str> {
        self.media
            .iter()
            .find(|m| m.is_thumbnail)
            .map(|m| m.url.as_str())
    }

    /// Current price, taken from the active revision.
    #[must_use]
    pub const fn price(&self) -> i64 {
        self.revision.price
    }
}
