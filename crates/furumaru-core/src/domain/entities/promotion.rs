//! Promotion entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How a promotion reduces the price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DiscountType {
    #[default]
    Unknown,
    /// Flat amount in yen.
    Amount,
    /// Percentage of the subtotal.
    Rate,
    /// Waives the shipping fee.
    FreeShipping,
}

/// Which shops a promotion applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PromotionTargetType {
    #[default]
    Unknown,
    AllShop,
    SpecificShop,
}

/// A discount code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Promotion {
    pub id: String,
    pub shop_id: String,
    pub title: String,
    pub description: String,
    pub public: bool,
    pub target_type: PromotionTargetType,
    pub discount_type: DiscountType,
    /// Yen for `Amount`, percent for `Rate`, unused otherwise.
    pub discount_rate: i64,
    pub code: String,
    pub start_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
