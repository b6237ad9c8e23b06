use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

response_enum! {
    /// How a promotion reduces the price.
    pub enum DiscountType {
        /// Flat amount in yen.
        Amount = 1,
        /// Percentage of the subtotal.
        Rate = 2,
        FreeShipping = 3,
    }
}

/// Discount code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Promotion {
    pub id: String,
    pub title: String,
    pub description: String,
    #[schema(value_type = i32)]
    pub discount_type: DiscountType,
    pub discount_rate: i64,
    pub code: String,
    pub start_at: i64,
    pub end_at: i64,
}
