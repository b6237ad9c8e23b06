use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

response_enum! {
    /// Temperature zone of a shipping box.
    pub enum ShippingType {
        Normal = 1,
        Frozen = 2,
        Refrigerated = 3,
    }
}

response_enum! {
    /// Shipping box size class.
    pub enum ShippingSize {
        Size60 = 1,
        Size80 = 2,
        Size100 = 3,
    }
}

/// Product placed in a box.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub product_id: String,
    pub quantity: i64,
}

/// One shipping box of the cart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    pub number: i64,
    #[serde(rename = "type")]
    #[schema(value_type = i32)]
    pub shipping_type: ShippingType,
    #[schema(value_type = i32)]
    pub size: ShippingSize,
    /// Fill ratio in percent.
    pub rate: i64,
    pub items: Vec<CartItem>,
    pub coordinator_id: String,
}

/// Checkout amounts for the cart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CartSummary {
    pub subtotal: i64,
    pub discount: i64,
    pub shipping_fee: i64,
    pub total: i64,
}
