//! Shopping cart entity.

use serde::{Deserialize, Serialize};

/// Temperature zone of a shipping box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ShippingType {
    #[default]
    Unknown,
    Normal,
    Frozen,
    Refrigerated,
}

/// Shipping box size class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ShippingSize {
    #[default]
    Unknown,
    Size60,
    Size80,
    Size100,
}

/// A product and the quantity put in a basket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub product_id: String,
    pub quantity: i64,
}

/// One shipping box. The store service packs cart items into boxes per
/// coordinator and temperature zone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartBasket {
    pub box_number: i64,
    pub box_type: ShippingType,
    pub box_size: ShippingSize,
    /// Fill ratio of the box in percent.
    pub box_rate: i64,
    pub items: Vec<CartItem>,
    pub coordinator_id: String,
}

/// A session-scoped cart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    pub session_id: String,
    pub baskets: Vec<CartBasket>,
}
