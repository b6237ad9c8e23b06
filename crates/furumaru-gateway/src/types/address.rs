use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Shipping or billing address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub id: String,
    pub is_default: bool,
    pub lastname: String,
    pub firstname: String,
    pub lastname_kana: String,
    pub firstname_kana: String,
    pub postal_code: String,
    /// Prefecture name.
    pub prefecture: String,
    pub prefecture_code: i32,
    pub city: String,
    pub address_line1: String,
    pub address_line2: String,
    pub phone_number: String,
}
