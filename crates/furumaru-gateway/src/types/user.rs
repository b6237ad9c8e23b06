use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Purchaser profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub account_id: String,
    pub username: String,
    pub lastname: String,
    pub firstname: String,
    pub lastname_kana: String,
    pub firstname_kana: String,
    pub email: String,
    pub thumbnail_url: String,
}
