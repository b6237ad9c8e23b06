use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Marche operator profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Coordinator {
    pub id: String,
    pub marche_name: String,
    pub username: String,
    pub profile: String,
    pub product_type_ids: Vec<String>,
    /// Days open for business, 0 = Sunday through 6 = Saturday.
    pub business_days: Vec<u32>,
    pub thumbnail_url: String,
    pub header_url: String,
    pub promotion_video_url: String,
    pub instagram_id: String,
    pub facebook_id: String,
    pub prefecture: String,
    pub city: String,
}
