use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

response_enum! {
    /// Who registered a spot.
    pub enum SpotUserType {
        User = 1,
        Coordinator = 2,
        Producer = 3,
    }
}

/// Spot category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SpotType {
    pub id: String,
    pub name: String,
}

/// Point of interest on the map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Spot {
    pub id: String,
    pub spot_type_id: String,
    pub name: String,
    pub description: String,
    pub thumbnail_url: String,
    pub longitude: f64,
    pub latitude: f64,
    #[schema(value_type = i32)]
    pub user_type: SpotUserType,
    pub user_id: String,
    pub username: String,
    pub user_thumbnail_url: String,
    pub created_at: i64,
    pub updated_at: i64,
}
