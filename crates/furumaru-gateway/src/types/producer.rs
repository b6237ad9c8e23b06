use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Producer profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Producer {
    pub id: String,
    pub coordinator_id: String,
    pub username: String,
    pub profile: String,
    pub thumbnail_url: String,
    pub header_url: String,
    pub promotion_video_url: String,
    pub instagram_id: String,
    pub facebook_id: String,
    pub prefecture: String,
    pub city: String,
}
