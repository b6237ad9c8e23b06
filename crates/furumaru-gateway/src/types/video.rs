use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// On-demand video.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: String,
    pub coordinator_id: String,
    pub product_ids: Vec<String>,
    pub experience_ids: Vec<String>,
    pub title: String,
    pub description: String,
    pub thumbnail_url: String,
    pub video_url: String,
    pub published_at: i64,
}

/// Viewer comment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VideoComment {
    pub id: String,
    pub user_id: String,
    pub username: String,
    pub account_id: String,
    pub thumbnail_url: String,
    pub comment: String,
    pub published_at: i64,
}
