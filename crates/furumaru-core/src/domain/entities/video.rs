//! On-demand video entities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Publication status of a video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum VideoStatus {
    #[default]
    Private,
    Waiting,
    Limited,
    Published,
}

/// An uploaded video tied to products and experiences.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    pub id: String,
    pub coordinator_id: String,
    pub product_ids: Vec<String>,
    pub experience_ids: Vec<String>,
    pub title: String,
    pub description: String,
    pub thumbnail_url: String,
    pub video_url: String,
    pub status: VideoStatus,
    pub published_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A viewer comment on a video.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoComment {
    pub id: String,
    pub video_id: String,
    pub user_id: String,
    pub content: String,
    /// Hidden by moderation.
    pub disabled: bool,
    pub created_at: DateTime<Utc>,
}
