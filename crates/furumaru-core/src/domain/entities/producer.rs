//! Producer entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A farmer or maker listed under a coordinator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Producer {
    pub admin_id: String,
    pub coordinator_id: String,
    pub username: String,
    pub profile: String,
    pub thumbnail_url: String,
    pub header_url: String,
    pub promotion_video_url: String,
    pub instagram_id: String,
    pub facebook_id: String,
    pub prefecture_code: i32,
    pub city: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
