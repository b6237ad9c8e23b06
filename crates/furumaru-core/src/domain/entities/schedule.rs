//! Livestream schedule entities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle of a livestream schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ScheduleStatus {
    #[default]
    Private,
    /// Awaiting approval.
    InProgress,
    /// Approved, not started.
    Waiting,
    Live,
    Closed,
}

/// Broadcast state owned by the media service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Broadcast {
    pub schedule_id: String,
    pub input_url: String,
    pub output_url: String,
    pub archive_url: String,
    pub archive_metadata_url: String,
    /// Set once the recorded stream is available for replay.
    pub archived: bool,
}

/// A livestream slot hosted by a coordinator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub id: String,
    pub coordinator_id: String,
    pub title: String,
    pub description: String,
    pub thumbnail_url: String,
    pub image_url: String,
    pub opening_video_url: String,
    pub public: bool,
    pub approved: bool,
    pub status: ScheduleStatus,
    pub start_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A producer's segment within a schedule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Live {
    pub id: String,
    pub schedule_id: String,
    pub producer_id: String,
    pub product_ids: Vec<String>,
    pub comment: String,
    pub start_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
}
