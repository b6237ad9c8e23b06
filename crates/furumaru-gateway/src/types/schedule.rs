use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

response_enum! {
    /// Livestream status shown to viewers.
    pub enum ScheduleStatus {
        /// Not started.
        Waiting = 1,
        Live = 2,
        /// Ended, replay not available yet.
        Closed = 3,
        /// Ended, replay available.
        Archived = 4,
    }
}

/// Livestream slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    pub id: String,
    pub coordinator_id: String,
    pub title: String,
    pub description: String,
    #[schema(value_type = i32)]
    pub status: ScheduleStatus,
    pub thumbnail_url: String,
    /// Live output while streaming, archive after.
    pub distribution_url: String,
    pub metadata_url: String,
    pub start_at: i64,
    pub end_at: i64,
}

/// Producer segment within a livestream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Live {
    pub schedule_id: String,
    pub producer_id: String,
    pub product_ids: Vec<String>,
    pub comment: String,
    pub start_at: i64,
    pub end_at: i64,
}
