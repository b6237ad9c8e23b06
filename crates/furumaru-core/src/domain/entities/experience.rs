//! Experience entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Booking status of an experience.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceStatus {
    #[default]
    Private,
    /// Published, booking not open yet.
    Waiting,
    /// Accepting bookings.
    Accepting,
    SoldOut,
    /// Booking period ended.
    Finished,
    Archived,
}

/// Category of experience (harvesting, cooking class, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceType {
    pub id: String,
    pub name: String,
}

/// Image or video attached to an experience.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceMedia {
    pub url: String,
    pub is_thumbnail: bool,
}

/// A bookable on-site activity hosted by a producer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub id: String,
    pub coordinator_id: String,
    pub producer_id: String,
    pub type_id: String,
    pub title: String,
    pub description: String,
    pub public: bool,
    pub sold_out: bool,
    pub status: ExperienceStatus,
    pub media: Vec<ExperienceMedia>,
    pub price_adult: i64,
    pub price_junior_high_school: i64,
    pub price_elementary_school: i64,
    pub price_preschool: i64,
    pub price_senior: i64,
    pub recommended_points: Vec<String>,
    pub promotion_video_url: String,
    /// Duration in minutes.
    pub duration: i64,
    pub direction: String,
    /// "HHMM".
    pub business_open_time: String,
    /// "HHMM".
    pub business_close_time: String,
    pub host_postal_code: String,
    pub host_prefecture_code: i32,
    pub host_city: String,
    pub host_address_line1: String,
    pub host_address_line2: String,
    pub host_longitude: f64,
    pub host_latitude: f64,
    pub start_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Experience {
    /// Returns the URL of the media flagged as thumbnail.
    #[must_use]
    pub fn thumbnail_url(&self) -> Option<&str> {
        self.media
            .iter()
            .find(|m| m.is_thumbnail)
            .map(|m| m.url.as_str())
    }
}
