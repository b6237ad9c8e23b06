use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

response_enum! {
    /// Booking status shown to buyers.
    pub enum ExperienceStatus {
        /// Booking not open yet.
        Waiting = 1,
        Accepting = 2,
        SoldOut = 3,
        Finished = 4,
    }
}

/// Experience category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceType {
    pub id: String,
    pub name: String,
}

/// Experience image or video.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceMedia {
    pub url: String,
    pub is_thumbnail: bool,
}

/// Review statistics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceRate {
    pub average: f64,
    pub count: i64,
    /// Number of reviews per star (1..=5).
    pub detail: BTreeMap<i64, i64>,
}

/// Bookable experience.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: String,
    pub coordinator_id: String,
    pub producer_id: String,
    pub experience_type_id: String,
    pub title: String,
    pub description: String,
    #[schema(value_type = i32)]
    pub status: ExperienceStatus,
    pub thumbnail_url: String,
    pub media: Vec<ExperienceMedia>,
    pub price_adult: i64,
    pub price_junior_high_school: i64,
    pub price_elementary_school: i64,
    pub price_preschool: i64,
    pub price_senior: i64,
    pub recommended_points: Vec<String>,
    pub promotion_video_url: String,
    /// Minutes.
    pub duration: i64,
    pub direction: String,
    pub business_open_time: String,
    pub business_close_time: String,
    pub host_postal_code: String,
    pub host_prefecture: String,
    pub host_city: String,
    pub host_address_line1: String,
    pub host_address_line2: String,
    pub host_longitude: f64,
    pub host_latitude: f64,
    pub rate: ExperienceRate,
    pub start_at: i64,
    pub end_at: i64,
}

/// Price preview for a booking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExperiencePrice {
    pub subtotal: i64,
    pub discount: i64,
    pub total: i64,
}
