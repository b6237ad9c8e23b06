//! Review entities for products and experiences.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A review left on a purchased product.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductReview {
    pub id: String,
    pub product_id: String,
    pub user_id: String,
    pub rate: i64,
    pub title: String,
    pub comment: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A review left on an attended experience.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceReview {
    pub id: String,
    pub experience_id: String,
    pub user_id: String,
    pub rate: i64,
    pub title: String,
    pub comment: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Review statistics for a single product or experience.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregatedReview {
    pub target_id: String,
    pub count: i64,
    pub average: f64,
    pub rate1: i64,
    pub rate2: i64,
    pub rate3: i64,
    pub rate4: i64,
    pub rate5: i64,
}

/// Reaction a user can leave on someone else's review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ReviewReactionType {
    #[default]
    Unknown,
    Like,
    Dislike,
}

/// A reaction left by a user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewReaction {
    pub review_id: String,
    pub user_id: String,
    pub reaction_type: ReviewReactionType,
    pub created_at: DateTime<Utc>,
}
