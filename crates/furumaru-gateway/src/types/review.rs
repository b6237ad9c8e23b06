use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

response_enum! {
    /// Reaction left on a review.
    pub enum ReviewReactionType {
        Like = 1,
        Dislike = 2,
    }
}

/// Product review with the reviewer's public profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductReview {
    pub id: String,
    pub product_id: String,
    pub user_id: String,
    pub username: String,
    pub account_id: String,
    pub thumbnail_url: String,
    pub rate: i64,
    pub title: String,
    pub comment: String,
    pub published_at: i64,
}

/// Experience review with the reviewer's public profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceReview {
    pub id: String,
    pub experience_id: String,
    pub user_id: String,
    pub username: String,
    pub account_id: String,
    pub thumbnail_url: String,
    pub rate: i64,
    pub title: String,
    pub comment: String,
    pub published_at: i64,
}

/// The signed-in user's own reaction on a review.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserReviewReaction {
    pub review_id: String,
    #[schema(value_type = i32)]
    pub reaction_type: ReviewReactionType,
}
