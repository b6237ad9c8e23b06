use super::unix;
use crate::types;
use furumaru_core::domain::entities as entity;
use std::collections::{BTreeMap, HashMap};
use std::ops::Deref;

/// Star ratings a review can carry.
const RATES: [i64; 5] = [1, 2, 3, 4, 5];

/// Aggregated review statistics keyed by product or experience ID.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewRates(HashMap<String, entity::AggregatedReview>);

impl ReviewRates {
    #[must_use]
    pub fn new(reviews: &[entity::AggregatedReview]) -> Self {
        Self(
            reviews
                .iter()
                .map(|r| (r.target_id.clone(), r.clone()))
                .collect(),
        )
    }

    /// Rate of a product; zero when it has no reviews.
    #[must_use]
    pub fn product_rate(&self, product_id: &str) -> types::ProductRate {
        let (average, count, detail) = self.summary(product_id);
        types::ProductRate {
            average,
            count,
            detail,
        }
    }

    /// Rate of an experience; zero when it has no reviews.
    #[must_use]
    pub fn experience_rate(&self, experience_id: &str) -> types::ExperienceRate {
        let (average, count, detail) = self.summary(experience_id);
        types::ExperienceRate {
            average,
            count,
            detail,
        }
    }

    fn summary(&self, target_id: &str) -> (f64, i64, BTreeMap<i64, i64>) {
        let Some(review) = self.0.get(target_id) else {
            return (0.0, 0, RATES.iter().map(|&rate| (rate, 0)).collect());
        };
        let counts = [
            review.rate1,
            review.rate2,
            review.rate3,
            review.rate4,
            review.rate5,
        ];
        let detail = RATES.iter().copied().zip(counts).collect();
        (review.average, review.count, detail)
    }
}

/// Public profile fields of a reviewer; empty when the user is gone.
fn reviewer(user: Option<&entity::User>) -> (String, String, String) {
    user.filter(|u| u.registered).map_or_else(
        || (String::new(), String::new(), String::new()),
        |u| {
            (
                u.username.clone(),
                u.account_id.clone(),
                u.thumbnail_url.clone(),
            )
        },
    )
}

/// A product review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductReview(types::ProductReview);

impl ProductReview {
    #[must_use]
    pub fn new(review: &entity::ProductReview, user: Option<&entity::User>) -> Self {
        let (username, account_id, thumbnail_url) = reviewer(user);
        Self(types::ProductReview {
            id: review.id.clone(),
            product_id: review.product_id.clone(),
            user_id: review.user_id.clone(),
            username,
            account_id,
            thumbnail_url,
            rate: review.rate,
            title: review.title.clone(),
            comment: review.comment.clone(),
            published_at: unix(&review.created_at),
        })
    }

    #[must_use]
    pub fn response(&self) -> &types::ProductReview {
        &self.0
    }
}

/// Product reviews in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductReviews(Vec<ProductReview>);

impl ProductReviews {
    #[must_use]
    pub fn new(reviews: &[entity::ProductReview], users: &HashMap<String, entity::User>) -> Self {
        Self(
            reviews
                .iter()
                .map(|r| ProductReview::new(r, users.get(&r.user_id)))
                .collect(),
        )
    }

    #[must_use]
    pub fn response(&self) -> Vec<types::ProductReview> {
        self.0.iter().map(|r| r.response().clone()).collect()
    }
}

impl Deref for ProductReviews {
    type Target = [ProductReview];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// An experience review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperienceReview(types::ExperienceReview);

impl ExperienceReview {
    #[must_use]
    pub fn new(review: &entity::ExperienceReview, user: Option<&entity::User>) -> Self {
        let (username, account_id, thumbnail_url) = reviewer(user);
        Self(types::ExperienceReview {
            id: review.id.clone(),
            experience_id: review.experience_id.clone(),
            user_id: review.user_id.clone(),
            username,
            account_id,
            thumbnail_url,
            rate: review.rate,
            title: review.title.clone(),
            comment: review.comment.clone(),
            published_at: unix(&review.created_at),
        })
    }

    #[must_use]
    pub fn response(&self) -> &types::ExperienceReview {
        &self.0
    }
}

/// Experience reviews in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExperienceReviews(Vec<ExperienceReview>);

impl ExperienceReviews {
    #[must_use]
    pub fn new(
        reviews: &[entity::ExperienceReview],
        users: &HashMap<String, entity::User>,
    ) -> Self {
        Self(
            reviews
                .iter()
                .map(|r| ExperienceReview::new(r, users.get(&r.user_id)))
                .collect(),
        )
    }

    #[must_use]
    pub fn response(&self) -> Vec<types::ExperienceReview> {
        self.0.iter().map(|r| r.response().clone()).collect()
    }
}

impl Deref for ExperienceReviews {
    type Target = [ExperienceReview];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<entity::ReviewReactionType> for types::ReviewReactionType {
    fn from(reaction: entity::ReviewReactionType) -> Self {
        match reaction {
            entity::ReviewReactionType::Like => Self::Like,
            entity::ReviewReactionType::Dislike => Self::Dislike,
            entity::ReviewReactionType::Unknown => Self::Unknown,
        }
    }
}

/// The signed-in user's reactions, in input order.
#[must_use]
pub fn user_review_reactions(reactions: &[entity::ReviewReaction]) -> Vec<types::UserReviewReaction> {
    reactions
        .iter()
        .map(|r| types::UserReviewReaction {
            review_id: r.review_id.clone(),
            reaction_type: r.reaction_type.into(),
        })
        .collect()
}
