use super::{unique, unix, Promotion, ReviewRates};
use crate::types;
use furumaru_core::domain::entities as entity;
use furumaru_core::Prefecture;
use std::collections::HashMap;
use std::ops::Deref;

impl From<entity::ExperienceStatus> for types::ExperienceStatus {
    fn from(status: entity::ExperienceStatus) -> Self {
        match status {
            entity::ExperienceStatus::Waiting => Self::Waiting,
            entity::ExperienceStatus::Accepting => Self::Accepting,
            entity::ExperienceStatus::SoldOut => Self::SoldOut,
            entity::ExperienceStatus::Finished => Self::Finished,
            entity::ExperienceStatus::Private | entity::ExperienceStatus::Archived => {
                Self::Unknown
            }
        }
    }
}

/// Head counts of an experience booking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExperienceParams {
    pub adult_count: i64,
    pub junior_high_school_count: i64,
    pub elementary_school_count: i64,
    pub preschool_count: i64,
    pub senior_count: i64,
}

/// A bookable experience.
#[derive(Debug, Clone, PartialEq)]
pub struct Experience(types::Experience);

impl Experience {
    #[must_use]
    pub fn new(experience: &entity::Experience, rate: types::ExperienceRate) -> Self {
        Self(types::Experience {
            id: experience.id.clone(),
            coordinator_id: experience.coordinator_id.clone(),
            producer_id: experience.producer_id.clone(),
            experience_type_id: experience.type_id.clone(),
            title: experience.title.clone(),
            description: experience.description.clone(),
            status: experience.status.into(),
            thumbnail_url: experience.thumbnail_url().unwrap_or_default().to_string(),
            media: experience
                .media
                .iter()
                .map(|m| types::ExperienceMedia {
                    url: m.url.clone(),
                    is_thumbnail: m.is_thumbnail,
                })
                .collect(),
            price_adult: experience.price_adult,
            price_junior_high_school: experience.price_junior_high_school,
            price_elementary_school: experience.price_elementary_school,
            price_preschool: experience.price_preschool,
            price_senior: experience.price_senior,
            recommended_points: experience.recommended_points.clone(),
            promotion_video_url: experience.promotion_video_url.clone(),
            duration: experience.duration,
            direction: experience.direction.clone(),
            business_open_time: experience.business_open_time.clone(),
            business_close_time: experience.business_close_time.clone(),
            host_postal_code: experience.host_postal_code.clone(),
            host_prefecture: Prefecture::name_of(experience.host_prefecture_code),
            host_city: experience.host_city.clone(),
            host_address_line1: experience.host_address_line1.clone(),
            host_address_line2: experience.host_address_line2.clone(),
            host_longitude: experience.host_longitude,
            host_latitude: experience.host_latitude,
            rate,
            start_at: unix(&experience.start_at),
            end_at: unix(&experience.end_at),
        })
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.0.id
    }

    /// Prices a booking, applying the promotion when one is given.
    #[must_use]
    pub fn calc_price(
        &self,
        params: &ExperienceParams,
        promotion: Option<&Promotion>,
    ) -> types::ExperiencePrice {
        let subtotal = [
            (params.adult_count, self.0.price_adult),
            (params.junior_high_school_count, self.0.price_junior_high_school),
            (params.elementary_school_count, self.0.price_elementary_school),
            (params.preschool_count, self.0.price_preschool),
            (params.senior_count, self.0.price_senior),
        ]
        .into_iter()
        .fold(0_i64, |sum, (count, price)| {
            sum.saturating_add(count.saturating_mul(price))
        });
        let discount = promotion.map_or(0, |p| p.discount(subtotal));
        types::ExperiencePrice {
            subtotal,
            discount,
            total: subtotal.saturating_sub(discount),
        }
    }

    #[must_use]
    pub fn response(&self) -> &types::Experience {
        &self.0
    }

    #[must_use]
    pub fn into_response(self) -> types::Experience {
        self.0
    }
}

/// Experiences in input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Experiences(Vec<Experience>);

impl Experiences {
    #[must_use]
    pub fn new(experiences: &[entity::Experience], rates: &ReviewRates) -> Self {
        Self(
            experiences
                .iter()
                .map(|e| Experience::new(e, rates.experience_rate(&e.id)))
                .collect(),
        )
    }

    #[must_use]
    pub fn coordinator_ids(&self) -> Vec<String> {
        unique(self.0.iter().map(|e| e.0.coordinator_id.clone()))
    }

    #[must_use]
    pub fn producer_ids(&self) -> Vec<String> {
        unique(self.0.iter().map(|e| e.0.producer_id.clone()))
    }

    #[must_use]
    pub fn map(&self) -> HashMap<String, Experience> {
        self.0
            .iter()
            .map(|e| (e.id().to_string(), e.clone()))
            .collect()
    }

    #[must_use]
    pub fn response(&self) -> Vec<types::Experience> {
        self.0.iter().map(|e| e.0.clone()).collect()
    }
}

impl Deref for Experiences {
    type Target = [Experience];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// An experience category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperienceType(types::ExperienceType);

impl ExperienceType {
    #[must_use]
    pub fn new(experience_type: &entity::ExperienceType) -> Self {
        Self(types::ExperienceType {
            id: experience_type.id.clone(),
            name: experience_type.name.clone(),
        })
    }

    #[must_use]
    pub fn response(&self) -> &types::ExperienceType {
        &self.0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExperienceTypes(Vec<ExperienceType>);

impl ExperienceTypes {
    #[must_use]
    pub fn new(experience_types: &[entity::ExperienceType]) -> Self {
        Self(experience_types.iter().map(ExperienceType::new).collect())
    }

    #[must_use]
    pub fn response(&self) -> Vec<types::ExperienceType> {
        self.0.iter().map(|t| t.0.clone()).collect()
    }
}

impl Deref for ExperienceTypes {
    type Target = [ExperienceType];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
