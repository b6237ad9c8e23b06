use super::unique;
use crate::types;
use furumaru_core::domain::entities as entity;
use furumaru_core::Prefecture;
use std::collections::HashMap;
use std::ops::Deref;

/// A producer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Producer(types::Producer);

impl Producer {
    #[must_use]
    pub fn new(producer: &entity::Producer) -> Self {
        Self(types::Producer {
            id: producer.admin_id.clone(),
            coordinator_id: producer.coordinator_id.clone(),
            username: producer.username.clone(),
            profile: producer.profile.clone(),
            thumbnail_url: producer.thumbnail_url.clone(),
            header_url: producer.header_url.clone(),
            promotion_video_url: producer.promotion_video_url.clone(),
            instagram_id: producer.instagram_id.clone(),
            facebook_id: producer.facebook_id.clone(),
            prefecture: Prefecture::name_of(producer.prefecture_code),
            city: producer.city.clone(),
        })
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.0.id
    }

    #[must_use]
    pub fn response(&self) -> &types::Producer {
        &self.0
    }
}

/// Producers in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Producers(Vec<Producer>);

impl Producers {
    #[must_use]
    pub fn new(producers: &[entity::Producer]) -> Self {
        Self(producers.iter().map(Producer::new).collect())
    }

    /// Distinct coordinator IDs, first-seen order.
    #[must_use]
    pub fn coordinator_ids(&self) -> Vec<String> {
        unique(self.0.iter().map(|p| p.0.coordinator_id.clone()))
    }

    /// Indexes the producers by ID.
    #[must_use]
    pub fn map(&self) -> HashMap<String, Producer> {
        self.0
            .iter()
            .map(|p| (p.id().to_string(), p.clone()))
            .collect()
    }

    #[must_use]
    pub fn response(&self) -> Vec<types::Producer> {
        self.0.iter().map(|p| p.response().clone()).collect()
    }
}

impl Deref for Producers {
    type Target = [Producer];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
