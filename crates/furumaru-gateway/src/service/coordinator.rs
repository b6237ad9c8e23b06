use crate::types;
use furumaru_core::domain::entities as entity;
use furumaru_core::Prefecture;
use std::collections::HashMap;
use std::ops::Deref;

/// A marche operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coordinator(types::Coordinator);

impl Coordinator {
    #[must_use]
    pub fn new(coordinator: &entity::Coordinator) -> Self {
        Self(types::Coordinator {
            id: coordinator.admin_id.clone(),
            marche_name: coordinator.marche_name.clone(),
            username: coordinator.username.clone(),
            profile: coordinator.profile.clone(),
            product_type_ids: coordinator.product_type_ids.clone(),
            business_days: coordinator
                .business_days
                .iter()
                .map(chrono::Weekday::num_days_from_sunday)
                .collect(),
            thumbnail_url: coordinator.thumbnail_url.clone(),
            header_url: coordinator.header_url.clone(),
            promotion_video_url: coordinator.promotion_video_url.clone(),
            instagram_id: coordinator.instagram_id.clone(),
            facebook_id: coordinator.facebook_id.clone(),
            prefecture: Prefecture::name_of(coordinator.prefecture_code),
            city: coordinator.city.clone(),
        })
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.0.id
    }

    #[must_use]
    pub fn response(&self) -> &types::Coordinator {
        &self.0
    }
}

/// Coordinators in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Coordinators(Vec<Coordinator>);

impl Coordinators {
    #[must_use]
    pub fn new(coordinators: &[entity::Coordinator]) -> Self {
        Self(coordinators.iter().map(Coordinator::new).collect())
    }

    #[must_use]
    pub fn ids(&self) -> Vec<String> {
        self.0.iter().map(|c| c.id().to_string()).collect()
    }

    /// Indexes the coordinators by ID.
    #[must_use]
    pub fn map(&self) -> HashMap<String, Coordinator> {
        self.0
            .iter()
            .map(|c| (c.id().to_string(), c.clone()))
            .collect()
    }

    #[must_use]
    pub fn response(&self) -> Vec<types::Coordinator> {
        self.0.iter().map(|c| c.response().clone()).collect()
    }
}

impl Deref for Coordinators {
    type Target = [Coordinator];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
