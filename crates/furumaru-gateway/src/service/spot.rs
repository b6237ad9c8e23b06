use super::{unique, unix, Coordinator, Producer, User};
use crate::types;
use furumaru_core::domain::entities as entity;
use std::collections::HashMap;
use std::ops::Deref;

impl From<entity::SpotUserType> for types::SpotUserType {
    fn from(user_type: entity::SpotUserType) -> Self {
        match user_type {
            entity::SpotUserType::User => Self::User,
            entity::SpotUserType::Coordinator => Self::Coordinator,
            entity::SpotUserType::Producer => Self::Producer,
            entity::SpotUserType::Unknown => Self::Unknown,
        }
    }
}

/// Lookup tables for the accounts that post spots.
#[derive(Debug, Clone, Copy)]
pub struct SpotOwners<'a> {
    pub users: &'a HashMap<String, User>,
    pub coordinators: &'a HashMap<String, Coordinator>,
    pub producers: &'a HashMap<String, Producer>,
}

impl SpotOwners<'_> {
    /// Display name and icon of the spot's poster, empty when unknown.
    fn profile(&self, user_type: entity::SpotUserType, user_id: &str) -> (String, String) {
        let profile = match user_type {
            entity::SpotUserType::User => self
                .users
                .get(user_id)
                .map(|u| (&u.response().username, &u.response().thumbnail_url)),
            entity::SpotUserType::Coordinator => self
                .coordinators
                .get(user_id)
                .map(|c| (&c.response().username, &c.response().thumbnail_url)),
            entity::SpotUserType::Producer => self
                .producers
                .get(user_id)
                .map(|p| (&p.response().username, &p.response().thumbnail_url)),
            entity::SpotUserType::Unknown => None,
        };
        profile.map_or_else(Default::default, |(name, thumbnail)| {
            (name.clone(), thumbnail.clone())
        })
    }
}

/// Poster IDs of a set of spots, split by account kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpotUserIds {
    pub user_ids: Vec<String>,
    pub coordinator_ids: Vec<String>,
    pub producer_ids: Vec<String>,
}

/// A map spot.
#[derive(Debug, Clone, PartialEq)]
pub struct Spot(types::Spot);

impl Spot {
    #[must_use]
    pub fn new(spot: &entity::Spot, owners: SpotOwners<'_>) -> Self {
        let (username, user_thumbnail_url) = owners.profile(spot.user_type, &spot.user_id);
        Self(types::Spot {
            id: spot.id.clone(),
            spot_type_id: spot.type_id.clone(),
            name: spot.name.clone(),
            description: spot.description.clone(),
            thumbnail_url: spot.thumbnail_url.clone(),
            longitude: spot.longitude,
            latitude: spot.latitude,
            user_type: spot.user_type.into(),
            user_id: spot.user_id.clone(),
            username,
            user_thumbnail_url,
            created_at: unix(&spot.created_at),
            updated_at: unix(&spot.updated_at),
        })
    }

    #[must_use]
    pub fn response(&self) -> &types::Spot {
        &self.0
    }
}

/// Spots in input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Spots(Vec<Spot>);

impl Spots {
    #[must_use]
    pub fn new(spots: &[entity::Spot], owners: SpotOwners<'_>) -> Self {
        Self(spots.iter().map(|s| Spot::new(s, owners)).collect())
    }

    /// Distinct poster IDs per account kind, for fetching `SpotOwners`.
    #[must_use]
    pub fn user_ids_by_type(spots: &[entity::Spot]) -> SpotUserIds {
        let ids_of = |user_type: entity::SpotUserType| {
            unique(
                spots
                    .iter()
                    .filter(|s| s.user_type == user_type)
                    .map(|s| s.user_id.clone()),
            )
        };
        SpotUserIds {
            user_ids: ids_of(entity::SpotUserType::User),
            coordinator_ids: ids_of(entity::SpotUserType::Coordinator),
            producer_ids: ids_of(entity::SpotUserType::Producer),
        }
    }

    #[must_use]
    pub fn response(&self) -> Vec<types::Spot> {
        self.0.iter().map(|s| s.0.clone()).collect()
    }
}

impl Deref for Spots {
    type Target = [Spot];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// A spot category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpotType(types::SpotType);

impl SpotType {
    #[must_use]
    pub fn new(spot_type: &entity::SpotType) -> Self {
        Self(types::SpotType {
            id: spot_type.id.clone(),
            name: spot_type.name.clone(),
        })
    }

    #[must_use]
    pub fn response(&self) -> &types::SpotType {
        &self.0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpotTypes(Vec<SpotType>);

impl SpotTypes {
    #[must_use]
    pub fn new(spot_types: &[entity::SpotType]) -> Self {
        Self(spot_types.iter().map(SpotType::new).collect())
    }

    #[must_use]
    pub fn response(&self) -> Vec<types::SpotType> {
        self.0.iter().map(|t| t.0.clone()).collect()
    }
}

impl Deref for SpotTypes {
    type Target = [SpotType];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::{Coordinators, Producers, Users};
    use chrono::{TimeZone, Utc};

    fn spot(id: &str, user_type: entity::SpotUserType, user_id: &str) -> entity::Spot {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        entity::Spot {
            id: id.to_string(),
            type_id: "spot-type-id".to_string(),
            user_type,
            user_id: user_id.to_string(),
            name: "彦根城".to_string(),
            description: "国宝の天守".to_string(),
            thumbnail_url: "https://example.com/spot.png".to_string(),
            longitude: 136.251_739,
            latitude: 35.276_833,
            approved: true,
            created_at: at,
            updated_at: at,
        }
    }

    struct Fixture {
        users: HashMap<String, User>,
        coordinators: HashMap<String, Coordinator>,
        producers: HashMap<String, Producer>,
    }

    impl Fixture {
        fn new() -> Self {
            let users = Users::new(&[entity::User {
                id: "user-id".to_string(),
                username: "ユーザー".to_string(),
                thumbnail_url: "https://example.com/user.png".to_string(),
                registered: true,
                ..Default::default()
            }]);
            let coordinators = Coordinators::new(&[entity::Coordinator {
                admin_id: "coordinator-id".to_string(),
                username: "コーディネータ".to_string(),
                thumbnail_url: "https://example.com/coordinator.png".to_string(),
                ..Default::default()
            }]);
            let producers = Producers::new(&[entity::Producer {
                admin_id: "producer-id".to_string(),
                username: "生産者".to_string(),
                thumbnail_url: "https://example.com/producer.png".to_string(),
                ..Default::default()
            }]);
            Self {
                users: users.map(),
                coordinators: coordinators.map(),
                producers: producers.map(),
            }
        }

        fn owners(&self) -> SpotOwners<'_> {
            SpotOwners {
                users: &self.users,
                coordinators: &self.coordinators,
                producers: &self.producers,
            }
        }
    }

    #[test]
    fn test_spot_new() {
        let fixture = Fixture::new();
        let actual = Spot::new(
            &spot("spot-id", entity::SpotUserType::Coordinator, "coordinator-id"),
            fixture.owners(),
        );
        let expected = types::Spot {
            id: "spot-id".to_string(),
            spot_type_id: "spot-type-id".to_string(),
            name: "彦根城".to_string(),
            description: "国宝の天守".to_string(),
            thumbnail_url: "https://example.com/spot.png".to_string(),
            longitude: 136.251_739,
            latitude: 35.276_833,
            user_type: types::SpotUserType::Coordinator,
            user_id: "coordinator-id".to_string(),
            username: "コーディネータ".to_string(),
            user_thumbnail_url: "https://example.com/coordinator.png".to_string(),
            created_at: 1_704_067_200,
            updated_at: 1_704_067_200,
        };
        assert_eq!(actual.response(), &expected);
    }

    #[test]
    fn test_spots_resolve_each_owner_kind() {
        let fixture = Fixture::new();
        let spots = Spots::new(
            &[
                spot("s-1", entity::SpotUserType::User, "user-id"),
                spot("s-2", entity::SpotUserType::Producer, "producer-id"),
                spot("s-3", entity::SpotUserType::Producer, "missing-id"),
                spot("s-4", entity::SpotUserType::Unknown, "user-id"),
            ],
            fixture.owners(),
        );
        let names: Vec<_> = spots.response().into_iter().map(|s| s.username).collect();
        assert_eq!(names, vec!["ユーザー", "生産者", "", ""]);
        assert_eq!(spots[1].response().user_thumbnail_url, "https://example.com/producer.png");
        assert_eq!(spots[2].response().user_thumbnail_url, "");
    }

    #[test]
    fn test_spots_user_ids_by_type() {
        let spots = [
            spot("s-1", entity::SpotUserType::User, "user-1"),
            spot("s-2", entity::SpotUserType::Coordinator, "coordinator-1"),
            spot("s-3", entity::SpotUserType::User, "user-2"),
            spot("s-4", entity::SpotUserType::User, "user-1"),
            spot("s-5", entity::SpotUserType::Producer, "producer-1"),
        ];
        assert_eq!(
            Spots::user_ids_by_type(&spots),
            SpotUserIds {
                user_ids: vec!["user-1".to_string(), "user-2".to_string()],
                coordinator_ids: vec!["coordinator-1".to_string()],
                producer_ids: vec!["producer-1".to_string()],
            }
        );
    }

    #[test]
    fn test_spot_types() {
        let spot_types = SpotTypes::new(&[entity::SpotType {
            id: "spot-type-id".to_string(),
            name: "観光地".to_string(),
        }]);
        assert_eq!(spot_types.len(), 1);
        assert_eq!(spot_types.response()[0].name, "観光地");
    }
}
