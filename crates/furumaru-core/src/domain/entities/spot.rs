//! Spot entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who registered a spot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SpotUserType {
    #[default]
    Unknown,
    User,
    Coordinator,
    Producer,
}

/// Category of spot shown on the map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpotType {
    pub id: String,
    pub name: String,
}

/// A point of interest pinned on the map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Spot {
    pub id: String,
    pub type_id: String,
    pub user_type: SpotUserType,
    pub user_id: String,
    pub name: String,
    pub description: String,
    pub thumbnail_url: String,
    pub longitude: f64,
    pub latitude: f64,
    pub approved: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
