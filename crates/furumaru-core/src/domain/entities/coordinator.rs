//! Coordinator entity.

use chrono::{DateTime, Utc, Weekday};
use serde::{Deserialize, Serialize};

/// A marche operator who curates producers and hosts livestreams.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coordinator {
    pub admin_id: String,
    pub marche_name: String,
    pub username: String,
    pub profile: String,
    pub product_type_ids: Vec<String>,
    pub business_days: Vec<Weekday>,
    pub thumbnail_url: String,
    pub header_url: String,
    pub promotion_video_url: String,
    pub instagram_id: String,
    pub facebook_id: String,
    pub prefecture_code: i32,
    pub city: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Default for Coordinator {
    fn default() -> Self {
        Self {
            admin_id: String::new(),
            marche_name: String::new(),
            username: String::new(),
            profile: String::new(),
            product_type_ids: Vec::new(),
            business_days: Vec::new(),
            thumbnail_url: String::new(),
            header_url: String::new(),
            promotion_video_url: String::new(),
            instagram_id: String::new(),
            facebook_id: String::new(),
            prefecture_code: 0,
            city: String::new(),
            created_at: DateTime::<Utc>::default(),
            updated_at: DateTime::<Utc>::default(),
        }
    }
}
