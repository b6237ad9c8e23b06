//! User entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A purchaser. Guests check out without registering and carry no profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub account_id: String,
    pub username: String,
    pub lastname: String,
    pub firstname: String,
    pub lastname_kana: String,
    pub firstname_kana: String,
    pub email: String,
    pub thumbnail_url: String,
    /// `false` for guest checkouts.
    pub registered: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
