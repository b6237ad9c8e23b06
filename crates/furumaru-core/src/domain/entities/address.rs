//! Address entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A shipping/billing address registered by a user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub id: String,
    pub user_id: String,
    pub is_default: bool,
    pub lastname: String,
    pub firstname: String,
    pub lastname_kana: String,
    pub firstname_kana: String,
    pub postal_code: String,
    /// JIS prefecture code.
    pub prefecture_code: i32,
    pub city: String,
    pub address_line1: String,
    pub address_line2: String,
    pub phone_number: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Address {
    /// Returns "lastname firstname".
    #[must_use]
    pub fn name(&self) -> String {
        format!("{} {}", self.lastname, self.firstname).trim().to_string()
    }
}
