use crate::types;
use furumaru_core::domain::entities as entity;
use std::collections::HashMap;
use std::ops::Deref;

/// A purchaser profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    response: types::User,
    registered: bool,
}

impl User {
    #[must_use]
    pub fn new(user: &entity::User) -> Self {
        // Guests have no public identity.
        let (username, account_id) = if user.registered {
            (user.username.clone(), user.account_id.clone())
        } else {
            (String::new(), String::new())
        };
        let response = types::User {
            id: user.id.clone(),
            account_id,
            username,
            lastname: user.lastname.clone(),
            firstname: user.firstname.clone(),
            lastname_kana: user.lastname_kana.clone(),
            firstname_kana: user.firstname_kana.clone(),
            email: user.email.clone(),
            thumbnail_url: user.thumbnail_url.clone(),
        };
        Self {
            response,
            registered: user.registered,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.response.id
    }

    /// False for guest purchasers.
    #[must_use]
    pub fn is_registered(&self) -> bool {
        self.registered
    }

    #[must_use]
    pub fn response(&self) -> &types::User {
        &self.response
    }
}

/// Users in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Users(Vec<User>);

impl Users {
    #[must_use]
    pub fn new(users: &[entity::User]) -> Self {
        Self(users.iter().map(User::new).collect())
    }

    /// Indexes the users by ID.
    #[must_use]
    pub fn map(&self) -> HashMap<String, User> {
        self.0
            .iter()
            .map(|u| (u.id().to_string(), u.clone()))
            .collect()
    }

    #[must_use]
    pub fn response(&self) -> Vec<types::User> {
        self.0.iter().map(|u| u.response().clone()).collect()
    }
}

impl Deref for Users {
    type Target = [User];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str, registered: bool) -> entity::User {
        entity::User {
            id: id.to_string(),
            account_id: "account-id".to_string(),
            username: "username".to_string(),
            lastname: "ふるマル".to_string(),
            firstname: "利用者".to_string(),
            lastname_kana: "あんど".to_string(),
            firstname_kana: "りようしゃ".to_string(),
            email: "test@example.com".to_string(),
            thumbnail_url: "https://example.com/thumbnail.png".to_string(),
            registered,
            ..Default::default()
        }
    }

    #[test]
    fn test_user_new() {
        let actual = User::new(&user("user-id", true));
        let expected = types::User {
            id: "user-id".to_string(),
            account_id: "account-id".to_string(),
            username: "username".to_string(),
            lastname: "ふるマル".to_string(),
            firstname: "利用者".to_string(),
            lastname_kana: "あんど".to_string(),
            firstname_kana: "りようしゃ".to_string(),
            email: "test@example.com".to_string(),
            thumbnail_url: "https://example.com/thumbnail.png".to_string(),
        };
        assert_eq!(actual.response(), &expected);
    }

    #[test]
    fn test_guest_has_no_public_identity() {
        let actual = User::new(&user("guest-id", false));
        assert_eq!(actual.response().username, "");
        assert_eq!(actual.response().account_id, "");
        assert_eq!(actual.response().email, "test@example.com");
        assert!(!actual.is_registered());
        assert!(User::new(&user("user-id", true)).is_registered());
    }

    #[test]
    fn test_users_map() {
        let users = Users::new(&[user("u-1", true), user("u-2", false)]);
        assert_eq!(users.response().len(), 2);
        let map = users.map();
        assert_eq!(map["u-2"].id(), "u-2");
    }
}
