//! User directory models.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A user record from the backend's user directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct User {
    /// Unique user identifier.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Email address.
    #[serde(default)]
    pub email: String,
}

impl User {
    /// Creates a new user record.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
        }
    }
}

/// The full user directory as returned by the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UserList {
    #[serde(default)]
    pub users: Vec<User>,
}

impl UserList {
    /// Creates a user list.
    #[must_use]
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }

    /// Builds a lookup map keyed by user id.
    ///
    /// When the backend returns the same id twice, the later record wins.
    #[must_use]
    pub fn into_directory(self) -> HashMap<String, User> {
        self.users
            .into_iter()
            .map(|user| (user.id.clone(), user))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_user_list() {
        let json = r#"{"users":[{"id":"u1","name":"Ada","email":"ada@example.com","extra":true}]}"#;
        let list: UserList = serde_json::from_str(json).unwrap();
        assert_eq!(list.users, vec![User::new("u1", "Ada", "ada@example.com")]);
    }

    #[test]
    fn test_missing_users_field_is_empty() {
        let list: UserList = serde_json::from_str("{}").unwrap();
        assert!(list.users.is_empty());
    }

    #[test]
    fn test_into_directory() {
        let list = UserList::new(vec![
            User::new("u1", "Ada", "ada@example.com"),
            User::new("u2", "Grace", "grace@example.com"),
        ]);
        let directory = list.into_directory();
        assert_eq!(directory.len(), 2);
        assert_eq!(directory["u2"].name, "Grace");
    }

    #[test]
    fn test_into_directory_later_duplicate_wins() {
        let list = UserList::new(vec![
            User::new("u1", "Old", "old@example.com"),
            User::new("u1", "New", "new@example.com"),
        ]);
        let directory = list.into_directory();
        assert_eq!(directory.len(), 1);
        assert_eq!(directory["u1"].name, "New");
    }
}
