//! Membership models.

use crate::User;
use serde::{Deserialize, Serialize};

/// A membership record, optionally enriched with its user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Membership {
    /// Membership identifier.
    pub id: String,
    /// Identifier of the user this membership belongs to.
    pub user_id: String,
    /// Role held by the user (e.g. `instructor`, `student`).
    #[serde(default)]
    pub role: String,
    /// The matching user, when known.
    #[serde(default)]
    pub user: Option<User>,
}

impl Membership {
    /// Creates a membership without user details.
    #[must_use]
    pub fn new(id: impl Into<String>, user_id: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            user_id: user_id.into(),
            role: role.into(),
            user: None,
        }
    }

    /// Attaches the user details to this membership.
    pub fn attach_user(&mut self, user: User) {
        self.user = Some(user);
    }
}

/// A list of memberships.
///
/// This is both the backend payload and the body of the aggregated response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct MembershipList {
    #[serde(default)]
    pub memberships: Vec<Membership>,
}

impl MembershipList {
    /// Creates a membership list.
    #[must_use]
    pub fn new(memberships: Vec<Membership>) -> Self {
        Self { memberships }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_backend_payload() {
        let json = r#"{"memberships":[{"id":"m1","user_id":"u1","role":"instructor"}]}"#;
        let list: MembershipList = serde_json::from_str(json).unwrap();
        assert_eq!(list.memberships.len(), 1);
        assert_eq!(list.memberships[0].user_id, "u1");
        assert!(list.memberships[0].user.is_none());
    }

    #[test]
    fn test_unmatched_user_serializes_as_null() {
        let membership = Membership::new("m1", "u1", "student");
        let value = serde_json::to_value(&membership).unwrap();
        assert!(value["user"].is_null());
        assert_eq!(value["user_id"], "u1");
    }

    #[test]
    fn test_attach_user() {
        let mut membership = Membership::new("m1", "u1", "student");
        membership.attach_user(User::new("u1", "Ada", "ada@example.com"));

        let value = serde_json::to_value(&membership).unwrap();
        assert_eq!(value["user"]["name"], "Ada");
    }
}
