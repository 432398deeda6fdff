//! Membership backend client trait definition.

use async_trait::async_trait;
use searcher_core::{Interface, MembershipList, SearcherResult, UserList};

/// Path of the user directory endpoint on the backend.
pub const USERS_PATH: &str = "/api.php/users";

/// Path of the membership list endpoint on the backend.
pub const MEMBERS_PATH: &str = "/api.php/members";

/// Read-only access to the membership backend.
#[async_trait]
pub trait MembershipBackendClient: Interface + Send + Sync {
    /// Fetches the complete user directory.
    async fn fetch_users(&self) -> SearcherResult<UserList>;

    /// Fetches all memberships, without user details.
    async fn fetch_memberships(&self) -> SearcherResult<MembershipList>;
}
