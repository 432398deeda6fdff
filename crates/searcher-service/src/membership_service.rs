//! Membership service trait definition.

use async_trait::async_trait;
use searcher_core::{Interface, MembershipList, SearcherResult};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Snapshot of the user cache, for health reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CacheStatus {
    /// Whether the user directory has been loaded.
    pub loaded: bool,
    /// Number of cached users.
    pub cached_users: usize,
}

/// Membership service trait.
#[async_trait]
pub trait MembershipService: Interface + Send + Sync {
    /// Fetches all memberships, each enriched with its user when the user
    /// is present in the cached directory.
    ///
    /// The user directory is loaded on first use and reused afterwards;
    /// memberships are fetched from the backend on every call.
    async fn fetch_all_memberships_with_users(&self) -> SearcherResult<MembershipList>;

    /// Returns the current state of the user cache.
    fn cache_status(&self) -> CacheStatus;
}
