//! Membership service implementation.

use crate::cache::UserCache;
use crate::membership_service::{CacheStatus, MembershipService};
use async_trait::async_trait;
use searcher_client::MembershipBackendClient;
use searcher_core::{MembershipList, SearcherError, SearcherResult, User};
use shaku::Component;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Message prefix for failures while filling the user cache.
pub const USER_CACHE_ERROR_PREFIX: &str = "Error creating User Cache: ";

/// Membership service backed by the membership backend and an in-memory
/// user directory.
#[derive(Component)]
#[shaku(interface = MembershipService)]
pub struct MembershipServiceImpl {
    #[shaku(inject)]
    backend_client: Arc<dyn MembershipBackendClient>,
    #[shaku(default)]
    user_cache: UserCache,
}

impl MembershipServiceImpl {
    /// Creates a new membership service with an empty user cache.
    pub fn new(backend_client: Arc<dyn MembershipBackendClient>) -> Self {
        Self {
            backend_client,
            user_cache: UserCache::new(),
        }
    }

    async fn load_user_directory(&self) -> SearcherResult<HashMap<String, User>> {
        info!("User cache is empty, loading user directory");

        let users = self.backend_client.fetch_users().await.map_err(|e| {
            warn!("Failed to load user directory: {}", e);
            SearcherError::ClientRequest(format!("{}{}", USER_CACHE_ERROR_PREFIX, e))
        })?;

        let directory = users.into_directory();
        info!("User cache loaded with {} users", directory.len());
        Ok(directory)
    }
}

#[async_trait]
impl MembershipService for MembershipServiceImpl {
    async fn fetch_all_memberships_with_users(&self) -> SearcherResult<MembershipList> {
        let directory = self
            .user_cache
            .get_or_load(|| self.load_user_directory())
            .await?;

        let mut memberships = self.backend_client.fetch_memberships().await?;
        let matched = attach_users(&mut memberships, directory);

        debug!(
            "Enriched {} of {} memberships with user details",
            matched,
            memberships.memberships.len()
        );
        Ok(memberships)
    }

    fn cache_status(&self) -> CacheStatus {
        CacheStatus {
            loaded: self.user_cache.is_loaded(),
            cached_users: self.user_cache.len(),
        }
    }
}

impl std::fmt::Debug for MembershipServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MembershipServiceImpl")
            .field("user_cache", &self.user_cache)
            .finish_non_exhaustive()
    }
}

/// Attaches each membership's user from `directory`.
///
/// Memberships whose user id is unknown are left untouched. Returns the
/// number of memberships that were matched.
pub fn attach_users(memberships: &mut MembershipList, directory: &HashMap<String, User>) -> usize {
    let mut matched = 0;
    for membership in &mut memberships.memberships {
        if let Some(user) = directory.get(&membership.user_id) {
            membership.attach_user(user.clone());
            matched += 1;
        }
    }
    matched
}
