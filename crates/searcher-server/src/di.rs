//! Dependency injection module using Shaku.

use searcher_client::{
    build_http_client, normalize_base_url, HttpMembershipBackendClient,
    HttpMembershipBackendClientParameters,
};
use searcher_config::BackendConfig;
use searcher_core::SearcherResult;
use searcher_service::{MembershipService, MembershipServiceImpl};
use shaku::{module, HasComponent};
use std::sync::Arc;

// Membership searcher module: the HTTP backend client and the membership
// service that owns the user cache.
module! {
    pub SearcherModule {
        components = [
            HttpMembershipBackendClient,
            MembershipServiceImpl,
        ],
        providers = [],
    }
}

/// Builds the module with a backend client configured from `config`.
pub fn build_module(config: &BackendConfig) -> SearcherResult<Arc<SearcherModule>> {
    let client = build_http_client(config)?;

    let module = SearcherModule::builder()
        .with_component_parameters::<HttpMembershipBackendClient>(
            HttpMembershipBackendClientParameters {
                client,
                base_url: normalize_base_url(&config.base_url),
            },
        )
        .build();

    Ok(Arc::new(module))
}

/// Trait for resolving services from a module.
pub trait ServiceResolver {
    /// Resolves the membership service from the module.
    fn membership_service(&self) -> Arc<dyn MembershipService>;
}

impl ServiceResolver for SearcherModule {
    fn membership_service(&self) -> Arc<dyn MembershipService> {
        self.resolve()
    }
}
