//! Application state for Axum handlers.

use searcher_service::MembershipService;
use shaku::{HasComponent, Module};
use std::sync::Arc;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub membership_service: Arc<dyn MembershipService>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(membership_service: Arc<dyn MembershipService>) -> Self {
        Self { membership_service }
    }

    /// Creates the application state by resolving services from a Shaku module.
    pub fn from_module<M>(module: &M) -> Self
    where
        M: Module + HasComponent<dyn MembershipService>,
    {
        Self::new(module.resolve())
    }
}
