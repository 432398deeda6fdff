//! # Searcher Client
//!
//! Client for the membership backend, the external service that owns the
//! user directory and the membership list. Both endpoints are read-only.

mod backend_client;
mod http_backend_client;

pub use backend_client::*;
pub use http_backend_client::*;
