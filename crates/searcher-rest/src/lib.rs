//! # Searcher REST
//!
//! REST API layer using Axum for Member Searcher.
//! Exposes the enriched course membership listing and health checks.

pub mod controllers;
pub mod middleware;
pub mod openapi;
pub mod responses;
pub mod router;
pub mod state;

pub use router::*;
pub use state::*;
