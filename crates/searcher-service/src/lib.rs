//! # Searcher Service
//!
//! Service layer for Member Searcher: joins the membership list with the
//! cached user directory.

pub mod cache;
pub mod membership_service;
mod membership_service_impl;

pub use cache::*;
pub use membership_service::*;
pub use membership_service_impl::*;
