//! In-memory caching for the service layer.
//!
//! The user directory is fetched once per process and kept for its
//! lifetime; there is no eviction.

mod user_cache;

pub use user_cache::UserCache;
