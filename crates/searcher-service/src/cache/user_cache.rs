//! One-shot user directory cache.

use searcher_core::{SearcherResult, User};
use std::collections::HashMap;
use std::future::Future;
use tokio::sync::OnceCell;

/// Cache of the user directory, keyed by user id.
///
/// The directory is filled at most once. A failed fill leaves the cache
/// empty so that the next caller tries again; concurrent callers during the
/// first fill wait on the same load instead of starting their own.
#[derive(Debug, Default)]
pub struct UserCache {
    directory: OnceCell<HashMap<String, User>>,
}

impl UserCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached directory, running `loader` if it is not loaded yet.
    pub async fn get_or_load<F, Fut>(&self, loader: F) -> SearcherResult<&HashMap<String, User>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = SearcherResult<HashMap<String, User>>>,
    {
        self.directory.get_or_try_init(loader).await
    }

    /// Looks up a user by id in the loaded directory.
    pub fn lookup(&self, id: &str) -> Option<&User> {
        self.directory.get().and_then(|directory| directory.get(id))
    }

    /// Returns true once the directory has been loaded.
    pub fn is_loaded(&self) -> bool {
        self.directory.initialized()
    }

    /// Number of cached users (0 when not loaded).
    pub fn len(&self) -> usize {
        self.directory.get().map_or(0, HashMap::len)
    }

    /// Returns true when no users are cached.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
