//! Result type aliases for Member Searcher.

use crate::SearcherError;

/// A specialized `Result` type for searcher operations.
pub type SearcherResult<T> = Result<T, SearcherError>;
