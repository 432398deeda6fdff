//! # Searcher Server Library
//!
//! Dependency injection wiring, logging setup, and startup helpers for the
//! Member Searcher binary.

pub mod di;
pub mod logging;
pub mod startup;
