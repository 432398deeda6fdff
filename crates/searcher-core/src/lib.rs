//! # Searcher Core
//!
//! Core types, domain models, and error definitions for Member Searcher.
//! Every other crate in the workspace builds on the error type and the
//! user/membership models defined here.

pub mod error;
pub mod models;
pub mod result;

pub use error::*;
pub use models::*;
pub use result::*;

// Re-export shaku for dependency injection
pub use shaku::Interface;
