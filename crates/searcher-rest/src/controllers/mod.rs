//! REST API controllers.

pub mod health_controller;
pub mod membership_controller;

pub use health_controller::*;
