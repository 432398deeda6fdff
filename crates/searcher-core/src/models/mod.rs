//! Domain models exchanged with the membership backend.

mod membership;
mod user;

pub use membership::*;
pub use user::*;
