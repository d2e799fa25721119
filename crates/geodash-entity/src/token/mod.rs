//! Stored authentication session entity.

pub mod model;

pub use model::AuthSession;
