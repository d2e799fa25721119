//! # geodash-auth
//!
//! Authentication for the GeoDash platform.
//!
//! ## Modules
//!
//! - `password` — Argon2id password hashing and policy enforcement
//! - `token` — opaque bearer session identifier generation
//! - `manager` — login, logout, and bearer credential resolution

pub mod manager;
pub mod password;
pub mod token;

pub use manager::{AuthManager, LoginOutcome};
pub use password::{PasswordHasher, PasswordValidator};
