//! # geodash-core
//!
//! Core crate for the GeoDash backend. Contains configuration schemas and
//! the unified error system.
//!
//! This crate has **no** internal dependencies on other GeoDash crates.

pub mod config;
pub mod error;
pub mod result;

pub use error::{AppError, ErrorResponse};
pub use result::AppResult;
