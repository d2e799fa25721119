//! # geodash-api
//!
//! HTTP API layer for GeoDash built on Axum.
//!
//! Provides all REST endpoints, middleware (CORS, logging), extractors,
//! and DTOs. Error-to-HTTP mapping lives in `geodash_core::error`.

pub mod app;
pub mod dto;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use state::AppState;
