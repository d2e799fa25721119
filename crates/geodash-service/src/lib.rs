//! # geodash-service
//!
//! Business logic service layer for GeoDash. Each service orchestrates
//! repositories and authentication to implement application-level use
//! cases.
//!
//! Services follow constructor injection — all dependencies are provided
//! at construction time via `Arc` references.

pub mod account;
pub mod tracker;

pub use account::AccountService;
pub use tracker::{SessionHistoryView, SessionTracker};
