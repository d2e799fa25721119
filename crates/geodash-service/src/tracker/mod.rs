//! Session lifecycle tracking.

pub mod service;

pub use service::{SessionHistoryView, SessionTracker};
