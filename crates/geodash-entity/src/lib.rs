//! # geodash-entity
//!
//! Domain entity models for the GeoDash backend: users, the per-user
//! session tracking state, completed session records, and stored
//! authentication sessions.

pub mod session;
pub mod token;
pub mod user;
