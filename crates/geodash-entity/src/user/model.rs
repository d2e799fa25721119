//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A registered user in the GeoDash system.
///
/// An account is reachable by email, by phone number, or both; at least
/// one of the two is always present. Phone-only accounts carry no
/// password hash.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Email address (lowercased, unique).
    pub email: Option<String>,
    /// Phone number in E.164-like form (unique).
    pub phone_number: Option<String>,
    /// Argon2id password hash. Absent for phone-only accounts.
    #[serde(skip_serializing)]
    pub password_hash: Option<String>,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Display name.
    pub name: String,
    /// Email address (optional).
    pub email: Option<String>,
    /// Phone number (optional).
    pub phone_number: Option<String>,
    /// Pre-hashed password (optional).
    pub password_hash: Option<String>,
}
