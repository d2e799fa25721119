//! Request DTOs with validation.
//!
//! JSON field names are camelCase to match the dashboard client.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Signup request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    /// Display name.
    #[validate(length(min = 1, max = 50, message = "Name is required"))]
    pub name: String,
    /// Email address.
    pub email: Option<String>,
    /// Phone number in international format.
    pub phone_number: Option<String>,
    /// Plaintext password (required with email).
    pub password: Option<String>,
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    /// Email address.
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Session event request body.
///
/// Fields are optional so that missing-field failures surface as
/// validation errors rather than deserialization rejections.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionEventRequest {
    /// The user the event belongs to.
    pub user_id: Option<Uuid>,
    /// `"login"` or `"logout"`.
    pub action: Option<String>,
    /// When the event happened.
    pub timestamp: Option<DateTime<Utc>>,
}

/// Query parameters for session history reads.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionHistoryQuery {
    /// The user whose history to read.
    pub user_id: Option<Uuid>,
}
