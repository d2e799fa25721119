//! Response DTOs.
//!
//! JSON field names are camelCase to match the dashboard client.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use geodash_entity::session::{CurrentSession, SessionRecord};
use geodash_entity::user::User;

/// A completed session as exposed to clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecordResponse {
    /// When the session started.
    pub login_time: DateTime<Utc>,
    /// When the session ended.
    pub logout_time: DateTime<Utc>,
    /// Whole elapsed seconds.
    pub duration_seconds: i64,
    /// Human-readable duration.
    pub formatted_duration: String,
}

impl From<SessionRecord> for SessionRecordResponse {
    fn from(record: SessionRecord) -> Self {
        Self {
            login_time: record.login_time,
            logout_time: record.logout_time,
            duration_seconds: record.duration_seconds,
            formatted_duration: record.formatted_duration,
        }
    }
}

/// Response to a session login/logout event.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionActionResponse {
    /// Whether the event was processed.
    pub success: bool,
    /// The completed session, when a logout closed one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_data: Option<SessionRecordResponse>,
    /// Human-readable outcome.
    pub message: String,
}

/// The open session as of the read.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentSessionResponse {
    /// When the open session started.
    pub login_time: DateTime<Utc>,
    /// Elapsed whole seconds as of the read.
    pub duration: i64,
}

impl From<CurrentSession> for CurrentSessionResponse {
    fn from(current: CurrentSession) -> Self {
        Self {
            login_time: current.login_time,
            duration: current.duration_seconds,
        }
    }
}

/// Session history response.
///
/// `currentSession` is always present, null when no session is open.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionHistoryResponse {
    /// Completed sessions, oldest first.
    pub session_history: Vec<SessionRecordResponse>,
    /// The open session, if any.
    pub current_session: Option<CurrentSessionResponse>,
}

/// User summary for responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    /// User ID.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Email.
    pub email: Option<String>,
    /// Phone number.
    pub phone_number: Option<String>,
    /// Created at.
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            phone_number: user.phone_number,
            created_at: user.created_at,
        }
    }
}

/// Response to a successful signup or login.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    /// Whether the request was successful.
    pub success: bool,
    /// Opaque bearer identifier for subsequent requests.
    pub token: String,
    /// The authenticated user.
    pub user: UserResponse,
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    /// Whether the request was successful.
    pub success: bool,
    /// Message.
    pub message: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Crate version.
    pub version: String,
    /// Database connectivity.
    pub database: String,
}
