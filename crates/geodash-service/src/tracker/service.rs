//! Session lifecycle tracker — login, logout, and history reads.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;
use uuid::Uuid;

use geodash_core::config::{ReloginPolicy, SessionConfig};
use geodash_core::error::AppError;
use geodash_core::result::AppResult;
use geodash_database::repositories::{SessionRepository, UserRepository};
use geodash_entity::session::{CurrentSession, SessionRecord};

/// A user's session history together with the currently open session.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SessionHistoryView {
    /// Completed sessions, oldest first.
    pub records: Vec<SessionRecord>,
    /// The open session as of the read, if any.
    pub current: Option<CurrentSession>,
}

/// Tracks per-user session lifecycles.
///
/// Logins set the per-user open-session marker, logouts close it into an
/// immutable record, and reads derive the live view of any open session.
#[derive(Debug, Clone)]
pub struct SessionTracker {
    /// User lookups, for existence checks.
    user_repo: Arc<UserRepository>,
    /// Session state and record persistence.
    session_repo: Arc<SessionRepository>,
    /// Session tracking configuration.
    config: SessionConfig,
}

impl SessionTracker {
    /// Creates a new session tracker.
    pub fn new(
        user_repo: Arc<UserRepository>,
        session_repo: Arc<SessionRepository>,
        config: SessionConfig,
    ) -> Self {
        Self {
            user_repo,
            session_repo,
            config,
        }
    }

    /// Record a login event for a user at the given time.
    ///
    /// If a session is already open, the configured re-login policy decides
    /// what happens to it: `discard` overwrites the marker and the abandoned
    /// session leaves no trace, `close_previous` closes it first with the
    /// new login time as its logout time. Returns the record produced by
    /// closing a previous session, if any.
    pub async fn record_login(
        &self,
        user_id: Uuid,
        login_time: DateTime<Utc>,
    ) -> AppResult<Option<SessionRecord>> {
        self.ensure_user(user_id).await?;

        let closed = match self.config.relogin_policy {
            ReloginPolicy::Discard => {
                self.session_repo.open_session(user_id, login_time).await?;
                None
            }
            ReloginPolicy::ClosePrevious => {
                self.session_repo
                    .open_session_closing_previous(user_id, login_time, self.config.history_limit)
                    .await?
            }
        };

        info!(
            user_id = %user_id,
            login_time = %login_time,
            closed_previous = closed.is_some(),
            "Session opened"
        );
        Ok(closed)
    }

    /// Record a logout event for a user at the given time.
    ///
    /// Closes the open session into an immutable record and returns it.
    /// Returns `None` when no session was open; a logout without a matching
    /// login is not an error.
    pub async fn record_logout(
        &self,
        user_id: Uuid,
        logout_time: DateTime<Utc>,
    ) -> AppResult<Option<SessionRecord>> {
        self.ensure_user(user_id).await?;

        let record = self
            .session_repo
            .close_session(user_id, logout_time, self.config.history_limit)
            .await?;

        match &record {
            Some(record) => info!(
                user_id = %user_id,
                duration = %record.formatted_duration,
                "Session closed"
            ),
            None => info!(user_id = %user_id, "Logout with no open session, ignored"),
        }
        Ok(record)
    }

    /// Read a user's session history and the open session, if any.
    pub async fn session_history(&self, user_id: Uuid) -> AppResult<SessionHistoryView> {
        self.ensure_user(user_id).await?;

        let records = self
            .session_repo
            .find_history(user_id, self.config.history_limit)
            .await?;
        let current = self
            .session_repo
            .find_state(user_id)
            .await?
            .and_then(|state| state.current_session(Utc::now()));

        Ok(SessionHistoryView { records, current })
    }

    /// Verify the user exists before touching their session data.
    async fn ensure_user(&self, user_id: Uuid) -> AppResult<()> {
        self.user_repo
            .find_by_id(user_id)
            .await?
            .map(|_| ())
            .ok_or_else(|| AppError::not_found(format!("User {user_id} not found")))
    }
}
