//! Per-user session tracking state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::record::session_duration_seconds;

/// The per-user open-session marker.
///
/// A non-null `last_login_time` means a session is currently open for the
/// user; logout clears it back to null. One row per user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SessionState {
    /// The user this state belongs to.
    pub user_id: Uuid,
    /// When the currently open session started, if one is open.
    pub last_login_time: Option<DateTime<Utc>>,
    /// When the state row was last written.
    pub updated_at: DateTime<Utc>,
}

impl SessionState {
    /// Check whether a session is currently open.
    pub fn is_open(&self) -> bool {
        self.last_login_time.is_some()
    }

    /// Derive the read-time view of the open session, if any.
    ///
    /// `now` is the clock value at the moment of the read; successive
    /// reads of an open session therefore yield non-decreasing durations.
    pub fn current_session(&self, now: DateTime<Utc>) -> Option<CurrentSession> {
        self.last_login_time.map(|login_time| CurrentSession {
            login_time,
            duration_seconds: session_duration_seconds(login_time, now),
        })
    }
}

/// Derived view of a currently open session. Never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentSession {
    /// When the open session started.
    pub login_time: DateTime<Utc>,
    /// Elapsed whole seconds as of the read.
    pub duration_seconds: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn state(last_login_time: Option<DateTime<Utc>>) -> SessionState {
        SessionState {
            user_id: Uuid::new_v4(),
            last_login_time,
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_closed_state_has_no_current_session() {
        let s = state(None);
        assert!(!s.is_open());
        assert!(s.current_session(Utc::now()).is_none());
    }

    #[test]
    fn test_current_session_duration_from_read_clock() {
        let login = Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap();
        let s = state(Some(login));
        assert!(s.is_open());

        let now = Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 42).unwrap();
        let current = s.current_session(now).unwrap();
        assert_eq!(current.login_time, login);
        assert_eq!(current.duration_seconds, 42);
    }

    #[test]
    fn test_current_session_non_decreasing() {
        let login = Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap();
        let s = state(Some(login));

        let first = s
            .current_session(login + chrono::Duration::seconds(10))
            .unwrap();
        let second = s
            .current_session(login + chrono::Duration::seconds(25))
            .unwrap();
        assert!(second.duration_seconds >= first.duration_seconds);
    }
}
