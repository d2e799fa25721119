//! Completed session records and the duration formatting rule.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// An immutable summary of one completed dashboard session.
///
/// A record is created exactly once, when a logout closes an open
/// session, and is never mutated afterward.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SessionRecord {
    /// Unique record identifier.
    pub id: Uuid,
    /// The user this session belonged to.
    pub user_id: Uuid,
    /// When the session started.
    pub login_time: DateTime<Utc>,
    /// When the session ended.
    pub logout_time: DateTime<Utc>,
    /// Whole elapsed seconds, `floor((logout - login) / 1000)` over
    /// millisecond timestamps.
    pub duration_seconds: i64,
    /// Human-readable rendering of `duration_seconds`.
    pub formatted_duration: String,
    /// When the record was persisted.
    pub created_at: DateTime<Utc>,
}

/// Compute the whole-second duration between two timestamps.
///
/// Sub-second remainders are floored away, matching
/// `floor((logout - login) / 1000)` over millisecond clock values.
pub fn session_duration_seconds(login: DateTime<Utc>, logout: DateTime<Utc>) -> i64 {
    (logout - login).num_milliseconds().div_euclid(1000)
}

/// Render a duration as `"{h}h {m}m {s}s"`.
///
/// All three components are always present, even when zero
/// (`5` seconds renders as `"0h 0m 5s"`).
pub fn format_duration(duration_seconds: i64) -> String {
    let hours = duration_seconds / 3600;
    let minutes = (duration_seconds % 3600) / 60;
    let seconds = duration_seconds % 60;
    format!("{hours}h {minutes}m {seconds}s")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_zero() {
        assert_eq!(format_duration(0), "0h 0m 0s");
    }

    #[test]
    fn test_format_seconds_only() {
        assert_eq!(format_duration(5), "0h 0m 5s");
    }

    #[test]
    fn test_format_all_components() {
        assert_eq!(format_duration(3661), "1h 1m 1s");
    }

    #[test]
    fn test_format_ninety_minutes() {
        assert_eq!(format_duration(5415), "1h 30m 15s");
    }

    #[test]
    fn test_format_component_boundaries() {
        assert_eq!(format_duration(59), "0h 0m 59s");
        assert_eq!(format_duration(60), "0h 1m 0s");
        assert_eq!(format_duration(3599), "0h 59m 59s");
        assert_eq!(format_duration(3600), "1h 0m 0s");
    }

    #[test]
    fn test_duration_floors_sub_second_remainder() {
        let login = Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap();
        let logout = login + chrono::Duration::milliseconds(1999);
        assert_eq!(session_duration_seconds(login, logout), 1);
    }

    #[test]
    fn test_duration_concrete_scenario() {
        let login = Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap();
        let logout = Utc.with_ymd_and_hms(2024, 1, 1, 11, 30, 15).unwrap();
        assert_eq!(session_duration_seconds(login, logout), 5415);
    }

    #[test]
    fn test_duration_zero_for_instant_logout() {
        let t = Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap();
        assert_eq!(session_duration_seconds(t, t), 0);
    }
}
