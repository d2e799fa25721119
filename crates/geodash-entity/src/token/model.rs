//! Authentication session entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A server-side record of an issued session identifier.
///
/// The identifier itself is an opaque random string held by the client
/// and presented as a bearer credential; it carries no embedded claims.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AuthSession {
    /// The opaque session identifier.
    pub token: String,
    /// The user this identifier authenticates.
    pub user_id: Uuid,
    /// When the identifier was issued.
    pub created_at: DateTime<Utc>,
    /// When the identifier stops being accepted.
    pub expires_at: DateTime<Utc>,
}

impl AuthSession {
    /// Check whether the identifier has expired as of `now`.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expiry_boundary() {
        let now = Utc::now();
        let session = AuthSession {
            token: "t".to_string(),
            user_id: Uuid::new_v4(),
            created_at: now - chrono::Duration::days(7),
            expires_at: now,
        };
        assert!(session.is_expired(now));
        assert!(!session.is_expired(now - chrono::Duration::seconds(1)));
    }
}
