//! Session tracking configuration.

use serde::{Deserialize, Serialize};

/// Session lifecycle tracking configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Maximum number of completed session records retained per user.
    /// The oldest record is evicted once the cap is exceeded.
    #[serde(default = "default_history_limit")]
    pub history_limit: u32,
    /// What to do when a login arrives while a session is already open.
    #[serde(default)]
    pub relogin_policy: ReloginPolicy,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            history_limit: default_history_limit(),
            relogin_policy: ReloginPolicy::default(),
        }
    }
}

/// Policy applied when a login event arrives for a user whose previous
/// session was never closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReloginPolicy {
    /// Overwrite the open-session marker; the abandoned session produces
    /// no history record.
    Discard,
    /// Close the abandoned session first, using the new login timestamp as
    /// its logout time, then open the new session.
    ClosePrevious,
}

impl Default for ReloginPolicy {
    fn default() -> Self {
        Self::Discard
    }
}

impl std::fmt::Display for ReloginPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReloginPolicy::Discard => write!(f, "discard"),
            ReloginPolicy::ClosePrevious => write!(f, "close_previous"),
        }
    }
}

fn default_history_limit() -> u32 {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.history_limit, 10);
        assert_eq!(config.relogin_policy, ReloginPolicy::Discard);
    }
}
