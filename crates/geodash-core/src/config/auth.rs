//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Authentication settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Minimum accepted password length for new accounts.
    #[serde(default = "default_password_min_length")]
    pub password_min_length: u32,
    /// Lifetime of an issued session identifier in days.
    #[serde(default = "default_token_ttl_days")]
    pub token_ttl_days: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            password_min_length: default_password_min_length(),
            token_ttl_days: default_token_ttl_days(),
        }
    }
}

fn default_password_min_length() -> u32 {
    6
}

fn default_token_ttl_days() -> u32 {
    7
}
