//! Login, logout, and bearer credential resolution.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use geodash_core::config::AuthConfig;
use geodash_core::error::AppError;
use geodash_core::result::AppResult;
use geodash_database::repositories::{AuthSessionRepository, UserRepository};
use geodash_entity::token::AuthSession;
use geodash_entity::user::User;

use crate::password::PasswordHasher;
use crate::token::generate_token;

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    /// The authenticated user.
    pub user: User,
    /// The stored session backing the issued bearer identifier.
    pub session: AuthSession,
}

/// Manages authentication: credential checks and bearer session issuance.
#[derive(Debug, Clone)]
pub struct AuthManager {
    /// User lookups.
    user_repo: Arc<UserRepository>,
    /// Stored session persistence.
    auth_session_repo: Arc<AuthSessionRepository>,
    /// Password hasher.
    password_hasher: Arc<PasswordHasher>,
    /// Auth configuration.
    config: AuthConfig,
}

impl AuthManager {
    /// Creates a new auth manager.
    pub fn new(
        user_repo: Arc<UserRepository>,
        auth_session_repo: Arc<AuthSessionRepository>,
        password_hasher: Arc<PasswordHasher>,
        config: AuthConfig,
    ) -> Self {
        Self {
            user_repo,
            auth_session_repo,
            password_hasher,
            config,
        }
    }

    /// Authenticate a user by email and password, issuing a new session.
    ///
    /// All credential failures collapse into the same generic error so the
    /// response does not reveal whether the email is registered.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<LoginOutcome> {
        let invalid = || AppError::authentication("Invalid email or password");

        let user = self
            .user_repo
            .find_by_email(email)
            .await?
            .ok_or_else(invalid)?;

        let Some(hash) = user.password_hash.as_deref() else {
            // Phone-registered accounts have no password to check.
            return Err(invalid());
        };

        if !self.password_hasher.verify_password(password, hash)? {
            return Err(invalid());
        }

        // Logins are the natural maintenance point: reap expired sessions
        // so the table does not grow without bound.
        self.cleanup_expired().await?;

        let session = self.issue_session(&user).await?;
        info!(user_id = %user.id, "Login successful");

        Ok(LoginOutcome { user, session })
    }

    /// Issue a fresh bearer session for an already-authenticated user.
    pub async fn issue_session(&self, user: &User) -> AppResult<AuthSession> {
        let token = generate_token();
        let expires_at = Utc::now() + chrono::Duration::days(self.config.token_ttl_days as i64);
        self.auth_session_repo
            .create(&token, user.id, expires_at)
            .await
    }

    /// Resolve a bearer identifier to its user.
    ///
    /// Expired identifiers are deleted on sight and rejected.
    pub async fn resolve(&self, token: &str) -> AppResult<User> {
        let unauthorized = || AppError::authentication("Invalid or expired session");

        let session = self
            .auth_session_repo
            .find_by_token(token)
            .await?
            .ok_or_else(unauthorized)?;

        if session.is_expired(Utc::now()) {
            self.auth_session_repo.delete(token).await?;
            return Err(unauthorized());
        }

        self.user_repo
            .find_by_id(session.user_id)
            .await?
            .ok_or_else(unauthorized)
    }

    /// Revoke a bearer identifier. Revoking an unknown identifier is a no-op.
    pub async fn logout(&self, token: &str) -> AppResult<()> {
        let revoked = self.auth_session_repo.delete(token).await?;
        if revoked {
            info!("Session revoked");
        }
        Ok(())
    }

    /// Delete stored sessions that have expired. Runs on every login.
    pub async fn cleanup_expired(&self) -> AppResult<u64> {
        let purged = self.auth_session_repo.delete_expired(Utc::now()).await?;
        if purged > 0 {
            info!(purged, "Removed expired sessions");
        }
        Ok(purged)
    }
}
