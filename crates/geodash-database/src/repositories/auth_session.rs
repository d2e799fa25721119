//! Authentication session repository implementation.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use geodash_core::error::{AppError, ErrorKind};
use geodash_core::result::AppResult;
use geodash_entity::token::AuthSession;

/// Repository for stored authentication sessions.
#[derive(Debug, Clone)]
pub struct AuthSessionRepository {
    pool: PgPool,
}

impl AuthSessionRepository {
    /// Create a new auth session repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Persist a newly issued session identifier.
    pub async fn create(
        &self,
        token: &str,
        user_id: Uuid,
        expires_at: DateTime<Utc>,
    ) -> AppResult<AuthSession> {
        sqlx::query_as::<_, AuthSession>(
            "INSERT INTO auth_sessions (token, user_id, expires_at) \
             VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(token)
        .bind(user_id)
        .bind(expires_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create auth session", e))
    }

    /// Find a stored session by its identifier.
    pub async fn find_by_token(&self, token: &str) -> AppResult<Option<AuthSession>> {
        sqlx::query_as::<_, AuthSession>("SELECT * FROM auth_sessions WHERE token = $1")
            .bind(token)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find auth session", e)
            })
    }

    /// Delete a stored session, revoking the identifier.
    pub async fn delete(&self, token: &str) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM auth_sessions WHERE token = $1")
            .bind(token)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete auth session", e)
            })?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete all sessions that expired before the given cutoff.
    pub async fn delete_expired(&self, before: DateTime<Utc>) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM auth_sessions WHERE expires_at < $1")
            .bind(before)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to cleanup auth sessions", e)
            })?;
        Ok(result.rows_affected())
    }
}
