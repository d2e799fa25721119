//! Session tracking repository implementation.
//!
//! All writes that touch both the per-user open-session marker and the
//! session record history run inside a single transaction, with the state
//! row locked `FOR UPDATE` so concurrent logins and logouts for the same
//! user serialize cleanly.

use chrono::{DateTime, Utc};
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use geodash_core::error::{AppError, ErrorKind};
use geodash_core::result::AppResult;
use geodash_entity::session::{
    SessionRecord, SessionState, format_duration, session_duration_seconds,
};

/// Repository for per-user session state and completed session records.
#[derive(Debug, Clone)]
pub struct SessionRepository {
    pool: PgPool,
}

impl SessionRepository {
    /// Create a new session repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find the session state row for a user.
    pub async fn find_state(&self, user_id: Uuid) -> AppResult<Option<SessionState>> {
        sqlx::query_as::<_, SessionState>("SELECT * FROM session_states WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find session state", e)
            })
    }

    /// List a user's most recent completed sessions, oldest first.
    pub async fn find_history(&self, user_id: Uuid, limit: u32) -> AppResult<Vec<SessionRecord>> {
        let mut records = sqlx::query_as::<_, SessionRecord>(
            "SELECT * FROM session_records WHERE user_id = $1 \
             ORDER BY logout_time DESC, created_at DESC LIMIT $2",
        )
        .bind(user_id)
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list session history", e)
        })?;

        records.reverse();
        Ok(records)
    }

    /// Open a session, discarding any previously open one.
    ///
    /// The marker is overwritten in place; an abandoned session leaves no
    /// record behind.
    pub async fn open_session(&self, user_id: Uuid, login_time: DateTime<Utc>) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO session_states (user_id, last_login_time, updated_at) \
             VALUES ($1, $2, NOW()) \
             ON CONFLICT (user_id) DO UPDATE \
             SET last_login_time = EXCLUDED.last_login_time, updated_at = NOW()",
        )
        .bind(user_id)
        .bind(login_time)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to open session", e))?;
        Ok(())
    }

    /// Open a session, first closing any previously open one.
    ///
    /// If a session was open, it is closed with the new login time as its
    /// logout time and the resulting record is returned.
    pub async fn open_session_closing_previous(
        &self,
        user_id: Uuid,
        login_time: DateTime<Utc>,
        history_limit: u32,
    ) -> AppResult<Option<SessionRecord>> {
        let mut tx = self.begin().await?;

        let previous_login = claim_open_login(&mut tx, user_id).await?;
        let record = match previous_login {
            Some(opened_at) => {
                Some(insert_record(&mut tx, user_id, opened_at, login_time, history_limit).await?)
            }
            None => None,
        };

        sqlx::query(
            "INSERT INTO session_states (user_id, last_login_time, updated_at) \
             VALUES ($1, $2, NOW()) \
             ON CONFLICT (user_id) DO UPDATE \
             SET last_login_time = EXCLUDED.last_login_time, updated_at = NOW()",
        )
        .bind(user_id)
        .bind(login_time)
        .execute(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to open session", e))?;

        self.commit(tx).await?;
        Ok(record)
    }

    /// Close the open session for a user, if one exists.
    ///
    /// Clears the marker, inserts the completed record, and trims the
    /// history to `history_limit` entries, all in one transaction. Returns
    /// `None` when no session was open.
    pub async fn close_session(
        &self,
        user_id: Uuid,
        logout_time: DateTime<Utc>,
        history_limit: u32,
    ) -> AppResult<Option<SessionRecord>> {
        let mut tx = self.begin().await?;

        let Some(login_time) = claim_open_login(&mut tx, user_id).await? else {
            self.commit(tx).await?;
            return Ok(None);
        };

        sqlx::query(
            "UPDATE session_states SET last_login_time = NULL, updated_at = NOW() \
             WHERE user_id = $1",
        )
        .bind(user_id)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to clear session state", e)
        })?;

        let record = insert_record(&mut tx, user_id, login_time, logout_time, history_limit).await?;

        self.commit(tx).await?;
        Ok(Some(record))
    }

    async fn begin(&self) -> AppResult<Transaction<'static, Postgres>> {
        self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })
    }

    async fn commit(&self, tx: Transaction<'static, Postgres>) -> AppResult<()> {
        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit transaction", e)
        })
    }
}

/// Lock the user's state row and return the open-session login time, if any.
async fn claim_open_login(
    tx: &mut Transaction<'static, Postgres>,
    user_id: Uuid,
) -> AppResult<Option<DateTime<Utc>>> {
    let row: Option<Option<DateTime<Utc>>> = sqlx::query_scalar(
        "SELECT last_login_time FROM session_states WHERE user_id = $1 FOR UPDATE",
    )
    .bind(user_id)
    .fetch_optional(&mut **tx)
    .await
    .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to lock session state", e))?;

    Ok(row.flatten())
}

/// Insert a completed session record and trim history to the limit.
async fn insert_record(
    tx: &mut Transaction<'static, Postgres>,
    user_id: Uuid,
    login_time: DateTime<Utc>,
    logout_time: DateTime<Utc>,
    history_limit: u32,
) -> AppResult<SessionRecord> {
    let duration_seconds = session_duration_seconds(login_time, logout_time);
    let formatted_duration = format_duration(duration_seconds);

    let record = sqlx::query_as::<_, SessionRecord>(
        "INSERT INTO session_records \
         (user_id, login_time, logout_time, duration_seconds, formatted_duration) \
         VALUES ($1, $2, $3, $4, $5) RETURNING *",
    )
    .bind(user_id)
    .bind(login_time)
    .bind(logout_time)
    .bind(duration_seconds)
    .bind(&formatted_duration)
    .fetch_one(&mut **tx)
    .await
    .map_err(|e| {
        AppError::with_source(ErrorKind::Database, "Failed to insert session record", e)
    })?;

    // Oldest records beyond the cap are dropped as new ones arrive.
    sqlx::query(
        "DELETE FROM session_records WHERE user_id = $1 AND id NOT IN \
         (SELECT id FROM session_records WHERE user_id = $1 \
          ORDER BY logout_time DESC, created_at DESC LIMIT $2)",
    )
    .bind(user_id)
    .bind(history_limit as i64)
    .execute(&mut **tx)
    .await
    .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to trim session history", e))?;

    Ok(record)
}
