//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use geodash_auth::manager::AuthManager;
use geodash_auth::password::hasher::PasswordHasher;
use geodash_core::config::AppConfig;
use geodash_database::DatabasePool;
use geodash_database::repositories::auth_session::AuthSessionRepository;
use geodash_database::repositories::session::SessionRepository;
use geodash_database::repositories::user::UserRepository;
use geodash_service::account::service::AccountService;
use geodash_service::tracker::service::SessionTracker;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// Every field is cheap to clone across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// PostgreSQL pool handle
    pub db: DatabasePool,

    // ── Auth ─────────────────────────────────────────────────
    /// Password hasher (Argon2)
    pub password_hasher: Arc<PasswordHasher>,
    /// Login, logout, and bearer credential resolution
    pub auth_manager: Arc<AuthManager>,

    // ── Repositories ─────────────────────────────────────────
    /// User repository
    pub user_repo: Arc<UserRepository>,
    /// Session state and record repository
    pub session_repo: Arc<SessionRepository>,
    /// Stored auth session repository
    pub auth_session_repo: Arc<AuthSessionRepository>,

    // ── Services ─────────────────────────────────────────────
    /// Session lifecycle tracker
    pub tracker: Arc<SessionTracker>,
    /// Account registration service
    pub account_service: Arc<AccountService>,
}
