//! Application builder — wires repositories, services, and state into an
//! Axum app.

use std::sync::Arc;

use axum::Router;
use tracing::info;

use geodash_auth::manager::AuthManager;
use geodash_auth::password::hasher::PasswordHasher;
use geodash_auth::password::validator::PasswordValidator;
use geodash_core::config::AppConfig;
use geodash_core::error::AppError;
use geodash_database::DatabasePool;
use geodash_database::repositories::auth_session::AuthSessionRepository;
use geodash_database::repositories::session::SessionRepository;
use geodash_database::repositories::user::UserRepository;
use geodash_service::account::service::AccountService;
use geodash_service::tracker::service::SessionTracker;

use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
}

/// Constructs the application state from configuration and a database pool.
pub fn build_state(config: AppConfig, db: DatabasePool) -> AppState {
    let user_repo = Arc::new(UserRepository::new(db.pool().clone()));
    let session_repo = Arc::new(SessionRepository::new(db.pool().clone()));
    let auth_session_repo = Arc::new(AuthSessionRepository::new(db.pool().clone()));

    let password_hasher = Arc::new(PasswordHasher::new());
    let password_validator = Arc::new(PasswordValidator::new(&config.auth));

    let auth_manager = Arc::new(AuthManager::new(
        Arc::clone(&user_repo),
        Arc::clone(&auth_session_repo),
        Arc::clone(&password_hasher),
        config.auth.clone(),
    ));

    let tracker = Arc::new(SessionTracker::new(
        Arc::clone(&user_repo),
        Arc::clone(&session_repo),
        config.session.clone(),
    ));

    let account_service = Arc::new(AccountService::new(
        Arc::clone(&user_repo),
        Arc::clone(&password_hasher),
        Arc::clone(&password_validator),
    ));

    AppState {
        config: Arc::new(config),
        db,
        password_hasher,
        auth_manager,
        user_repo,
        session_repo,
        auth_session_repo,
        tracker,
        account_service,
    }
}

/// Runs the GeoDash server with the given configuration and database pool.
pub async fn run_server(config: AppConfig, db: DatabasePool) -> Result<(), AppError> {
    let addr = format!("{}:{}", config.server.host, config.server.port);

    let state = build_state(config, db.clone());
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    info!("GeoDash server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    db.close().await;
    Ok(())
}

/// Resolves when the process receives Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
