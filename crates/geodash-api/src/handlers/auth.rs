//! Auth handlers — signup, login, logout, me.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use validator::Validate;

use geodash_core::error::AppError;
use geodash_service::account::Signup;

use crate::dto::request::{LoginRequest, SignupRequest};
use crate::dto::response::{AuthResponse, MessageResponse, UserResponse};
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/auth/signup
///
/// Registers a new account and logs it in.
pub async fn signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let user = state
        .account_service
        .signup(Signup {
            name: req.name,
            email: req.email,
            phone_number: req.phone_number,
            password: req.password,
        })
        .await?;

    let session = state.auth_manager.issue_session(&user).await?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            success: true,
            token: session.token,
            user: user.into(),
        }),
    ))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let outcome = state.auth_manager.login(&req.email, &req.password).await?;

    Ok(Json(AuthResponse {
        success: true,
        token: outcome.session.token,
        user: outcome.user.into(),
    }))
}

/// POST /api/auth/logout
///
/// Revokes the presented bearer identifier.
pub async fn logout(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<MessageResponse>, AppError> {
    state.auth_manager.logout(&auth.token).await?;

    Ok(Json(MessageResponse {
        success: true,
        message: "Logged out successfully".to_string(),
    }))
}

/// GET /api/auth/me
pub async fn me(auth: AuthUser) -> Json<UserResponse> {
    Json(auth.user.into())
}
