//! Session tracking handlers — login/logout events and history reads.

use axum::Json;
use axum::extract::{Query, State};

use geodash_core::error::AppError;

use crate::dto::request::{SessionEventRequest, SessionHistoryQuery};
use crate::dto::response::{SessionActionResponse, SessionHistoryResponse};
use crate::state::AppState;

/// POST /api/auth/session
///
/// Records a login or logout event for a user.
pub async fn session_event(
    State(state): State<AppState>,
    Json(req): Json<SessionEventRequest>,
) -> Result<Json<SessionActionResponse>, AppError> {
    let user_id = req
        .user_id
        .ok_or_else(|| AppError::validation("userId is required"))?;
    let action = req
        .action
        .as_deref()
        .ok_or_else(|| AppError::validation("action is required"))?;
    let timestamp = req
        .timestamp
        .ok_or_else(|| AppError::validation("timestamp is required"))?;

    let response = match action {
        "login" => {
            let closed = state.tracker.record_login(user_id, timestamp).await?;
            SessionActionResponse {
                success: true,
                session_data: closed.map(Into::into),
                message: "Login time recorded".to_string(),
            }
        }
        "logout" => match state.tracker.record_logout(user_id, timestamp).await? {
            Some(record) => SessionActionResponse {
                success: true,
                session_data: Some(record.into()),
                message: "Logout time recorded".to_string(),
            },
            None => SessionActionResponse {
                success: true,
                session_data: None,
                message: "No active session found".to_string(),
            },
        },
        _ => {
            return Err(AppError::validation(
                "action must be \"login\" or \"logout\"",
            ));
        }
    };

    Ok(Json(response))
}

/// GET /api/auth/session?userId=...
///
/// Reads a user's session history and the currently open session.
pub async fn session_history(
    State(state): State<AppState>,
    Query(query): Query<SessionHistoryQuery>,
) -> Result<Json<SessionHistoryResponse>, AppError> {
    let user_id = query
        .user_id
        .ok_or_else(|| AppError::validation("userId is required"))?;

    let view = state.tracker.session_history(user_id).await?;

    Ok(Json(SessionHistoryResponse {
        session_history: view.records.into_iter().map(Into::into).collect(),
        current_session: view.current.map(Into::into),
    }))
}
