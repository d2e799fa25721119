//! `AuthUser` extractor — pulls the bearer identifier from the
//! Authorization header, resolves it, and injects the user.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use geodash_core::error::AppError;
use geodash_entity::user::User;

use crate::state::AppState;

/// Extracted authenticated user available in handlers.
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The resolved user.
    pub user: User,
    /// The raw bearer identifier that authenticated the request.
    pub token: String,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::authentication("Missing Authorization header"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::authentication("Invalid Authorization header format"))?;

        let user = state.auth_manager.resolve(token).await?;

        Ok(AuthUser {
            user,
            token: token.to_string(),
        })
    }
}
