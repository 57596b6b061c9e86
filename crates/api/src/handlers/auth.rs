//! Handler for the `/auth` resource (admin login).

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use osaka_core::error::CoreError;

use crate::auth::token::generate_session_token;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    /// Session lifetime in seconds.
    pub expires_in: i64,
}

/// POST /api/v1/auth/login
///
/// Check the shared admin password and mint a session token. This is an
/// access gate, not a cryptographic identity system: there is a single
/// shared admin identity and no account lockout.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    if input.password != state.config.admin_password {
        tracing::warn!("Rejected admin login attempt");
        return Err(AppError::Core(CoreError::Unauthorized(
            "Incorrect password".into(),
        )));
    }

    let token = generate_session_token(&state.config.token)
        .map_err(|e| AppError::Core(CoreError::Internal(e.to_string())))?;

    tracing::info!("Admin session opened");
    Ok(Json(LoginResponse {
        token,
        expires_in: state.config.token.session_expiry_mins * 60,
    }))
}
