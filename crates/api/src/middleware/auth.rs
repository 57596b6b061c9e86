//! Admin-session extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use osaka_core::error::CoreError;

use crate::auth::token::validate_session_token;
use crate::error::AppError;
use crate::state::AppState;

/// Valid admin session extracted from a Bearer token in the `Authorization`
/// header.
///
/// Use this as an extractor parameter in any handler behind the admin gate:
///
/// ```ignore
/// async fn my_handler(session: AdminSession) -> AppResult<Json<()>> {
///     tracing::info!(session_id = %session.session_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AdminSession {
    /// The token's `jti` claim, for log correlation.
    pub session_id: String,
}

impl FromRequestParts<AppState> for AdminSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;

        let claims = validate_session_token(token, &state.config.token).map_err(|_| {
            AppError::Core(CoreError::Unauthorized("Invalid or expired session".into()))
        })?;

        Ok(AdminSession {
            session_id: claims.jti,
        })
    }
}
