//! Route definitions for image uploads.

use axum::extract::DefaultBodyLimit;
use axum::routing::post;
use axum::Router;

use crate::handlers::upload;
use crate::state::AppState;

/// Body limit for upload requests: generously above the 5 MiB upload cap so
/// an oversized file reaches the size precondition and gets a structured
/// validation error rather than a bare 413.
const UPLOAD_BODY_LIMIT: usize = 8 * 1024 * 1024;

/// Routes mounted at `/uploads`. All require an admin session.
///
/// ```text
/// POST /hero     -> upload_hero
/// POST /product  -> upload_product
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/hero", post(upload::upload_hero))
        .route("/product", post(upload::upload_product))
        .layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT))
}
