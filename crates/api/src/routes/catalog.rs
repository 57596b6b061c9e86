//! Route definitions for the public catalog projection.

use axum::routing::get;
use axum::Router;

use crate::handlers::catalog;
use crate::state::AppState;

/// Routes mounted at `/catalog`. Public, no auth gate.
///
/// ```text
/// GET /        -> public_catalog
/// GET /config  -> catalog_config
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(catalog::public_catalog))
        .route("/config", get(catalog::catalog_config))
}
