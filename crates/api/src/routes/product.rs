//! Route definitions for products.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::product;
use crate::state::AppState;

/// Routes mounted at `/products`. All require an admin session.
///
/// ```text
/// GET    /             -> list
/// POST   /             -> create
/// PUT    /{id}         -> update
/// DELETE /{id}         -> delete
/// PUT    /{id}/active  -> set_active
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(product::list).post(product::create))
        .route("/{id}", put(product::update).delete(product::delete))
        .route("/{id}/active", put(product::set_active))
}
