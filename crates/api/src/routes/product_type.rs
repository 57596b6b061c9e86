//! Route definitions for product types.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::product_type;
use crate::state::AppState;

/// Routes mounted at `/product-types`. All require an admin session.
///
/// ```text
/// GET    /      -> list
/// POST   /      -> create
/// DELETE /{id}  -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(product_type::list).post(product_type::create))
        .route("/{id}", delete(product_type::delete))
}
