//! Route definitions for hero slides.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::hero_slide;
use crate::state::AppState;

/// Routes mounted at `/hero-slides`. All require an admin session.
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
        .route("/", get(hero_slide::list).post(hero_slide::create))
        .route("/{id}", put(hero_slide::update).delete(hero_slide::delete))
        .route("/{id}/active", put(hero_slide::set_active))
}
