//! Handlers for the `/hero-slides` resource (admin gate).
//!
//! Same mutation contract as products: validate, persist, one full re-list
//! in the response. Slides have no name composition; validation only
//! requires a title and an image.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use osaka_core::error::CoreError;
use osaka_core::forms::{AdminForm, HeroSlideForm};
use osaka_core::types::DbId;
use osaka_db::models::hero_slide::{CreateHeroSlide, HeroSlide, UpdateHeroSlide};
use osaka_db::repositories::HeroSlideRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AdminSession;
use crate::response::{DataResponse, MutationResponse};
use crate::state::AppState;

/// Request body for `PUT /hero-slides/{id}/active`.
#[derive(Debug, Deserialize)]
pub struct SetActiveRequest {
    pub is_active: bool,
}

/// GET /api/v1/hero-slides
pub async fn list(
    _session: AdminSession,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<HeroSlide>>>> {
    let slides = HeroSlideRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: slides }))
}

/// POST /api/v1/hero-slides
pub async fn create(
    session: AdminSession,
    State(state): State<AppState>,
    Json(form): Json<HeroSlideForm>,
) -> AppResult<(StatusCode, Json<MutationResponse<HeroSlide>>)> {
    let violations = form.violations();
    if !violations.is_empty() {
        return Err(AppError::FormInvalid(violations));
    }

    let input = CreateHeroSlide {
        title: form.title,
        description: form.description,
        image_url: form.image_url,
        display_order: Some(form.display_order),
        is_active: Some(true),
    };
    let slide = HeroSlideRepo::create(&state.pool, &input).await?;
    tracing::info!(
        slide_id = slide.id,
        title = %slide.title,
        session_id = %session.session_id,
        "Hero slide created",
    );

    let records = HeroSlideRepo::list(&state.pool).await?;
    Ok((
        StatusCode::CREATED,
        Json(MutationResponse {
            data: slide,
            records,
        }),
    ))
}

/// PUT /api/v1/hero-slides/{id}
pub async fn update(
    session: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(form): Json<HeroSlideForm>,
) -> AppResult<Json<MutationResponse<HeroSlide>>> {
    let violations = form.violations();
    if !violations.is_empty() {
        return Err(AppError::FormInvalid(violations));
    }

    let input = UpdateHeroSlide {
        title: Some(form.title),
        description: form.description,
        image_url: Some(form.image_url),
        display_order: Some(form.display_order),
        is_active: None,
    };
    let slide = HeroSlideRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "HeroSlide",
            id,
        }))?;
    tracing::info!(slide_id = id, session_id = %session.session_id, "Hero slide updated");

    let records = HeroSlideRepo::list(&state.pool).await?;
    Ok(Json(MutationResponse {
        data: slide,
        records,
    }))
}

/// PUT /api/v1/hero-slides/{id}/active
pub async fn set_active(
    session: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<SetActiveRequest>,
) -> AppResult<Json<MutationResponse<HeroSlide>>> {
    let slide = HeroSlideRepo::set_active(&state.pool, id, input.is_active)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "HeroSlide",
            id,
        }))?;
    tracing::info!(
        slide_id = id,
        is_active = input.is_active,
        session_id = %session.session_id,
        "Hero slide visibility toggled",
    );

    let records = HeroSlideRepo::list(&state.pool).await?;
    Ok(Json(MutationResponse {
        data: slide,
        records,
    }))
}

/// DELETE /api/v1/hero-slides/{id}
///
/// Hard delete, irreversible. Returns the refreshed list.
pub async fn delete(
    session: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<HeroSlide>>>> {
    let deleted = HeroSlideRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "HeroSlide",
            id,
        }));
    }
    tracing::info!(slide_id = id, session_id = %session.session_id, "Hero slide deleted");

    let records = HeroSlideRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: records }))
}
