//! Handlers for the `/products` resource (admin gate).
//!
//! Create and update accept the admin form (category/model/type/price), run
//! validation and name composition in `osaka_core`, then persist the
//! composed payload. Every successful mutation performs exactly one full
//! re-list and returns it in the response.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use osaka_core::error::CoreError;
use osaka_core::forms::{ProductForm, ProductPayload};
use osaka_core::types::DbId;
use osaka_db::models::product::{CreateProduct, Product, UpdateProduct};
use osaka_db::repositories::ProductRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AdminSession;
use crate::response::{DataResponse, MutationResponse};
use crate::state::AppState;

/// Request body for `PUT /products/{id}/active`.
#[derive(Debug, Deserialize)]
pub struct SetActiveRequest {
    pub is_active: bool,
}

/// GET /api/v1/products
pub async fn list(
    _session: AdminSession,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Product>>>> {
    let products = ProductRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: products }))
}

/// POST /api/v1/products
///
/// Validates the form, composes the display name and derived size, inserts,
/// and returns the created row plus the refreshed list.
pub async fn create(
    session: AdminSession,
    State(state): State<AppState>,
    Json(form): Json<ProductForm>,
) -> AppResult<(StatusCode, Json<MutationResponse<Product>>)> {
    let payload = form.into_payload().map_err(AppError::FormInvalid)?;

    let product = ProductRepo::create(&state.pool, &create_dto(payload)).await?;
    tracing::info!(
        product_id = product.id,
        name = %product.name,
        session_id = %session.session_id,
        "Product created",
    );

    let records = ProductRepo::list(&state.pool).await?;
    Ok((
        StatusCode::CREATED,
        Json(MutationResponse {
            data: product,
            records,
        }),
    ))
}

/// PUT /api/v1/products/{id}
///
/// Full-form update: the submitted form replaces name, category, size, and
/// price; description and image URL are only written when present.
pub async fn update(
    session: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(form): Json<ProductForm>,
) -> AppResult<Json<MutationResponse<Product>>> {
    let payload = form.into_payload().map_err(AppError::FormInvalid)?;

    let input = UpdateProduct {
        name: Some(payload.name),
        category: Some(payload.category),
        size: Some(payload.size),
        price: Some(payload.price),
        description: payload.description,
        image_url: payload.image_url,
        is_active: None,
    };
    let product = ProductRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id,
        }))?;
    tracing::info!(product_id = id, session_id = %session.session_id, "Product updated");

    let records = ProductRepo::list(&state.pool).await?;
    Ok(Json(MutationResponse {
        data: product,
        records,
    }))
}

/// PUT /api/v1/products/{id}/active
///
/// One-step toggle workflow. Toggling an id that no longer exists (deleted
/// by a concurrent session) is a 404; the caller keeps its last fetched
/// list until the next successful re-list.
pub async fn set_active(
    session: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<SetActiveRequest>,
) -> AppResult<Json<MutationResponse<Product>>> {
    let product = ProductRepo::set_active(&state.pool, id, input.is_active)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id,
        }))?;
    tracing::info!(
        product_id = id,
        is_active = input.is_active,
        session_id = %session.session_id,
        "Product visibility toggled",
    );

    let records = ProductRepo::list(&state.pool).await?;
    Ok(Json(MutationResponse {
        data: product,
        records,
    }))
}

/// DELETE /api/v1/products/{id}
///
/// Hard delete, irreversible. The client's confirmation dialog is the
/// confirmation step; this endpoint is the confirmed action. Returns the
/// refreshed list.
pub async fn delete(
    session: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Product>>>> {
    let deleted = ProductRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id,
        }));
    }
    tracing::info!(product_id = id, session_id = %session.session_id, "Product deleted");

    let records = ProductRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: records }))
}

fn create_dto(payload: ProductPayload) -> CreateProduct {
    CreateProduct {
        name: payload.name,
        category: payload.category,
        size: payload.size,
        price: payload.price,
        description: payload.description,
        image_url: payload.image_url,
        is_active: Some(true),
    }
}
