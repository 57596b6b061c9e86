//! Handlers for the `/product-types` resource (admin gate).
//!
//! Type names are unique ignoring case. The duplicate check runs before the
//! insert so a rejected add performs no store mutation; the
//! `uq_product_types_name_lower` index remains as a backstop for two
//! sessions racing past the check (mapped to 409 by the error layer).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use osaka_core::error::CoreError;
use osaka_core::types::DbId;
use osaka_db::models::product_type::{CreateProductType, ProductType};
use osaka_db::repositories::ProductTypeRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AdminSession;
use crate::response::{DataResponse, MutationResponse};
use crate::state::AppState;

/// GET /api/v1/product-types
pub async fn list(
    _session: AdminSession,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<ProductType>>>> {
    let types = ProductTypeRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: types }))
}

/// POST /api/v1/product-types
pub async fn create(
    session: AdminSession,
    State(state): State<AppState>,
    Json(mut input): Json<CreateProductType>,
) -> AppResult<(StatusCode, Json<MutationResponse<ProductType>>)> {
    input.name = input.name.trim().to_string();
    if input.name.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Type name is required".into(),
        )));
    }

    if ProductTypeRepo::exists_by_name_ci(&state.pool, &input.name).await? {
        return Err(AppError::Core(CoreError::Validation(format!(
            "A type named '{}' already exists",
            input.name
        ))));
    }

    let product_type = ProductTypeRepo::create(&state.pool, &input).await?;
    tracing::info!(
        type_id = product_type.id,
        name = %product_type.name,
        session_id = %session.session_id,
        "Product type created",
    );

    let records = ProductTypeRepo::list(&state.pool).await?;
    Ok((
        StatusCode::CREATED,
        Json(MutationResponse {
            data: product_type,
            records,
        }),
    ))
}

/// DELETE /api/v1/product-types/{id}
///
/// Hard delete. Products whose composed names reference the deleted type
/// keep their stored name string; there is no cascade and no reference
/// check. Returns the refreshed list.
pub async fn delete(
    session: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<ProductType>>>> {
    let deleted = ProductTypeRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "ProductType",
            id,
        }));
    }
    tracing::info!(type_id = id, session_id = %session.session_id, "Product type deleted");

    let records = ProductTypeRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: records }))
}
