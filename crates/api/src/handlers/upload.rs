//! Handlers for multipart image uploads (admin gate).
//!
//! Preconditions (media type, size limit) run before the store is touched,
//! so a rejected file never leaves the process. Keys come from
//! `osaka_core::upload`, which makes collisions under concurrent sessions
//! practically impossible; the store additionally refuses overwrites.

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use osaka_core::upload::{new_object_key, validate_upload, UploadKind};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AdminSession;
use crate::response::DataResponse;
use crate::state::AppState;

/// Result of a stored upload: the key within the bucket and the public URL
/// callers persist on the owning record.
#[derive(Debug, Serialize)]
pub struct UploadResult {
    pub key: String,
    pub url: String,
}

/// POST /api/v1/uploads/hero
pub async fn upload_hero(
    session: AdminSession,
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<DataResponse<UploadResult>>)> {
    store_upload(session, state, UploadKind::Hero, multipart).await
}

/// POST /api/v1/uploads/product
pub async fn upload_product(
    session: AdminSession,
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<DataResponse<UploadResult>>)> {
    store_upload(session, state, UploadKind::Product, multipart).await
}

async fn store_upload(
    session: AdminSession,
    state: AppState,
    kind: UploadKind,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<DataResponse<UploadResult>>)> {
    let mut file: Option<(String, String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "file" => {
                let filename = field.file_name().unwrap_or("upload.bin").to_string();
                let content_type = field.content_type().unwrap_or("").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                file = Some((filename, content_type, data.to_vec()));
            }
            _ => {} // ignore unknown fields
        }
    }

    let (filename, content_type, data) =
        file.ok_or_else(|| AppError::BadRequest("Missing required 'file' field".into()))?;

    validate_upload(&content_type, data.len() as u64)?;

    let key = new_object_key(kind, &filename);
    let url = state
        .object_store
        .put(kind.bucket(), &key, &content_type, data)
        .await?;

    tracing::info!(
        bucket = kind.bucket(),
        key = %key,
        session_id = %session.session_id,
        "Image uploaded",
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: UploadResult { key, url },
        }),
    ))
}
