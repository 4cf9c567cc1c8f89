//! Share link resolution, password verification, download, and
//! registration handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;
use validator::Validate;

use sharebox_core::error::AppError;
use sharebox_entity::SharedFileView;
use sharebox_service::share::service::RegisterFileRequest as RegisterFile;

use crate::dto::request::{DownloadRequest, RegisterFileRequest, VerifyPasswordRequest};
use crate::dto::response::{DownloadResponse, MessageResponse, RegisteredFileResponse};
use crate::state::AppState;

/// GET /api/files/resolveShareLink/{code}
///
/// Expired links resolve with `"status": "expired"`; only unknown codes
/// are a 404.
pub async fn resolve_share_link(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<SharedFileView>, AppError> {
    let view = state.resolver.resolve(&code).await?;
    Ok(Json(view))
}

/// POST /api/files/verifyFilePassword
pub async fn verify_file_password(
    State(state): State<AppState>,
    Json(req): Json<VerifyPasswordRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    state
        .resolver
        .verify_password(&req.short_code, &req.password)
        .await?;

    Ok(Json(MessageResponse {
        message: "Password accepted".to_string(),
    }))
}

/// POST /api/files/download/{fileId}
///
/// The body is optional; links without a password gate need none.
pub async fn download_file(
    State(state): State<AppState>,
    Path(file_id): Path<Uuid>,
    body: Option<Json<DownloadRequest>>,
) -> Result<Json<DownloadResponse>, AppError> {
    let req = body.map(|Json(req)| req).unwrap_or_default();

    let grant = state
        .resolver
        .download(file_id, req.password.as_deref())
        .await?;

    Ok(Json(DownloadResponse {
        download_url: grant.download_url,
    }))
}

/// POST /api/files/register
///
/// Metadata seam for the upload collaborator: the bytes are already in
/// object storage when this is called.
pub async fn register_file(
    State(state): State<AppState>,
    Json(req): Json<RegisterFileRequest>,
) -> Result<(StatusCode, Json<RegisteredFileResponse>), AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    if req.has_expiry && req.expires_at.is_none() {
        return Err(AppError::validation(
            "expiresAt is required when hasExpiry is set",
        ));
    }
    if req.is_password && req.password.as_deref().unwrap_or_default().is_empty() {
        return Err(AppError::validation(
            "password is required when isPassword is set",
        ));
    }

    let file = state
        .share_service
        .register(RegisterFile {
            owner_id: req.owner_id,
            storage_key: req.storage_key,
            name: req.name,
            mime_type: req.mime_type,
            size_bytes: req.size,
            password: if req.is_password { req.password } else { None },
            expires_in_hours: if req.has_expiry { req.expires_at } else { None },
        })
        .await?;

    Ok((StatusCode::CREATED, Json(file.into())))
}
