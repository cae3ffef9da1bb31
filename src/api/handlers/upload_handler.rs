//! Admin image upload handlers.

use axum::{
    extract::{multipart::MultipartRejection, DefaultBodyLimit, Multipart, State},
    http::StatusCode,
    response::Json,
    routing::post,
    Router,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::api::extractors::QueryParams;
use crate::api::AppState;
use crate::config::{UPLOAD_BODY_LIMIT, UPLOAD_FIELD_NAME};
use crate::errors::{AppError, AppResult};
use crate::types::ApiResponse;

/// Stored upload
#[derive(Debug, Serialize, ToSchema)]
pub struct UploadResponse {
    pub success: bool,
    /// Path the image is served under
    #[schema(example = "/uploads/0b8e6c1e-3f7a-4a55-9a51-7d1f0c6c2a10.png")]
    pub url: String,
    #[schema(example = "0b8e6c1e-3f7a-4a55-9a51-7d1f0c6c2a10.png")]
    pub filename: String,
}

/// Multipart body of the upload endpoint
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct UploadForm {
    /// JPEG, PNG, WebP or GIF image, at most 5 MiB
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
}

/// Upload delete query
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DeleteUploadQuery {
    /// Stored filename or `/uploads/<file>` path
    pub filename: Option<String>,
}

/// Create admin upload routes
pub fn upload_routes() -> Router<AppState> {
    Router::new().route(
        "/upload",
        post(upload_image)
            .delete(delete_image)
            .layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT)),
    )
}

fn multipart_error(status: StatusCode, detail: String) -> AppError {
    if status == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::validation("File too large. Maximum size is 5MB")
    } else {
        AppError::bad_request(detail)
    }
}

/// Upload a product image
#[utoipa::path(
    post,
    path = "/api/admin/upload",
    tag = "Uploads",
    request_body(content = UploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Image stored", body = UploadResponse),
        (status = 400, description = "Missing file, unsupported type or too large"),
        (status = 401, description = "Not authenticated")
    ),
    security(("session_cookie" = []))
)]
pub async fn upload_image(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> AppResult<Json<UploadResponse>> {
    let mut multipart =
        multipart.map_err(|e| multipart_error(e.status(), e.body_text()))?;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(e.status(), e.body_text()))?
    {
        if field.name() != Some(UPLOAD_FIELD_NAME) {
            continue;
        }

        let content_type = field.content_type().map(str::to_string);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| multipart_error(e.status(), e.body_text()))?;

        let stored = state
            .image_service
            .upload(content_type, bytes.to_vec())
            .await?;

        return Ok(Json(UploadResponse {
            success: true,
            url: stored.url,
            filename: stored.filename,
        }));
    }

    Err(AppError::validation("No file provided"))
}

/// Delete an uploaded image
#[utoipa::path(
    delete,
    path = "/api/admin/upload",
    tag = "Uploads",
    params(DeleteUploadQuery),
    responses(
        (status = 200, description = "Image deleted"),
        (status = 400, description = "Missing or unsafe filename"),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "File not found")
    ),
    security(("session_cookie" = []))
)]
pub async fn delete_image(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<DeleteUploadQuery>,
) -> AppResult<Json<ApiResponse<()>>> {
    let filename = query
        .filename
        .filter(|f| !f.is_empty())
        .ok_or_else(|| AppError::bad_request("Filename is required"))?;

    state.image_service.delete(&filename).await?;
    Ok(Json(ApiResponse::message("File deleted successfully")))
}
