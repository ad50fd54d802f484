use axum::extract::{Multipart, State};
use menulens_core::domain::storage::{entities::StoredObject, services::FileService};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::application::http::{
    file::multipart::read_image_field,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UploadFileResponse {
    pub data: StoredObject,
}

#[utoipa::path(
    post,
    path = "/upload",
    tag = "file",
    summary = "Upload a menu photo",
    description = "Upload a menu photo via multipart form data. The photo is stored in object storage and its public URL returned.",
    request_body(content = String, description = "Menu photo in the `file` field", content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "File uploaded successfully", body = UploadFileResponse),
        (status = 400, description = "Bad request", body = ApiErrorResponse),
        (status = 413, description = "File too large", body = ApiErrorResponse),
        (status = 415, description = "Not an image", body = ApiErrorResponse)
    ),
)]
pub async fn upload_file(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response<UploadFileResponse>, ApiError> {
    let input = read_image_field(&mut multipart, "file").await?;
    let filename = input.filename.clone();
    let mime_type = input.mime_type.clone();

    let stored_object = state
        .service
        .upload_menu_image(input)
        .await
        .map_err(|e| {
            error!(
                error = %e,
                filename = %filename,
                mime_type = %mime_type,
                "Failed to upload file"
            );
            ApiError::from(e)
        })?;

    Ok(Response::Created(UploadFileResponse {
        data: stored_object,
    }))
}
