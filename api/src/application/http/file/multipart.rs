use axum::{
    extract::{Multipart, multipart::MultipartError},
    http::StatusCode,
};
use menulens_core::domain::storage::value_objects::{MAX_MENU_IMAGE_SIZE, UploadMenuImageInput};
use tracing::error;

use crate::application::http::server::api_entities::api_error::ApiError;

/// Reads the image uploaded under `field_name`, ignoring every other field.
pub async fn read_image_field(
    multipart: &mut Multipart,
    field_name: &str,
) -> Result<UploadMenuImageInput, ApiError> {
    while let Some(field) = multipart.next_field().await.map_err(|e| {
        error!("Failed to read multipart field: {}", e);
        multipart_error(e)
    })? {
        if field.name() != Some(field_name) {
            continue;
        }

        let filename = field.file_name().unwrap_or("menu").to_string();
        let mime_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();

        let payload = field.bytes().await.map_err(|e| {
            error!("Failed to read file bytes: {}", e);
            multipart_error(e)
        })?;

        return Ok(UploadMenuImageInput {
            filename,
            mime_type,
            payload,
        });
    }

    Err(ApiError::BadRequest(format!(
        "Missing '{}' field in multipart form",
        field_name
    )))
}

fn multipart_error(e: MultipartError) -> ApiError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ApiError::PayloadTooLarge(format!(
            "File too large. Max size is {} bytes",
            MAX_MENU_IMAGE_SIZE
        ))
    } else {
        ApiError::BadRequest(format!("Failed to read multipart form: {}", e.body_text()))
    }
}
