use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use menulens_core::domain::{
    common::entities::app_errors::CoreError, menu_analysis::entities::MenuAnalysisError,
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    ValidationError(String),

    #[error("{0}")]
    PayloadTooLarge(String),

    #[error("{0}")]
    UnsupportedMediaType(String),

    #[error("{0}")]
    Analysis(MenuAnalysisError),

    #[error("{0}")]
    InternalServerError(String),
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ApiErrorResponse {
    pub code: String,
    pub status: u16,
    pub message: String,
    /// Full completion text, present when the model answered with malformed JSON
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_response: Option<String>,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) | ApiError::ValidationError(_) => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ApiError::Analysis(e) => match e {
                MenuAnalysisError::TransportFailure { .. } | MenuAnalysisError::EmptyCompletion => {
                    StatusCode::BAD_GATEWAY
                }
                MenuAnalysisError::NoJsonFound | MenuAnalysisError::MalformedJson { .. } => {
                    StatusCode::UNPROCESSABLE_ENTITY
                }
            },
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "bad_request",
            ApiError::ValidationError(_) => "validation_error",
            ApiError::PayloadTooLarge(_) => "payload_too_large",
            ApiError::UnsupportedMediaType(_) => "unsupported_media_type",
            ApiError::Analysis(e) => e.code(),
            ApiError::InternalServerError(_) => "internal_server_error",
        }
    }

    fn user_message(&self) -> String {
        match self {
            ApiError::Analysis(MenuAnalysisError::TransportFailure { .. }) => {
                "The menu analysis service is unavailable, please try again".to_string()
            }
            ApiError::Analysis(MenuAnalysisError::EmptyCompletion) => {
                "The menu analysis service returned no answer, please try again".to_string()
            }
            ApiError::Analysis(MenuAnalysisError::NoJsonFound) => {
                "No dishes could be read from this image".to_string()
            }
            ApiError::Analysis(MenuAnalysisError::MalformedJson { .. }) => {
                "The menu analysis could not be read, please try again".to_string()
            }
            other => other.to_string(),
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::Invalid => ApiError::BadRequest("Invalid input".to_string()),
            CoreError::FileTooLarge => ApiError::PayloadTooLarge("File too large".to_string()),
            CoreError::UnsupportedMediaType(mime_type) => ApiError::UnsupportedMediaType(format!(
                "Unsupported media type: {}",
                mime_type
            )),
            CoreError::Analysis(e) => ApiError::Analysis(e),
            CoreError::ObjectStorageError(_) | CoreError::ConfigurationError(_) => {
                ApiError::InternalServerError("Internal server error".to_string())
            }
        }
    }
}

impl From<MenuAnalysisError> for ApiError {
    fn from(error: MenuAnalysisError) -> Self {
        ApiError::Analysis(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        if let ApiError::Analysis(e) = &self {
            tracing::warn!(error = %e, code = e.code(), "Menu analysis failed");
        }

        let body = ApiErrorResponse {
            code: self.code().to_string(),
            status: status.as_u16(),
            message: self.user_message(),
            raw_response: match self {
                ApiError::Analysis(e) => e.raw_response().map(str::to_string),
                _ => None,
            },
        };

        (status, Json(body)).into_response()
    }
}

/// JSON extractor that runs `validator` rules before handing the payload over.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e: JsonRejection| ApiError::BadRequest(e.body_text()))?;

        value
            .validate()
            .map_err(|e| ApiError::ValidationError(e.to_string()))?;

        Ok(ValidateJson(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_errors_are_distinguishable() {
        let cases = [
            (MenuAnalysisError::transport("boom"), StatusCode::BAD_GATEWAY, "transport_failure"),
            (MenuAnalysisError::EmptyCompletion, StatusCode::BAD_GATEWAY, "empty_completion"),
            (MenuAnalysisError::NoJsonFound, StatusCode::UNPROCESSABLE_ENTITY, "no_json_found"),
            (
                MenuAnalysisError::MalformedJson {
                    reason: "EOF".to_string(),
                    raw_response: "[".to_string(),
                },
                StatusCode::UNPROCESSABLE_ENTITY,
                "malformed_json",
            ),
        ];

        for (error, status, code) in cases {
            let api_error = ApiError::from(error);
            assert_eq!(api_error.status(), status);
            assert_eq!(api_error.code(), code);
        }
    }

    #[test]
    fn test_core_errors_map_to_http_statuses() {
        assert_eq!(
            ApiError::from(CoreError::FileTooLarge).status(),
            StatusCode::PAYLOAD_TOO_LARGE
        );
        assert_eq!(
            ApiError::from(CoreError::UnsupportedMediaType("text/plain".to_string())).status(),
            StatusCode::UNSUPPORTED_MEDIA_TYPE
        );
        assert_eq!(
            ApiError::from(CoreError::ObjectStorageError("down".to_string())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::from(CoreError::Analysis(MenuAnalysisError::NoJsonFound)).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }
}
