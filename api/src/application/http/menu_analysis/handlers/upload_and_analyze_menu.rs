use axum::extract::{Multipart, State};
use chrono::Utc;
use menulens_core::domain::{
    menu_analysis::{ports::MenuAnalysisService, value_objects::AnalyzeMenuInput},
    storage::services::FileService,
};
use tracing::error;

use crate::application::http::{
    file::multipart::read_image_field,
    menu_analysis::handlers::analyze_menu::{MenuAnalysis, MenuAnalysisResponse},
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/upload",
    tag = "menu-analysis",
    summary = "Upload and analyze a menu photo",
    description = "Stores the uploaded menu photo in object storage, then analyzes it through its public URL.",
    request_body(content = String, description = "Menu photo in the `image` field", content_type = "multipart/form-data"),
    responses(
        (status = 200, body = MenuAnalysisResponse),
        (status = 400, description = "Missing or empty image", body = ApiErrorResponse),
        (status = 413, description = "Image too large", body = ApiErrorResponse),
        (status = 415, description = "Not an image", body = ApiErrorResponse),
        (status = 422, description = "The model answer contained no usable JSON", body = ApiErrorResponse),
        (status = 502, description = "The vision service failed", body = ApiErrorResponse)
    ),
)]
pub async fn upload_and_analyze_menu(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response<MenuAnalysisResponse>, ApiError> {
    let input = read_image_field(&mut multipart, "image").await?;
    let filename = input.filename.clone();

    let stored_object = state
        .service
        .upload_menu_image(input)
        .await
        .map_err(|e| {
            error!(error = %e, filename = %filename, "Failed to store menu image");
            ApiError::from(e)
        })?;

    let dishes = state
        .service
        .analyze_menu(AnalyzeMenuInput {
            image_url: stored_object.url.clone(),
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(MenuAnalysisResponse {
        data: MenuAnalysis {
            image_url: stored_object.url,
            dishes,
            analyzed_at: Utc::now(),
        },
    }))
}
