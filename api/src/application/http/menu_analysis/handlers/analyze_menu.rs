use axum::extract::State;
use chrono::{DateTime, Utc};
use menulens_core::domain::menu_analysis::{
    entities::DishAssessment, ports::MenuAnalysisService, value_objects::AnalyzeMenuInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    menu_analysis::validators::AnalyzeMenuRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MenuAnalysis {
    pub image_url: String,
    pub dishes: Vec<DishAssessment>,
    pub analyzed_at: DateTime<Utc>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MenuAnalysisResponse {
    pub data: MenuAnalysis,
}

#[utoipa::path(
    post,
    path = "",
    tag = "menu-analysis",
    summary = "Analyze a menu photo",
    description = "Runs the vision model on a publicly retrievable menu photo and returns one FODMAP assessment per dish.",
    responses(
        (status = 200, body = MenuAnalysisResponse),
        (status = 400, description = "Invalid image URL", body = ApiErrorResponse),
        (status = 422, description = "The model answer contained no usable JSON", body = ApiErrorResponse),
        (status = 502, description = "The vision service failed", body = ApiErrorResponse)
    ),
    request_body = AnalyzeMenuRequest
)]
pub async fn analyze_menu(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<AnalyzeMenuRequest>,
) -> Result<Response<MenuAnalysisResponse>, ApiError> {
    let dishes = state
        .service
        .analyze_menu(AnalyzeMenuInput {
            image_url: payload.image_url.clone(),
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(MenuAnalysisResponse {
        data: MenuAnalysis {
            image_url: payload.image_url,
            dishes,
            analyzed_at: Utc::now(),
        },
    }))
}
