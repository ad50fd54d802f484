use axum::{Router, extract::DefaultBodyLimit, routing::post};
use menulens_core::domain::storage::value_objects::MAX_MENU_IMAGE_SIZE;
use utoipa::OpenApi;

use super::handlers::{
    analyze_menu::{__path_analyze_menu, analyze_menu},
    upload_and_analyze_menu::{__path_upload_and_analyze_menu, upload_and_analyze_menu},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(analyze_menu, upload_and_analyze_menu))]
pub struct MenuAnalysisApiDoc;

pub fn menu_analysis_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/menu-analysis", state.args.server.root_path),
            post(analyze_menu),
        )
        .route(
            &format!("{}/menu-analysis/upload", state.args.server.root_path),
            post(upload_and_analyze_menu),
        )
        // Room for the multipart envelope on top of the largest accepted image
        .layer(DefaultBodyLimit::max(MAX_MENU_IMAGE_SIZE + 64 * 1024))
}
