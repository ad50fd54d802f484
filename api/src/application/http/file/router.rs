use axum::{Router, extract::DefaultBodyLimit, routing::post};
use menulens_core::domain::storage::value_objects::MAX_MENU_IMAGE_SIZE;
use utoipa::OpenApi;

use super::handlers::upload_file::{__path_upload_file, upload_file};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(upload_file))]
pub struct FileApiDoc;

pub fn file_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/files/upload", state.args.server.root_path),
            post(upload_file),
        )
        .layer(DefaultBodyLimit::max(MAX_MENU_IMAGE_SIZE + 64 * 1024))
}
