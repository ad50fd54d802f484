use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{api_entities::response::Response, app_state::AppState};

/// Non-secret runtime configuration exposed to UI clients.
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct PublicConfig {
    pub model: String,
    pub max_tokens: u32,
    pub max_image_size_bytes: usize,
}

pub async fn get_config(State(state): State<AppState>) -> Response<PublicConfig> {
    Response::OK(PublicConfig {
        model: state.args.llm.model.clone(),
        max_tokens: state.args.llm.max_tokens,
        max_image_size_bytes: menulens_core::domain::storage::value_objects::MAX_MENU_IMAGE_SIZE,
    })
}
