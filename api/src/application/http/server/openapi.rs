use crate::application::http::{
    file::router::FileApiDoc, menu_analysis::router::MenuAnalysisApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Menulens API"
    ),
    nest(
        (path = "/menu-analysis", api = MenuAnalysisApiDoc),
        (path = "/files", api = FileApiDoc),
    )
)]
pub struct ApiDoc;
