use std::future::Future;

use crate::domain::menu_analysis::{
    entities::{DishAssessment, MenuAnalysisError},
    value_objects::{AnalyzeMenuInput, VisionPrompt},
};

/// Client for a vision-capable completion service.
#[cfg_attr(test, mockall::automock)]
pub trait VisionClient: Send + Sync {
    /// Sends the prompt and returns the raw completion text. Implementations
    /// only produce `TransportFailure` or `EmptyCompletion`.
    fn complete(
        &self,
        prompt: VisionPrompt,
    ) -> impl Future<Output = Result<String, MenuAnalysisError>> + Send;
}

/// Service trait for the menu analysis pipeline
pub trait MenuAnalysisService: Send + Sync {
    fn analyze_menu(
        &self,
        input: AnalyzeMenuInput,
    ) -> impl Future<Output = Result<Vec<DishAssessment>, MenuAnalysisError>> + Send;
}
