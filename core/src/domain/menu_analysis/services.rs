use tracing::instrument;

use crate::domain::{
    common::services::Service,
    menu_analysis::{
        entities::{DishAssessment, MenuAnalysisError},
        extractor::extract_json_value,
        normalizer::normalize_dishes,
        ports::{MenuAnalysisService, VisionClient},
        prompt::build_menu_prompt,
        value_objects::AnalyzeMenuInput,
    },
    storage::ports::ObjectStoragePort,
};

impl<LLM, OS> MenuAnalysisService for Service<LLM, OS>
where
    LLM: VisionClient,
    OS: ObjectStoragePort,
{
    #[instrument(skip(self, input), fields(image_url = %input.image_url))]
    async fn analyze_menu(
        &self,
        input: AnalyzeMenuInput,
    ) -> Result<Vec<DishAssessment>, MenuAnalysisError> {
        // 1. Build prompt
        let prompt = build_menu_prompt(&input.image_url);

        // 2. Call the vision model
        let completion = self.vision_client.complete(prompt).await?;

        // 3. Extract the JSON payload
        let parsed = extract_json_value(&completion).inspect_err(|e| {
            tracing::warn!(
                error = %e,
                completion_len = completion.len(),
                "Could not extract JSON from completion"
            );
        })?;

        // 4. Normalize into dish assessments
        let dishes = normalize_dishes(parsed);
        tracing::info!(dish_count = dishes.len(), "Menu analyzed");

        Ok(dishes)
    }
}
