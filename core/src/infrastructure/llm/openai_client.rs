use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::domain::{
    common::{LLMConfig, entities::app_errors::CoreError},
    menu_analysis::{entities::MenuAnalysisError, ports::VisionClient, value_objects::VisionPrompt},
};

/// Client for OpenAI-compatible `chat/completions` endpoints with image input.
#[derive(Debug, Clone)]
pub struct OpenAiVisionClient {
    api_key: String,
    model: String,
    max_tokens: u32,
    endpoint: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<Message>,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct Message {
    role: &'static str,
    content: Vec<ContentPart>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentPart {
    Text { text: String },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Debug, Serialize)]
struct ImageUrl {
    url: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    #[serde(default)]
    message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    error: ProviderError,
}

#[derive(Debug, Deserialize)]
struct ProviderError {
    message: String,
}

impl OpenAiVisionClient {
    pub fn new(config: LLMConfig) -> Result<Self, CoreError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| CoreError::ConfigurationError(format!("invalid HTTP client: {}", e)))?;

        let endpoint = format!("{}/chat/completions", config.base_url.trim_end_matches('/'));

        tracing::info!(
            endpoint = %endpoint,
            model = %config.model,
            max_tokens = config.max_tokens,
            "Initializing vision client"
        );

        Ok(Self {
            api_key: config.api_key,
            model: config.model,
            max_tokens: config.max_tokens,
            endpoint,
            client,
        })
    }

    fn build_request(&self, prompt: VisionPrompt) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![Message {
                role: "user",
                content: vec![
                    ContentPart::Text {
                        text: prompt.instructions,
                    },
                    ContentPart::ImageUrl {
                        image_url: ImageUrl {
                            url: prompt.image_url,
                        },
                    },
                ],
            }],
            max_tokens: self.max_tokens,
        }
    }
}

impl VisionClient for OpenAiVisionClient {
    #[instrument(skip(self, prompt), fields(model = %self.model))]
    async fn complete(&self, prompt: VisionPrompt) -> Result<String, MenuAnalysisError> {
        let request = self.build_request(prompt);

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Vision API request failed: {}", e);
                MenuAnalysisError::transport(format!("request failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Vision API error: {} - {}", status, error_text);
            return Err(MenuAnalysisError::transport(provider_error_message(
                status,
                &error_text,
            )));
        }

        let completion: ChatCompletionResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse vision API response: {}", e);
            MenuAnalysisError::transport(format!("undecodable response: {}", e))
        })?;

        completion_text(completion)
    }
}

/// Prefers the provider's structured `error.message`, falling back to the raw body.
fn provider_error_message(status: StatusCode, body: &str) -> String {
    let detail = serde_json::from_str::<ProviderErrorBody>(body)
        .map(|b| b.error.message)
        .unwrap_or_else(|_| body.trim().to_string());

    if detail.is_empty() {
        format!("provider returned {}", status)
    } else {
        format!("provider returned {}: {}", status, detail)
    }
}

fn completion_text(response: ChatCompletionResponse) -> Result<String, MenuAnalysisError> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message)
        .and_then(|m| m.content)
        .filter(|text| !text.trim().is_empty())
        .ok_or(MenuAnalysisError::EmptyCompletion)
}
