pub mod types;

use crate::{
    config::GeminiConfig,
    error::{GenerationError, Result},
    models::ModelRequest,
    provider::GenerativeModel,
};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use types::{ErrorEnvelope, GenerateContentRequest, GenerateContentResponse};

#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    /// Fails when the config carries no API key.
    pub fn new(config: GeminiConfig) -> Result<Self> {
        config.validate()?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs()))
            .build()
            .map_err(|e| GenerationError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            model: config.model().to_string(),
            base_url: config.base_url().to_string(),
            api_key: config.api_key.unwrap_or_default(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }
}

#[async_trait]
impl GenerativeModel for GeminiClient {
    async fn generate(&self, request: ModelRequest) -> Result<String> {
        let body = GenerateContentRequest::from_model_request(&request);

        log::info!(
            "Invoking model: {} ({} prompt parts)",
            self.model,
            request.prompt.parts.len()
        );
        log::debug!("Prompt text: {}", request.prompt.text());

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                log::error!("Gemini transport error: {:?}", e);
                GenerationError::Request(format!("Gemini request failed: {}", e))
            })?;

        let status = response.status();
        let response_text = response
            .text()
            .await
            .map_err(|e| {
                log::error!("Gemini response body error: {:?}", e);
                GenerationError::Request(format!("Gemini response could not be read: {}", e))
            })?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorEnvelope>(&response_text)
                .map(|envelope| envelope.error.message)
                .unwrap_or(response_text);
            log::error!("Gemini returned {}: {}", status, message);
            return Err(GenerationError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&response_text)
            .map_err(|e| GenerationError::Serialization(e.to_string()))?;

        parsed.text().ok_or(GenerationError::EmptyResponse)
    }

    fn name(&self) -> &str {
        &self.model
    }
}
