//! Typed client for `POST /api/generate`, the counterpart of the browser's
//! service layer. Required fields are checked locally so that invalid input
//! never reaches the network.

use reqwest::Client;

use crate::{
    error::{GenerationError, Result},
    models::{
        CaptionAndHashtags, CaptionRequest, GenerationRequest, HookIdeas, HookRequest,
    },
};

#[derive(Clone)]
pub struct GenerateApiClient {
    client: Client,
    base_url: String,
}

impl GenerateApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub async fn generate_caption(&self, request: CaptionRequest) -> Result<CaptionAndHashtags> {
        self.call(GenerationRequest::Caption(request)).await
    }

    pub async fn generate_hooks(&self, request: HookRequest) -> Result<HookIdeas> {
        self.call(GenerationRequest::Hook(request)).await
    }

    async fn call<T: serde::de::DeserializeOwned>(&self, request: GenerationRequest) -> Result<T> {
        validate(&request)?;

        let response = self
            .client
            .post(format!("{}/api/generate", self.base_url))
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::error!("API error response ({}): {}", status, body);
            return Err(GenerationError::Api {
                status: status.as_u16(),
                message: format!("Request failed with status {}", status.as_u16()),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| GenerationError::MalformedOutput(e.to_string()))
    }
}

/// Rejects requests whose topic is empty or whitespace-only.
pub fn validate(request: &GenerationRequest) -> Result<()> {
    if request.topic().trim().is_empty() {
        let message = match request {
            GenerationRequest::Caption(_) => "Harap masukkan topik.",
            GenerationRequest::Hook(_) => "Harap isi kolom produk / topik.",
        };
        return Err(GenerationError::Validation(message.into()));
    }
    Ok(())
}
