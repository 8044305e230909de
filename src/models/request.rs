use serde::{Deserialize, Serialize};

use super::common::InlineImage;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum GenerationRequest {
    Caption(CaptionRequest),
    Hook(HookRequest),
}

impl GenerationRequest {
    pub fn kind(&self) -> &'static str {
        match self {
            GenerationRequest::Caption(_) => "caption",
            GenerationRequest::Hook(_) => "hook",
        }
    }

    pub fn topic(&self) -> &str {
        match self {
            GenerationRequest::Caption(request) => &request.topic,
            GenerationRequest::Hook(request) => &request.topic,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptionRequest {
    pub topic: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_image: Option<InlineImage>,
    /// Expected to be set only when `description_text` is absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description_image: Option<InlineImage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_request: Option<String>,
}

impl CaptionRequest {
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            ..Default::default()
        }
    }

    pub fn with_description_text(mut self, text: impl Into<String>) -> Self {
        self.description_text = Some(text.into());
        self
    }

    pub fn with_product_image(mut self, image: InlineImage) -> Self {
        self.product_image = Some(image);
        self
    }

    pub fn with_description_image(mut self, image: InlineImage) -> Self {
        self.description_image = Some(image);
        self
    }

    pub fn with_custom_request(mut self, request: impl Into<String>) -> Self {
        self.custom_request = Some(request.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HookRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audience: Option<String>,
    pub topic: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hook_details: Option<String>,
}

impl HookRequest {
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            ..Default::default()
        }
    }

    pub fn with_audience(mut self, audience: impl Into<String>) -> Self {
        self.audience = Some(audience.into());
        self
    }

    pub fn with_hook_details(mut self, details: impl Into<String>) -> Self {
        self.hook_details = Some(details.into());
        self
    }
}
