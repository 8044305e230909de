use serde::de::DeserializeOwned;
use std::sync::Arc;

use crate::{
    composer,
    error::{GenerationError, Result},
    logger,
    models::{
        CaptionAndHashtags, CaptionRequest, GenerationRequest, GenerationResult, HookIdeas,
        HookRequest, ModelRequest,
    },
    provider::GenerativeModel,
};

const EXPECTED_ITEMS: usize = 10;

/// Composes requests, sends them to a model and parses the structured answer.
#[derive(Clone)]
pub struct ContentGenerator {
    model: Arc<dyn GenerativeModel>,
}

impl ContentGenerator {
    pub fn new(model: Arc<dyn GenerativeModel>) -> Self {
        Self { model }
    }

    pub fn model_name(&self) -> &str {
        self.model.name()
    }

    pub async fn generate(&self, request: &GenerationRequest) -> Result<GenerationResult> {
        match request {
            GenerationRequest::Caption(caption) => {
                self.generate_caption(caption).await.map(GenerationResult::Caption)
            }
            GenerationRequest::Hook(hook) => {
                self.generate_hooks(hook).await.map(GenerationResult::Hooks)
            }
        }
    }

    pub async fn generate_caption(&self, request: &CaptionRequest) -> Result<CaptionAndHashtags> {
        let result: CaptionAndHashtags =
            self.run("caption", composer::caption::compose(request)).await?;
        if result.hashtags.len() != EXPECTED_ITEMS {
            log::warn!(
                "⚠️  Expected {} hashtags, model returned {}",
                EXPECTED_ITEMS,
                result.hashtags.len()
            );
        }
        Ok(result)
    }

    pub async fn generate_hooks(&self, request: &HookRequest) -> Result<HookIdeas> {
        let result: HookIdeas = self.run("hook", composer::hook::compose(request)).await?;
        if result.hooks.len() != EXPECTED_ITEMS {
            log::warn!(
                "⚠️  Expected {} hooks, model returned {}",
                EXPECTED_ITEMS,
                result.hooks.len()
            );
        }
        Ok(result)
    }

    async fn run<T: DeserializeOwned>(&self, kind: &str, request: ModelRequest) -> Result<T> {
        let raw = {
            let _timer = logger::timer(&format!("{} generation with {}", kind, self.model.name()));
            self.model.generate(request).await?
        };
        parse_output(&raw)
    }
}

/// Parses trimmed model text as the expected JSON shape. No partial recovery.
pub fn parse_output<T: DeserializeOwned>(raw: &str) -> Result<T> {
    serde_json::from_str(raw.trim()).map_err(|e| {
        log::error!("❌ Model output is not schema-conformant JSON: {}", e);
        log::debug!("Raw model output: {}", raw);
        GenerationError::MalformedOutput(e.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct ScriptedModel {
        reply: Result<String>,
        seen: Mutex<Vec<ModelRequest>>,
    }

    impl ScriptedModel {
        fn replying(text: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Ok(text.to_string()),
                seen: Mutex::new(Vec::new()),
            })
        }

        fn failing(status: u16) -> Arc<Self> {
            Arc::new(Self {
                reply: Err(GenerationError::Api {
                    status,
                    message: "upstream down".into(),
                }),
                seen: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl GenerativeModel for ScriptedModel {
        async fn generate(&self, request: ModelRequest) -> Result<String> {
            self.seen.lock().unwrap().push(request);
            match &self.reply {
                Ok(text) => Ok(text.clone()),
                Err(GenerationError::Api { status, message }) => Err(GenerationError::Api {
                    status: *status,
                    message: message.clone(),
                }),
                Err(other) => Err(GenerationError::Request(other.to_string())),
            }
        }

        fn name(&self) -> &str {
            "scripted"
        }
    }

    #[test]
    fn test_parse_preserves_order_and_length() {
        let value = CaptionAndHashtags {
            caption: "Kulit glowing ✨".into(),
            hashtags: (1..=10).map(|i| format!("#tag{}", i)).collect(),
        };
        let raw = format!("  \n{}\n ", serde_json::to_string(&value).unwrap());

        let parsed: CaptionAndHashtags = parse_output(&raw).unwrap();
        assert_eq!(parsed, value);
    }

    #[test]
    fn test_parse_rejects_wrong_shape() {
        let err = parse_output::<HookIdeas>(r#"{"caption":"x"}"#).unwrap_err();
        assert!(matches!(err, GenerationError::MalformedOutput(_)));

        let err = parse_output::<HookIdeas>("not json").unwrap_err();
        assert!(matches!(err, GenerationError::MalformedOutput(_)));
    }

    #[tokio::test]
    async fn test_generate_caption_sends_composed_request() {
        let model = ScriptedModel::replying(r##"{"caption":"Halo","hashtags":["#a","#b"]}"##);
        let generator = ContentGenerator::new(model.clone());

        let result = generator
            .generate_caption(&CaptionRequest::new("Promo skincare"))
            .await
            .unwrap();
        assert_eq!(result.caption, "Halo");
        assert_eq!(result.hashtags, vec!["#a", "#b"]);

        let seen = model.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert!(seen[0].prompt.text().contains("\"Promo skincare\""));
        assert_eq!(seen[0].system_instruction, composer::caption::SYSTEM_INSTRUCTION);
    }

    #[tokio::test]
    async fn test_generate_dispatches_hooks() {
        let model = ScriptedModel::replying(r#"{"hooks":["Satu","Dua"]}"#);
        let generator = ContentGenerator::new(model);

        let request = GenerationRequest::Hook(HookRequest::new("Tips hemat"));
        let result = generator.generate(&request).await.unwrap();
        assert_eq!(
            result,
            GenerationResult::Hooks(HookIdeas {
                hooks: vec!["Satu".into(), "Dua".into()]
            })
        );
    }

    #[tokio::test]
    async fn test_model_failure_is_surfaced() {
        let generator = ContentGenerator::new(ScriptedModel::failing(503));
        let err = generator
            .generate_hooks(&HookRequest::new("Tips hemat"))
            .await
            .unwrap_err();
        assert!(matches!(err, GenerationError::Api { status: 503, .. }));
    }
}
