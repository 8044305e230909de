use async_trait::async_trait;

use crate::{error::Result, models::ModelRequest};

/// A generative model that accepts a prompt, a system instruction and a JSON
/// output schema, and answers with schema-conformant text.
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    /// Returns the raw response text, untrimmed and unparsed.
    async fn generate(&self, request: ModelRequest) -> Result<String>;

    fn name(&self) -> &str;
}
