use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::llm::parser::parse_json;

#[async_trait]
pub trait LLMProvider: Send + Sync {
    /// Sends one prompt and returns the raw reply text.
    async fn generate(&self, prompt: &str) -> Result<String>;
    fn name(&self) -> &str;
}

/// One request/response cycle whose reply must be a JSON document of type `T`.
pub async fn generate_json<T: DeserializeOwned>(
    provider: &dyn LLMProvider,
    prompt: &str,
) -> Result<T> {
    tracing::debug!("Sending ~{} tokens to {}", prompt.len() / 4, provider.name());
    let reply = provider.generate(prompt).await?;
    parse_json(&reply)
}
