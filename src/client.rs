//! High-level completion client: one prompt in, one string out.

use crate::config::Config;
use crate::provider::LLMProvider;
use crate::providers::OpenAIProvider;
use crate::{CompletionRequest, CompletionResponse, Error, DEFAULT_MODEL};

/// Sends single-message chat completions through a provider.
pub struct CompletionClient {
    provider: Box<dyn LLMProvider>,
    model: String,
}

impl CompletionClient {
    /// Build an OpenAI-backed client from loaded configuration.
    pub fn new(config: &Config) -> Result<Self, Error> {
        let provider = OpenAIProvider::from_config(config)?;
        Ok(Self::with_provider(provider))
    }

    /// Use any provider implementation.
    pub fn with_provider(provider: impl LLMProvider) -> Self {
        Self {
            provider: Box::new(provider),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send `request` as-is and return the full typed response.
    pub async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, Error> {
        self.provider.generate(request).await
    }

    /// Send `prompt` as the only user message and return the first choice's text.
    pub async fn get_completion(&self, prompt: &str) -> Result<String, Error> {
        let request = CompletionRequest::user(self.model.as_str(), prompt);
        self.complete(&request).await?.into_first_content()
    }
}
