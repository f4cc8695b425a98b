use crate::{CompletionRequest, CompletionResponse, Error};

/// A trait for LLM providers that can answer a chat-completion request.
/// Implementations send exactly one request per call and never retry.
#[async_trait::async_trait]
pub trait LLMProvider: Send + Sync + 'static {
    /// Generate a chat completion.
    async fn generate(&self, request: &CompletionRequest) -> Result<CompletionResponse, Error>;
}
