use super::types::{ChatCompletionRequest, ChatCompletionResponse, OpenAIError, OpenAIMessage};
use crate::config::{Config, API_KEY_VAR, DEFAULT_BASE_URL};
use crate::provider::LLMProvider;
use crate::response::{Choice, ChoiceMessage, CompletionResponse};
use crate::{CompletionRequest, Error, Role};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{debug, warn};

const PROVIDER: &str = "OpenAI";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// OpenAI provider implementation.
pub struct OpenAIProvider {
    client: Client,
    api_key: Option<String>,
    base_url: String,
    organization: Option<String>,
    project: Option<String>,
}

impl OpenAIProvider {
    /// Create a new OpenAI provider.
    pub fn new(api_key: String) -> Result<Self, Error> {
        Self::new_with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    /// Create a new OpenAI provider with custom base URL.
    pub fn new_with_base_url(api_key: String, base_url: String) -> Result<Self, Error> {
        Self::from_config(&Config::new(api_key).with_base_url(base_url))
    }

    /// Create a provider from loaded configuration. A missing key is accepted
    /// here and reported by `generate`.
    pub fn from_config(config: &Config) -> Result<Self, Error> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            client,
            api_key: config.api_key.clone().filter(|key| !key.is_empty()),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            organization: config.organization.clone(),
            project: config.project.clone(),
        })
    }

    fn chat_completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    /// Convert internal request to OpenAI Chat Completions format.
    fn convert_request(request: &CompletionRequest) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: request.model.clone(),
            messages: request
                .messages
                .iter()
                .map(|msg| OpenAIMessage {
                    role: msg.role.as_str().to_string(),
                    content: msg.content.clone(),
                })
                .collect(),
        }
    }

    /// Convert an OpenAI response into our typed response.
    fn convert_response(response: ChatCompletionResponse) -> CompletionResponse {
        let choices = response
            .choices
            .into_iter()
            .map(|choice| Choice {
                index: choice.index,
                message: ChoiceMessage {
                    role: match choice.message.role.as_deref() {
                        Some("system") => Role::System,
                        Some("user") => Role::User,
                        _ => Role::Assistant,
                    },
                    content: choice.message.content,
                    refusal: choice.message.refusal,
                },
                finish_reason: choice.finish_reason,
            })
            .collect();

        CompletionResponse {
            id: response.id,
            model: response.model,
            choices,
            usage: response.usage.unwrap_or_default(),
        }
    }

    /// Map a non-success status and body onto our error taxonomy.
    fn convert_error(status: StatusCode, body: &str) -> Error {
        let message = serde_json::from_str::<OpenAIError>(body)
            .map(|e| e.error.message)
            .unwrap_or_else(|_| body.to_string());

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Error::auth(message),
            StatusCode::TOO_MANY_REQUESTS => Error::RateLimit,
            _ => Error::provider(PROVIDER, format!("API error ({status}): {message}")),
        }
    }
}

#[async_trait::async_trait]
impl LLMProvider for OpenAIProvider {
    async fn generate(&self, request: &CompletionRequest) -> Result<CompletionResponse, Error> {
        request.validate()?;
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| Error::auth(format!("{API_KEY_VAR} is not set")))?;

        let openai_request = Self::convert_request(request);
        let url = self.chat_completions_url();
        debug!(%url, model = %openai_request.model, messages = openai_request.messages.len(), "sending chat completion request");

        let mut builder = self
            .client
            .post(url)
            .bearer_auth(api_key)
            .header("Content-Type", "application/json");
        if let Some(organization) = &self.organization {
            builder = builder.header("OpenAI-Organization", organization);
        }
        if let Some(project) = &self.project {
            builder = builder.header("OpenAI-Project", project);
        }

        let response = builder.json(&openai_request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await?;
            warn!(%status, "chat completion request failed");
            return Err(Self::convert_error(status, &error_text));
        }

        let body = response.text().await?;
        let parsed: ChatCompletionResponse = serde_json::from_str(&body)?;
        debug!(id = %parsed.id, choices = parsed.choices.len(), "received chat completion");

        Ok(Self::convert_response(parsed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FinishReason, DEFAULT_MODEL};

    #[test]
    fn test_provider_creation() {
        let provider = OpenAIProvider::new("test-key".to_string());
        assert!(provider.is_ok());
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let provider =
            OpenAIProvider::new_with_base_url("k".to_string(), "http://localhost:1234/v1/".to_string())
                .unwrap();
        assert_eq!(
            provider.chat_completions_url(),
            "http://localhost:1234/v1/chat/completions"
        );
    }

    #[test]
    fn test_request_conversion() {
        let request = CompletionRequest::user(DEFAULT_MODEL, "Hello");
        let openai_request = OpenAIProvider::convert_request(&request);

        let body = serde_json::to_value(&openai_request).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "model": "gpt-4o",
                "messages": [{"role": "user", "content": "Hello"}]
            })
        );
    }

    #[test]
    fn test_response_conversion() {
        let raw: ChatCompletionResponse = serde_json::from_value(serde_json::json!({
            "id": "chatcmpl-123",
            "object": "chat.completion",
            "model": "gpt-4o-2024-08-06",
            "choices": [{
                "index": 0,
                "message": {"role": "assistant", "content": "4", "refusal": null},
                "finish_reason": "stop"
            }],
            "usage": {"prompt_tokens": 10, "completion_tokens": 1, "total_tokens": 11}
        }))
        .unwrap();

        let response = OpenAIProvider::convert_response(raw);
        assert_eq!(response.id, "chatcmpl-123");
        assert_eq!(response.choices.len(), 1);
        assert_eq!(response.choices[0].message.role, Role::Assistant);
        assert_eq!(response.choices[0].finish_reason, Some(FinishReason::Stop));
        assert_eq!(response.usage.total_tokens, 11);
        assert_eq!(response.first_content().unwrap(), "4");
    }

    #[test]
    fn test_minimal_response_parses() {
        let raw: ChatCompletionResponse =
            serde_json::from_str(r#"{"choices":[{"message":{"content":"4"}}]}"#).unwrap();
        let response = OpenAIProvider::convert_response(raw);
        assert_eq!(response.first_content().unwrap(), "4");
        assert_eq!(response.usage, crate::Usage::default());
    }

    #[test]
    fn test_error_mapping() {
        let body = r#"{"error":{"message":"Incorrect API key provided","type":"invalid_request_error","param":null,"code":"invalid_api_key"}}"#;
        match OpenAIProvider::convert_error(StatusCode::UNAUTHORIZED, body) {
            Error::Auth(message) => assert_eq!(message, "Incorrect API key provided"),
            other => panic!("Expected Auth error, got {other:?}"),
        }

        assert!(matches!(
            OpenAIProvider::convert_error(StatusCode::TOO_MANY_REQUESTS, "{}"),
            Error::RateLimit
        ));

        match OpenAIProvider::convert_error(StatusCode::BAD_GATEWAY, "upstream down") {
            Error::Provider { provider, message } => {
                assert_eq!(provider, "OpenAI");
                assert!(message.contains("upstream down"));
            }
            other => panic!("Expected Provider error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_missing_key_fails_before_sending() {
        // Port 9 is discard; nothing should be sent there anyway.
        let config = Config::default().with_base_url("http://127.0.0.1:9");
        let provider = OpenAIProvider::from_config(&config).unwrap();

        let result = provider
            .generate(&CompletionRequest::user(DEFAULT_MODEL, "hi"))
            .await;
        assert!(matches!(result, Err(Error::Auth(_))));
    }
}
