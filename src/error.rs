use thiserror::Error;

/// Errors that can occur when requesting a chat completion.
#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Provider error: {provider} - {message}")]
    Provider { provider: String, message: String },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Rate limit exceeded")]
    RateLimit,

    #[error("Response contained no choices")]
    EmptyChoices,

    #[error("Choice {index} has no message content{}", refusal_suffix(.refusal))]
    MissingContent {
        index: u32,
        refusal: Option<String>,
    },
}

fn refusal_suffix(refusal: &Option<String>) -> String {
    match refusal {
        Some(text) => format!(" (refusal: {text})"),
        None => String::new(),
    }
}

impl Error {
    pub fn provider(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Provider {
            provider: provider.into(),
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Error::Config(message.into())
    }

    pub fn auth(message: impl Into<String>) -> Self {
        Error::Auth(message.into())
    }
}
