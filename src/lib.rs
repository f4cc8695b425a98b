//! Send a single chat-completion request to OpenAI and get the answer back as text.
//!
//! Load a [`Config`] once, build a [`CompletionClient`] from it and call
//! [`CompletionClient::get_completion`].

pub mod client;
pub mod config;
pub mod error;
pub mod provider;
pub mod providers;
pub mod response;
pub mod types;

// Re-export core types for easy usage
pub use client::CompletionClient;
pub use config::Config;
pub use error::Error;
pub use provider::LLMProvider;
pub use providers::*;
pub use response::*;
pub use types::*;
