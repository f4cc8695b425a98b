//! OpenAI Chat Completions provider.

mod client;
pub mod types;

pub use client::OpenAIProvider;
