//! Typed chat-completion responses.

use crate::{Error, FinishReason, Role, Usage};

/// A complete response from an LLM provider.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionResponse {
    pub id: String,
    pub model: String,
    /// Candidate answers in the order the provider returned them.
    pub choices: Vec<Choice>,
    pub usage: Usage,
}

/// One candidate answer.
#[derive(Debug, Clone, PartialEq)]
pub struct Choice {
    pub index: u32,
    pub message: ChoiceMessage,
    pub finish_reason: Option<FinishReason>,
}

/// The assistant message inside a choice. `content` is absent when the
/// model refused or answered with tool calls only.
#[derive(Debug, Clone, PartialEq)]
pub struct ChoiceMessage {
    pub role: Role,
    pub content: Option<String>,
    pub refusal: Option<String>,
}

impl CompletionResponse {
    /// The first choice, or `Error::EmptyChoices`.
    pub fn first_choice(&self) -> Result<&Choice, Error> {
        self.choices.first().ok_or(Error::EmptyChoices)
    }

    /// Text of the first choice.
    pub fn first_content(&self) -> Result<&str, Error> {
        let choice = self.first_choice()?;
        choice
            .message
            .content
            .as_deref()
            .ok_or_else(|| Error::MissingContent {
                index: choice.index,
                refusal: choice.message.refusal.clone(),
            })
    }

    /// Consume the response and return the first choice's text.
    pub fn into_first_content(mut self) -> Result<String, Error> {
        if self.choices.is_empty() {
            return Err(Error::EmptyChoices);
        }
        let choice = self.choices.swap_remove(0);
        choice.message.content.ok_or(Error::MissingContent {
            index: choice.index,
            refusal: choice.message.refusal,
        })
    }
}
