//! LLM Client Trait
//!
//! Request/response types for chat-completions style backends and the
//! [`LlmClient`] seam the pipeline talks to.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::LlmError;

/// Sampling temperature
pub const TEMPERATURE: f64 = 0.8;

/// Nucleus-sampling threshold
pub const TOP_P: f64 = 0.9;

/// Maximum number of generated tokens
pub const MAX_TOKENS: u32 = 512;

/// Description used when the backend answers without any usable choice
pub const MISSING_RESPONSE_PLACEHOLDER: &str = "Error on generating response";

// ============================================================================
// REQUEST
// ============================================================================

/// Message role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
}

/// One content part of a message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentPart {
    Text { text: String },
}

/// A chat message with typed content parts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: Vec<ContentPart>,
}

/// Chat-completions request body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
    pub temperature: f64,
    pub top_p: f64,
    pub max_tokens: u32,
}

impl ChatRequest {
    /// Request carrying `prompt` as a single system message, with the fixed
    /// generation parameters
    pub fn system(prompt: impl Into<String>) -> Self {
        Self {
            messages: vec![ChatMessage {
                role: Role::System,
                content: vec![ContentPart::Text {
                    text: prompt.into(),
                }],
            }],
            temperature: TEMPERATURE,
            top_p: TOP_P,
            max_tokens: MAX_TOKENS,
        }
    }
}

// ============================================================================
// RESPONSE
// ============================================================================

/// Chat-completions response; only the parts the pipeline reads
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ChatCompletion {
    #[serde(default)]
    pub choices: Option<Vec<Choice>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Choice {
    #[serde(default)]
    pub message: Option<ResponseMessage>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ResponseMessage {
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatCompletion {
    /// Content of the first choice, if any
    pub fn first_content(&self) -> Option<&str> {
        self.choices
            .as_ref()?
            .first()?
            .message
            .as_ref()?
            .content
            .as_deref()
    }

    /// Generated description, or [`MISSING_RESPONSE_PLACEHOLDER`]
    pub fn description(&self) -> String {
        self.first_content()
            .unwrap_or(MISSING_RESPONSE_PLACEHOLDER)
            .to_string()
    }
}

// ============================================================================
// CLIENT TRAIT
// ============================================================================

/// Text-generation backend interface
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Send one request and return the parsed response
    async fn complete(&self, request: &ChatRequest) -> Result<ChatCompletion, LlmError>;

    /// Get the provider name for logging
    fn provider_name(&self) -> &str;
}
