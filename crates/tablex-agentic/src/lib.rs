//! Text-generation backend for table lexicalization
//!
//! Wraps the single outbound call of a lexicalization run: the prompt goes
//! out as one system message with fixed sampling parameters, and the first
//! choice of the response comes back as the table description.

pub mod chat_client;
pub mod error;
pub mod llm_client;

// Re-exports for convenience
pub use chat_client::{ChatClient, REQUEST_TIMEOUT};
pub use error::LlmError;
pub use llm_client::{
    ChatCompletion, ChatMessage, ChatRequest, Choice, ContentPart, LlmClient, ResponseMessage,
    Role, MISSING_RESPONSE_PLACEHOLDER,
};
