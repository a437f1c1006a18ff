//! Backend error types

use thiserror::Error;

/// Errors from the text-generation backend
///
/// All variants are hard failures; a response that parses but carries no
/// usable choice is not an error (see [`crate::ChatCompletion::description`]).
#[derive(Error, Debug)]
pub enum LlmError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request to text-generation backend failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("text-generation backend returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("failed to parse backend response: {0}")]
    Decode(#[from] serde_json::Error),
}
