//! Chat Completions Client
//!
//! HTTP client for chat-completions deployments that authenticate with an
//! `api-key` header and take the full deployment URL as endpoint.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::LlmError;
use crate::llm_client::{ChatCompletion, ChatRequest, LlmClient};

/// Upper bound on a single backend call
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10_000);

/// Chat-completions API client
#[derive(Clone)]
pub struct ChatClient {
    endpoint: String,
    api_key: String,
    client: reqwest::Client,
}

impl std::fmt::Debug for ChatClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatClient")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

impl ChatClient {
    /// Create a client for `endpoint` with the default timeout
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Result<Self, LlmError> {
        Self::with_timeout(endpoint, api_key, REQUEST_TIMEOUT)
    }

    /// Create a client with a specific request timeout
    pub fn with_timeout(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, LlmError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(LlmError::Client)?;
        Ok(Self {
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl LlmClient for ChatClient {
    async fn complete(&self, request: &ChatRequest) -> Result<ChatCompletion, LlmError> {
        tracing::debug!(endpoint = %self.endpoint, "sending chat completion request");

        let response = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .header("api-key", &self.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let text = response.text().await?;
        tracing::debug!(
            "backend raw response: {}",
            text.chars().take(1000).collect::<String>()
        );
        Ok(serde_json::from_str(&text)?)
    }

    fn provider_name(&self) -> &str {
        "chat-completions"
    }
}
