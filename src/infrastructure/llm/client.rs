//! Chat-completion client over an OpenAI-compatible HTTP API.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use tracing::debug;

use crate::domain::models::LlmConfig;
use crate::domain::ports::{ChatClient, ChatError};

use super::error::LlmApiError;
use super::types::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage};

/// `ChatClient` adapter backed by a pooled reqwest client.
///
/// One instance lives for the whole process; `&self` methods make it safe
/// to share across concurrent dispatches.
pub struct OpenAiChatClient {
    http_client: ReqwestClient,
    base_url: String,
    api_key: String,
    model: String,
}

impl OpenAiChatClient {
    pub fn new(config: &LlmConfig) -> Result<Self> {
        let http_client = ReqwestClient::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to build HTTP client for the chat backend")?;

        Ok(Self {
            http_client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        })
    }
}

#[async_trait]
impl ChatClient for OpenAiChatClient {
    async fn complete(&self, prompt: &str) -> Result<String, ChatError> {
        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage::user(prompt)],
        };

        debug!(model = %self.model, "sending chat completion request");

        let response = self
            .http_client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|err| ChatError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error response".to_string());
            return Err(ChatError::Api(
                LlmApiError::from_status(status, body).to_string(),
            ));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|err| ChatError::Api(format!("Failed to parse completion response: {err}")))?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .filter(|content| !content.is_empty())
            .ok_or(ChatError::EmptyReply)?;

        Ok(content)
    }
}
