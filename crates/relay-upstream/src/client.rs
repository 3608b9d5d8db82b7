//! Chat-completion HTTP client.

use crate::{ChatCompletionRequest, ChatCompletionResponse, UpstreamError};
use async_trait::async_trait;
use relay_config::UpstreamConfig;
use relay_core::{RelayError, RelayResult, TextGenerator};
use reqwest::Client;
use std::sync::Arc;
use tracing::{error, info};

/// Client for a `/chat/completions` endpoint.
#[derive(Clone)]
pub struct ChatCompletionClient {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl ChatCompletionClient {
    /// Creates a client with the configured timeout.
    pub fn new(config: &UpstreamConfig) -> RelayResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| RelayError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self::with_client(client, config))
    }

    /// Creates a client around an existing `reqwest` client.
    #[must_use]
    pub fn with_client(client: Client, config: &UpstreamConfig) -> Self {
        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Sends `prompt` as a single user message and returns the first choice.
    pub async fn complete(&self, prompt: &str) -> Result<String, UpstreamError> {
        let request = ChatCompletionRequest::single_turn(&self.model, prompt);

        let response = self
            .client
            .post(self.url("/chat/completions"))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "Upstream request failed");
                UpstreamError::Transport(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(match response.text().await {
                Ok(body) => {
                    error!(status = status.as_u16(), body = %body, "Upstream returned an error");
                    UpstreamError::Status { status, body }
                }
                Err(source) => {
                    error!(
                        status = status.as_u16(),
                        error = %source,
                        "Failed to read upstream error body"
                    );
                    UpstreamError::BodyRead { status, source }
                }
            });
        }

        let envelope: ChatCompletionResponse = response.json().await.map_err(|e| {
            error!(error = %e, "Failed to decode upstream response");
            UpstreamError::Decode(e)
        })?;

        let content = envelope.into_first_content().ok_or_else(|| {
            error!("Upstream returned no choices");
            UpstreamError::EmptyResponse
        })?;

        info!(prompt_len = prompt.len(), content_len = content.len(), "Upstream generation succeeded");
        Ok(content)
    }
}

impl std::fmt::Debug for ChatCompletionClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatCompletionClient")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl TextGenerator for ChatCompletionClient {
    async fn generate(&self, prompt: &str) -> RelayResult<String> {
        Ok(self.complete(prompt).await?)
    }
}

/// Creates a shareable text generator backed by the chat-completion API.
pub fn create_text_generator(config: &UpstreamConfig) -> RelayResult<Arc<dyn TextGenerator>> {
    let client = ChatCompletionClient::new(config)?;
    Ok(Arc::new(client))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(base_url: &str) -> UpstreamConfig {
        UpstreamConfig {
            base_url: base_url.to_string(),
            api_key: "sk-test".to_string(),
            ..UpstreamConfig::default()
        }
    }

    #[test]
    fn test_url_construction() {
        let client = ChatCompletionClient::new(&config("https://api.deepseek.com/v1")).unwrap();
        assert_eq!(
            client.url("/chat/completions"),
            "https://api.deepseek.com/v1/chat/completions"
        );

        let trailing = ChatCompletionClient::new(&config("https://api.deepseek.com/v1/")).unwrap();
        assert_eq!(
            trailing.url("/chat/completions"),
            "https://api.deepseek.com/v1/chat/completions"
        );
    }

    #[test]
    fn test_debug_hides_api_key() {
        let client = ChatCompletionClient::new(&config("http://localhost")).unwrap();
        assert!(!format!("{:?}", client).contains("sk-test"));
    }
}
