// Claude API provider implementation

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::types::{GenerationRequest, GenerationResponse};
use super::LlmProvider;

const CLAUDE_API_URL: &str = "https://api.anthropic.com/v1";
const ANTHROPIC_VERSION: &str = "2023-06-01";
const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";
const REQUEST_TIMEOUT_SECS: u64 = 60;
const MAX_TOKENS: u32 = 1024;

#[derive(Debug, Serialize)]
struct MessageRequest {
    model: String,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<String>,
    messages: Vec<Message>,
}

#[derive(Debug, Serialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct MessageResponse {
    model: String,
    #[serde(default)]
    content: Vec<ContentBlock>,
    stop_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentBlock {
    Text { text: String },
    #[serde(other)]
    Other,
}

/// Claude names the assistant role differently from Gemini-style history
fn claude_role(role: &str) -> &str {
    match role {
        "model" => "assistant",
        other => other,
    }
}

/// Claude API provider
#[derive(Clone)]
pub struct ClaudeProvider {
    client: Client,
    api_key: String,
    base_url: String,
    default_model: String,
}

impl ClaudeProvider {
    /// Create a new Claude provider
    pub fn new(api_key: String) -> Result<Self> {
        Self::with_timeout(api_key, Duration::from_secs(REQUEST_TIMEOUT_SECS))
    }

    /// Create a provider with a custom request timeout
    pub fn with_timeout(api_key: String, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            api_key,
            base_url: CLAUDE_API_URL.to_string(),
            default_model: DEFAULT_MODEL.to_string(),
        })
    }

    /// Create with custom default model
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.default_model = model.into();
        self
    }

    /// Point the provider at a different API root
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Convert GenerationRequest to Claude's MessageRequest format
    fn to_message_request(&self, request: &GenerationRequest) -> MessageRequest {
        let model = if request.model.is_empty() {
            self.default_model.clone()
        } else {
            request.model.clone()
        };

        MessageRequest {
            model,
            max_tokens: MAX_TOKENS,
            system: request.system_instruction.clone(),
            messages: request
                .turns
                .iter()
                .map(|turn| Message {
                    role: claude_role(&turn.role).to_string(),
                    content: turn.text(),
                })
                .collect(),
        }
    }
}

#[async_trait]
impl LlmProvider for ClaudeProvider {
    async fn generate(&self, request: &GenerationRequest) -> Result<GenerationResponse> {
        let msg_request = self.to_message_request(request);

        tracing::debug!(model = %msg_request.model, "Sending request to Claude API");

        let response = self
            .client
            .post(format!("{}/messages", self.base_url))
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(&msg_request)
            .send()
            .await
            .context("Failed to send request to Claude API")?;

        let status = response.status();

        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            anyhow::bail!(
                "Claude API request failed\n\nStatus: {}\nBody: {}",
                status,
                error_body
            );
        }

        let message_response: MessageResponse = response
            .json()
            .await
            .context("Failed to parse Claude API response")?;

        let text = message_response
            .content
            .iter()
            .filter_map(|block| match block {
                ContentBlock::Text { text } => Some(text.as_str()),
                ContentBlock::Other => None,
            })
            .collect::<Vec<_>>()
            .join("\n");

        Ok(GenerationResponse {
            text,
            model: message_response.model,
            finish_reason: message_response.stop_reason,
            provider: "claude".to_string(),
        })
    }

    fn name(&self) -> &str {
        "claude"
    }

    fn default_model(&self) -> &str {
        &self.default_model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::ChatTurn;

    #[test]
    fn test_provider_creation() {
        let provider = ClaudeProvider::new("test-key".to_string());
        assert!(provider.is_ok());
    }

    #[test]
    fn test_provider_name() {
        let provider = ClaudeProvider::new("test-key".to_string()).unwrap();
        assert_eq!(provider.name(), "claude");
    }

    #[test]
    fn test_model_role_maps_to_assistant() {
        let provider = ClaudeProvider::new("test-key".to_string()).unwrap();
        let request = GenerationRequest::from_history(vec![
            ChatTurn::user("hi"),
            ChatTurn::model("hello"),
        ])
        .with_system_instruction("be brief");

        let msg_request = provider.to_message_request(&request);
        assert_eq!(msg_request.messages[1].role, "assistant");
        assert_eq!(msg_request.system.as_deref(), Some("be brief"));
        assert_eq!(msg_request.model, DEFAULT_MODEL);
    }
}
