//! Anthropic completion adapter
//!
//! Implements the CompletionPort for Anthropic's messages API (Claude models).

use crate::error::{AppError, Result};
use crate::ports::completion::{CompletionPort, CompletionRequest, CompletionResult};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const ANTHROPIC_API_BASE: &str = "https://api.anthropic.com/v1";
const ANTHROPIC_API_VERSION: &str = "2023-06-01";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Anthropic completion service
pub struct AnthropicCompletion {
    client: Client,
    api_key: String,
}

#[derive(Debug, Serialize)]
struct MessagesBody {
    model: String,
    messages: Vec<Message>,
    max_tokens: u32,
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<String>,
}

#[derive(Debug, Serialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
    usage: Usage,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    text: String,
}

#[derive(Debug, Deserialize)]
struct Usage {
    input_tokens: u64,
    output_tokens: u64,
}

impl AnthropicCompletion {
    /// Create a new Anthropic adapter with the given API key
    pub fn new(api_key: String) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self { client, api_key }
    }
}

#[async_trait]
impl CompletionPort for AnthropicCompletion {
    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResult> {
        let body = MessagesBody {
            model: request.model.clone(),
            messages: vec![Message {
                role: "user".to_string(),
                content: request.user_prompt.clone(),
            }],
            max_tokens: request.max_output_tokens,
            temperature: request.temperature,
            system: request.system_prompt.clone(),
        };

        log::info!("Calling Anthropic messages API with model: {}", request.model);

        let response = self
            .client
            .post(format!("{}/messages", ANTHROPIC_API_BASE))
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_API_VERSION)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::Completion(format!("Messages request failed: {}", e)))?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::Completion(format!(
                "Messages request failed: {}",
                error_text
            )));
        }

        let messages: MessagesResponse = response.json().await.map_err(|e| {
            AppError::Completion(format!("Failed to parse messages response: {}", e))
        })?;

        let block = messages
            .content
            .into_iter()
            .next()
            .ok_or_else(|| AppError::Completion("No content blocks returned".to_string()))?;

        log::info!(
            "Anthropic completion successful, generated {} characters",
            block.text.len()
        );

        Ok(CompletionResult {
            text: block.text,
            input_tokens: messages.usage.input_tokens,
            output_tokens: messages.usage.output_tokens,
        })
    }

    fn provider_name(&self) -> &str {
        "anthropic"
    }

    fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }
}
