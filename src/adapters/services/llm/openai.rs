//! OpenAI completion adapter
//!
//! Implements the CompletionPort for OpenAI's chat-completions API.

use crate::error::{AppError, Result};
use crate::ports::completion::{CompletionPort, CompletionRequest, CompletionResult};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const OPENAI_API_BASE: &str = "https://api.openai.com/v1";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// OpenAI completion service
pub struct OpenAiCompletion {
    client: Client,
    api_key: String,
}

#[derive(Debug, Serialize)]
struct ChatCompletionBody {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
    usage: ChatUsage,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatUsage {
    prompt_tokens: u64,
    completion_tokens: u64,
}

impl OpenAiCompletion {
    /// Create a new OpenAI adapter with the given API key
    pub fn new(api_key: String) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self { client, api_key }
    }
}

#[async_trait]
impl CompletionPort for OpenAiCompletion {
    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResult> {
        let mut messages = Vec::new();
        if let Some(system) = &request.system_prompt {
            messages.push(ChatMessage {
                role: "system".to_string(),
                content: system.clone(),
            });
        }
        messages.push(ChatMessage {
            role: "user".to_string(),
            content: request.user_prompt.clone(),
        });

        let body = ChatCompletionBody {
            model: request.model.clone(),
            messages,
            temperature: request.temperature,
            max_tokens: request.max_output_tokens,
        };

        log::info!("Calling OpenAI chat completion with model: {}", request.model);

        let response = self
            .client
            .post(format!("{}/chat/completions", OPENAI_API_BASE))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::Completion(format!("Chat completion request failed: {}", e)))?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::Completion(format!(
                "Chat completion failed: {}",
                error_text
            )));
        }

        let completion: ChatCompletionResponse = response.json().await.map_err(|e| {
            AppError::Completion(format!("Failed to parse completion response: {}", e))
        })?;

        let choice = completion
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| AppError::Completion("No completion choices returned".to_string()))?;

        log::info!(
            "OpenAI completion successful, generated {} characters",
            choice.message.content.len()
        );

        Ok(CompletionResult {
            text: choice.message.content,
            input_tokens: completion.usage.prompt_tokens,
            output_tokens: completion.usage.completion_tokens,
        })
    }

    fn provider_name(&self) -> &str {
        "openai"
    }

    fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }
}
