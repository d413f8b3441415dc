/// Completion service port trait
///
/// Defines the interface for hosted LLM completion APIs.
/// Implementations: OpenAI, Anthropic.
use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// One prompt to send to a completion API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionRequest {
    /// System prompt, sent when present
    pub system_prompt: Option<String>,

    /// Rendered user prompt
    pub user_prompt: String,

    /// Model id (e.g. "gpt-3.5-turbo", "claude-3-haiku")
    pub model: String,

    /// Sampling temperature (low for consistent formatting)
    pub temperature: f32,

    /// Ceiling on generated tokens
    pub max_output_tokens: u32,
}

/// Generated text plus the provider's reported token usage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionResult {
    pub text: String,
    pub input_tokens: u64,
    pub output_tokens: u64,
}

/// Port trait for completion services
///
/// One call per prompt, no automatic retry. Any transport, auth, or
/// rate-limit condition surfaces as a single opaque completion failure.
#[async_trait]
pub trait CompletionPort: Send + Sync {
    /// Send one prompt and return the generated text with token usage
    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResult>;

    /// Get the provider name
    fn provider_name(&self) -> &str;

    /// Check if the service is configured (has API key)
    fn is_configured(&self) -> bool;
}
