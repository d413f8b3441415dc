//! LLM completion adapters
//!
//! Implementations of the CompletionPort trait for hosted providers:
//! - OpenAI (gpt-4, gpt-3.5-turbo)
//! - Anthropic (Claude)

pub mod anthropic;
pub mod openai;

pub use anthropic::AnthropicCompletion;
pub use openai::OpenAiCompletion;
