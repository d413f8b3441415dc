/// Application configuration
///
/// An explicit, immutable configuration value built once at startup and passed
/// by reference into the pipeline. Values come from the process environment
/// with the defaults below; the binary loads a `.env` file first.
use std::env;
use std::path::PathBuf;

use crate::error::{AppError, Result};

/// Fast and cheap default tier
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
/// Higher quality tier
pub const PREMIUM_MODEL: &str = "gpt-4";
/// Large-context turbo tier
pub const TURBO_MODEL: &str = "gpt-4-turbo";

/// Configuration settings
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub openai_api_key: Option<String>,
    pub anthropic_api_key: Option<String>,

    pub default_model: String,
    pub premium_model: String,
    pub turbo_model: String,

    /// 0 = deterministic, 1 = creative; low for consistent formatting
    pub temperature: f32,

    /// ~4500 words
    pub max_input_tokens: usize,
    /// ~1500 words
    pub max_output_tokens: u32,

    pub output_dir: PathBuf,

    /// Generate the follow-up email unless the caller says otherwise
    pub generate_email: bool,
    /// Generate the executive brief unless the caller says otherwise
    pub generate_brief: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            anthropic_api_key: None,
            default_model: DEFAULT_MODEL.to_string(),
            premium_model: PREMIUM_MODEL.to_string(),
            turbo_model: TURBO_MODEL.to_string(),
            temperature: 0.3,
            max_input_tokens: 6000,
            max_output_tokens: 2000,
            output_dir: PathBuf::from("output"),
            generate_email: true,
            generate_brief: false,
        }
    }
}

impl AppConfig {
    /// Build the configuration from the process environment
    pub fn from_env() -> Self {
        let mut config = Self::default();

        config.openai_api_key = env::var("OPENAI_API_KEY").ok().filter(|k| !k.is_empty());
        config.anthropic_api_key = env::var("ANTHROPIC_API_KEY")
            .ok()
            .filter(|k| !k.is_empty());

        if let Ok(model) = env::var("SUMMARIZER_DEFAULT_MODEL") {
            config.default_model = model;
        }
        if let Ok(model) = env::var("SUMMARIZER_PREMIUM_MODEL") {
            config.premium_model = model;
        }
        if let Ok(dir) = env::var("SUMMARIZER_OUTPUT_DIR") {
            config.output_dir = PathBuf::from(dir);
        }

        config
    }

    /// Validate the configuration
    ///
    /// At least one provider key must be present before any pipeline is built.
    pub fn validate(&self) -> Result<()> {
        if self.openai_api_key.is_none() && self.anthropic_api_key.is_none() {
            return Err(AppError::Config(
                "No API key found. Set OPENAI_API_KEY or ANTHROPIC_API_KEY in the environment or a .env file".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.default_model, "gpt-3.5-turbo");
        assert_eq!(config.premium_model, "gpt-4");
        assert_eq!(config.temperature, 0.3);
        assert_eq!(config.max_input_tokens, 6000);
        assert_eq!(config.max_output_tokens, 2000);
        assert_eq!(config.output_dir, PathBuf::from("output"));
        assert!(config.generate_email);
        assert!(!config.generate_brief);
    }

    #[test]
    fn test_validate_requires_a_key() {
        let config = AppConfig::default();
        assert!(config.validate().is_err());

        let config = AppConfig {
            openai_api_key: Some("sk-test".to_string()),
            ..AppConfig::default()
        };
        assert!(config.validate().is_ok());

        let config = AppConfig {
            anthropic_api_key: Some("sk-ant-test".to_string()),
            ..AppConfig::default()
        };
        assert!(config.validate().is_ok());
    }
}
