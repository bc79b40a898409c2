//! Agent configuration.
//!
//! The core never reads the process environment on its own. Callers resolve
//! credentials and model choice up front, either explicitly or via the
//! opt-in [`DetourConfig::from_env`] convenience, and pass the result to
//! construction.

use crate::provider::{ChatCompletionsProvider, Provider};

/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Endpoint used when none is configured.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Per-call output token budget used when none is configured.
pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 1024;

/// Explicit configuration for building a provider-backed agent.
#[derive(Debug, Clone)]
pub struct DetourConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub max_output_tokens: u32,
}

impl Default for DetourConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            max_output_tokens: DEFAULT_MAX_OUTPUT_TOKENS,
        }
    }
}

impl DetourConfig {
    /// Load configuration from the environment, reading `.env` first if
    /// present.
    ///
    /// Recognized variables: `DETOUR_API_KEY` (falling back to
    /// `OPENAI_API_KEY`), `DETOUR_MODEL`, `DETOUR_BASE_URL`, and
    /// `DETOUR_MAX_OUTPUT_TOKENS`. Unset variables keep their defaults.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv(); // load .env if present, ignore error
        let mut config = Self::default();

        if let Ok(key) = std::env::var("DETOUR_API_KEY").or_else(|_| std::env::var("OPENAI_API_KEY"))
        {
            config.api_key = key;
        }
        if let Ok(model) = std::env::var("DETOUR_MODEL") {
            config.model = model;
        }
        if let Ok(url) = std::env::var("DETOUR_BASE_URL") {
            config.base_url = url;
        }
        if let Ok(max) = std::env::var("DETOUR_MAX_OUTPUT_TOKENS") {
            if let Ok(max) = max.parse() {
                config.max_output_tokens = max;
            }
        }

        config
    }

    /// Build an OpenAI-compatible provider from this config.
    pub fn into_provider(self) -> Box<dyn Provider> {
        Box::new(ChatCompletionsProvider::new(
            self.model,
            self.api_key,
            Some(self.base_url),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_documented_values() {
        let config = DetourConfig::default();
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.max_output_tokens, DEFAULT_MAX_OUTPUT_TOKENS);
        assert!(config.api_key.is_empty());
    }
}
