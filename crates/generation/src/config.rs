//! Configuration for the generation pipeline

use std::time::Duration;

/// Default primary model when `REPLICATE_MODEL` is unset
pub const DEFAULT_MODEL: &str = "meta/codellama-13b-instruct";

/// Models tried in order when the primary model is unavailable
pub const DEFAULT_FALLBACK_MODELS: &[&str] =
    &["replicate/codellama-7b-instruct", "meta/llama-2-13b-chat"];

/// Sampling and retry configuration for the generation service
#[derive(Debug, Clone)]
pub struct GenerationConfig {
    /// Primary model identifier (e.g. "meta/codellama-13b-instruct")
    pub model: String,
    /// Models tried in order when the primary model is not found
    pub fallback_models: Vec<String>,
    /// Token budget per request
    pub max_new_tokens: u32,
    pub temperature: f32,
    pub top_p: f32,
    pub repetition_penalty: f32,
    /// Sequences that terminate generation early
    pub stop: Vec<String>,
    /// Retries per model after the first attempt
    pub max_retries: u32,
    /// Delay before the first retry; doubled per attempt
    pub retry_delay: Duration,
    /// Wall-clock cap for a single completion call
    pub request_timeout: Duration,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            fallback_models: DEFAULT_FALLBACK_MODELS
                .iter()
                .map(|m| m.to_string())
                .collect(),
            max_new_tokens: 3000,
            temperature: 0.7,
            top_p: 0.95,
            repetition_penalty: 1.15,
            stop: vec![
                "```".to_string(),
                "</response>".to_string(),
                "====".to_string(),
            ],
            max_retries: 2,
            retry_delay: Duration::from_secs(2),
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl GenerationConfig {
    /// Build a config from the process environment.
    ///
    /// `REPLICATE_MODEL` overrides the primary model and
    /// `MAX_TOKENS_PER_REQUEST` overrides the token budget; anything
    /// unparseable falls back to the default.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(model) = std::env::var("REPLICATE_MODEL") {
            if !model.trim().is_empty() {
                config.model = model;
            }
        }
        if let Ok(raw) = std::env::var("MAX_TOKENS_PER_REQUEST") {
            if let Ok(tokens) = raw.trim().parse::<u32>() {
                config.max_new_tokens = tokens;
            }
        }
        config
    }

    /// Config suitable for fast unit tests (no real waiting)
    pub fn instant() -> Self {
        Self {
            retry_delay: Duration::from_millis(1),
            request_timeout: Duration::from_millis(500),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_service_contract() {
        let config = GenerationConfig::default();
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.fallback_models.len(), 2);
        assert_eq!(config.max_new_tokens, 3000);
        assert_eq!(config.max_retries, 2);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert!(config.stop.iter().any(|s| s == "```"));
    }

    #[test]
    fn instant_config_keeps_sampling_params() {
        let config = GenerationConfig::instant();
        assert_eq!(config.temperature, 0.7);
        assert_eq!(config.top_p, 0.95);
        assert!(config.retry_delay < Duration::from_millis(10));
    }
}
