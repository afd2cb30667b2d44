//! Pluggable completion backend abstraction
//!
//! The generation pipeline talks to hosted language models through the
//! [`CompletionBackend`] trait. The hosted predictions API and the
//! tokenless local demo backend implement the same interface, so the
//! rest of the pipeline never knows which one is active.

pub mod local;
pub mod replicate;

use async_trait::async_trait;
use serde::Serialize;

pub use local::LocalDemoBackend;
pub use replicate::ReplicateBackend;

/// Error types for backend operations
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("Backend not configured: {0}")]
    NotConfigured(String),

    #[error("Model not found: {0}")]
    ModelNotFound(String),

    #[error("Completion API error: {0}")]
    Api(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Completion timed out")]
    Timeout,

    #[error("Failed to decode response: {0}")]
    Decode(String),
}

/// A single completion call: prompt plus sampling parameters
#[derive(Debug, Clone, Serialize)]
pub struct CompletionRequest {
    pub prompt: String,
    pub system_prompt: String,
    pub max_new_tokens: u32,
    pub temperature: f32,
    pub top_p: f32,
    pub repetition_penalty: f32,
    /// Sequences that terminate generation early
    pub stop: Vec<String>,
}

/// The trait all completion backends implement.
///
/// Backends are HTTP-based (hosted predictions API) or in-process (the
/// local demo backend). `complete` returns the raw model text; extraction
/// and sanitization happen downstream in the service.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Human-readable name for logs and status responses
    fn name(&self) -> &'static str;

    /// Description of this backend
    fn description(&self) -> &'static str;

    /// Whether the backend talks to a hosted model (false for local demo)
    fn is_hosted(&self) -> bool;

    /// Verify the backend is reachable and credentials are accepted
    async fn health_check(&self) -> bool;

    /// Run a completion against the given model and collect the full output
    async fn complete(
        &self,
        model: &str,
        request: &CompletionRequest,
    ) -> Result<String, BackendError>;
}

impl CompletionRequest {
    /// Build a request from a prompt pair with the given sampling config
    pub fn new(
        prompt: impl Into<String>,
        system_prompt: impl Into<String>,
        config: &crate::config::GenerationConfig,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            system_prompt: system_prompt.into(),
            max_new_tokens: config.max_new_tokens,
            temperature: config.temperature,
            top_p: config.top_p,
            repetition_penalty: config.repetition_penalty,
            stop: config.stop.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GenerationConfig;

    #[test]
    fn request_carries_sampling_config() {
        let config = GenerationConfig::default();
        let request = CompletionRequest::new("build a site", "you are helpful", &config);
        assert_eq!(request.max_new_tokens, 3000);
        assert_eq!(request.temperature, 0.7);
        assert_eq!(request.stop.len(), 3);
        assert_eq!(request.prompt, "build a site");
    }
}
