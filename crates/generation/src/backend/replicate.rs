//! Hosted predictions API backend
//!
//! Talks to a Replicate-style predictions REST API: create a prediction
//! for a model, poll it until it reaches a terminal status, then join the
//! output chunks into a single string. Credentials come from
//! `REPLICATE_API_TOKEN`.

use std::time::Duration;

use async_trait::async_trait;

use super::{BackendError, CompletionBackend, CompletionRequest};

const DEFAULT_BASE_URL: &str = "https://api.replicate.com";
const USER_AGENT: &str = "webgen-ai/1.0.0";
const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Backend for a hosted predictions API
pub struct ReplicateBackend {
    /// HTTP client for API requests
    http_client: reqwest::Client,
    /// Base URL of the predictions API
    base_url: String,
    /// Bearer token for authentication
    api_token: String,
    /// Delay between status polls
    poll_interval: Duration,
}

impl ReplicateBackend {
    /// Create a backend against the public API
    pub fn new(api_token: impl Into<String>) -> Result<Self, BackendError> {
        Self::with_base_url(api_token, DEFAULT_BASE_URL)
    }

    /// Create a backend against a custom endpoint (tests, self-hosted proxies)
    pub fn with_base_url(
        api_token: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, BackendError> {
        let api_token = api_token.into();
        if api_token.trim().is_empty() {
            return Err(BackendError::NotConfigured(
                "REPLICATE_API_TOKEN is not set".to_string(),
            ));
        }
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(BackendError::Http)?;
        Ok(Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_token,
            poll_interval: DEFAULT_POLL_INTERVAL,
        })
    }

    /// Override the poll interval (tests)
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Create a prediction and return its JSON body
    async fn create_prediction(
        &self,
        model: &str,
        request: &CompletionRequest,
    ) -> Result<serde_json::Value, BackendError> {
        let url = format!("{}/v1/models/{}/predictions", self.base_url, model);
        let body = serde_json::json!({
            "input": {
                "prompt": request.prompt,
                "system_prompt": request.system_prompt,
                "max_new_tokens": request.max_new_tokens,
                "temperature": request.temperature,
                "top_p": request.top_p,
                "repetition_penalty": request.repetition_penalty,
                "stop": request.stop,
            }
        });

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(&self.api_token)
            .json(&body)
            .send()
            .await
            .map_err(BackendError::Http)?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND
            || status == reqwest::StatusCode::UNPROCESSABLE_ENTITY
        {
            return Err(BackendError::ModelNotFound(model.to_string()));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BackendError::Api(format!("API error {}: {}", status, body)));
        }

        response
            .json()
            .await
            .map_err(|e| BackendError::Decode(format!("Invalid prediction body: {}", e)))
    }

    /// Poll a prediction until it reaches a terminal status
    async fn wait_for_prediction(
        &self,
        prediction: serde_json::Value,
    ) -> Result<serde_json::Value, BackendError> {
        let poll_url = prediction
            .get("urls")
            .and_then(|u| u.get("get"))
            .and_then(|u| u.as_str())
            .map(|u| u.to_string())
            .or_else(|| {
                prediction
                    .get("id")
                    .and_then(|id| id.as_str())
                    .map(|id| format!("{}/v1/predictions/{}", self.base_url, id))
            })
            .ok_or_else(|| BackendError::Decode("Prediction has no id or poll URL".to_string()))?;

        let mut current = prediction;
        loop {
            match current.get("status").and_then(|s| s.as_str()) {
                Some("succeeded") => return Ok(current),
                Some("failed") | Some("canceled") => {
                    let detail = current
                        .get("error")
                        .and_then(|e| e.as_str())
                        .unwrap_or("no error detail");
                    return Err(BackendError::Api(format!("Prediction failed: {}", detail)));
                }
                _ => {}
            }

            tokio::time::sleep(self.poll_interval).await;

            let response = self
                .http_client
                .get(&poll_url)
                .bearer_auth(&self.api_token)
                .send()
                .await
                .map_err(BackendError::Http)?;

            if !response.status().is_success() {
                let status = response.status();
                let body = response.text().await.unwrap_or_default();
                return Err(BackendError::Api(format!(
                    "Poll error {}: {}",
                    status, body
                )));
            }

            current = response
                .json()
                .await
                .map_err(|e| BackendError::Decode(format!("Invalid poll body: {}", e)))?;
        }
    }

    /// Join the prediction output into a single string.
    ///
    /// The API streams output as an array of chunks; some models return a
    /// plain string instead.
    fn collect_output(prediction: &serde_json::Value) -> Result<String, BackendError> {
        match prediction.get("output") {
            Some(serde_json::Value::String(text)) => Ok(text.clone()),
            Some(serde_json::Value::Array(chunks)) => Ok(chunks
                .iter()
                .filter_map(|c| c.as_str())
                .collect::<Vec<_>>()
                .concat()),
            _ => Err(BackendError::Decode(
                "Prediction succeeded without output".to_string(),
            )),
        }
    }
}

#[async_trait]
impl CompletionBackend for ReplicateBackend {
    fn name(&self) -> &'static str {
        "replicate"
    }

    fn description(&self) -> &'static str {
        "Hosted predictions API. Creates a prediction per request and polls until completion."
    }

    fn is_hosted(&self) -> bool {
        true
    }

    async fn health_check(&self) -> bool {
        let url = format!("{}/v1/account", self.base_url);
        match self
            .http_client
            .get(&url)
            .bearer_auth(&self.api_token)
            .send()
            .await
        {
            Ok(resp) => resp.status().is_success(),
            Err(_) => false,
        }
    }

    async fn complete(
        &self,
        model: &str,
        request: &CompletionRequest,
    ) -> Result<String, BackendError> {
        log::debug!(
            "Creating prediction: model={}, prompt_len={}",
            model,
            request.prompt.len()
        );

        let prediction = self.create_prediction(model, request).await?;
        let finished = self.wait_for_prediction(prediction).await?;
        let output = Self::collect_output(&finished)?;

        log::debug!("Prediction finished: {} output chars", output.len());
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rejects_empty_token() {
        let backend = ReplicateBackend::new("");
        assert!(matches!(backend, Err(BackendError::NotConfigured(_))));
    }

    #[test]
    fn trims_trailing_slash_from_base_url() {
        let backend = ReplicateBackend::with_base_url("token", "http://localhost:9000/").unwrap();
        assert_eq!(backend.base_url, "http://localhost:9000");
    }

    #[test]
    fn collects_string_output() {
        let prediction = json!({"status": "succeeded", "output": "hello"});
        assert_eq!(
            ReplicateBackend::collect_output(&prediction).unwrap(),
            "hello"
        );
    }

    #[test]
    fn collects_chunked_output() {
        let prediction = json!({"status": "succeeded", "output": ["```html", "\n<p>hi</p>\n", "```"]});
        assert_eq!(
            ReplicateBackend::collect_output(&prediction).unwrap(),
            "```html\n<p>hi</p>\n```"
        );
    }

    #[test]
    fn missing_output_is_decode_error() {
        let prediction = json!({"status": "succeeded"});
        assert!(matches!(
            ReplicateBackend::collect_output(&prediction),
            Err(BackendError::Decode(_))
        ));
    }
}
