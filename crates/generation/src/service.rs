//! Generation orchestration
//!
//! Drives a completion backend through the full pipeline: prompt assembly,
//! per-attempt timeout, retry with exponential backoff, fallback model
//! rotation, section extraction and sanitization, and fallback filling so
//! the caller always receives a complete site.

use std::sync::Arc;
use std::time::Duration;

use log::{debug, info, warn};
use thiserror::Error;

use crate::backend::{BackendError, CompletionBackend, CompletionRequest};
use crate::config::GenerationConfig;
use crate::extract::extract;
use crate::fallback::{FALLBACK_CSS, FALLBACK_HTML, FALLBACK_JS};
use crate::prompt::PromptBuilder;
use crate::sanitize::{sanitize_css, sanitize_html, sanitize_js};
use crate::types::{GeneratedSite, SiteRequest};

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("backend error: {0}")]
    Backend(#[from] BackendError),
    #[error("all models failed, last error: {0}")]
    AllModelsFailed(String),
}

/// Outcome of a generation run, including how it was produced
#[derive(Debug, Clone)]
pub struct GenerationOutcome {
    pub site: GeneratedSite,
    /// Model that produced the output, if any attempt succeeded
    pub model: Option<String>,
    /// True when every section came straight from the model
    pub complete: bool,
    /// Sections filled from the built-in fallback page
    pub filled_sections: Vec<&'static str>,
}

/// High-level site generation service over a pluggable backend
pub struct GenerationService {
    backend: Arc<dyn CompletionBackend>,
    config: GenerationConfig,
    prompts: PromptBuilder,
}

impl GenerationService {
    pub fn new(backend: Arc<dyn CompletionBackend>, config: GenerationConfig) -> Self {
        Self {
            backend,
            config,
            prompts: PromptBuilder::new(),
        }
    }

    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    pub async fn backend_available(&self) -> bool {
        self.backend.health_check().await
    }

    /// Generate a complete site for the request.
    ///
    /// Tries the configured model first and each fallback model in order.
    /// Every model gets `max_retries + 1` attempts with exponential backoff
    /// between them; a `ModelNotFound` error skips straight to the next
    /// model. When the raw output misses a section, the missing pieces are
    /// filled from the built-in fallback page rather than failing the call.
    pub async fn generate(&self, request: &SiteRequest) -> Result<GenerationOutcome, GenerationError> {
        let prompt = self.prompts.build(request);
        let system_prompt = self.prompts.system_prompt();
        debug!("prompt assembled: {} chars", prompt.len());
        let completion = CompletionRequest::new(prompt.as_str(), system_prompt.as_str(), &self.config);

        let mut last_error = String::new();
        for model in self.candidate_models() {
            match self.run_model(&model, &completion).await {
                Ok(raw) => {
                    info!(
                        "model {} answered with {} chars",
                        model,
                        raw.chars().count()
                    );
                    return Ok(self.assemble(raw, model));
                }
                Err(BackendError::ModelNotFound(name)) => {
                    warn!("model {name} not available, trying next fallback");
                    last_error = format!("model {name} not found");
                }
                Err(err) => {
                    warn!("model {model} failed: {err}");
                    last_error = err.to_string();
                }
            }
        }

        Err(GenerationError::AllModelsFailed(last_error))
    }

    fn candidate_models(&self) -> Vec<String> {
        let mut models = Vec::with_capacity(1 + self.config.fallback_models.len());
        models.push(self.config.model.clone());
        for fallback in &self.config.fallback_models {
            if !models.contains(fallback) {
                models.push(fallback.clone());
            }
        }
        models
    }

    /// Run one model through the retry loop
    async fn run_model(
        &self,
        model: &str,
        request: &CompletionRequest,
    ) -> Result<String, BackendError> {
        let attempts = self.config.max_retries + 1;
        let mut delay = self.config.retry_delay;

        for attempt in 1..=attempts {
            debug!("attempt {attempt}/{attempts} against model {model}");
            let call = self.backend.complete(model, request);
            let result = match tokio::time::timeout(self.config.request_timeout, call).await {
                Ok(result) => result,
                Err(_) => Err(BackendError::Timeout),
            };

            match result {
                Ok(raw) => return Ok(raw),
                // Unknown model on one backend stays unknown on retry
                Err(err @ BackendError::ModelNotFound(_)) => return Err(err),
                Err(err @ BackendError::NotConfigured(_)) => return Err(err),
                Err(err) if attempt < attempts => {
                    warn!("attempt {attempt} failed ({err}), retrying in {delay:?}");
                    tokio::time::sleep(delay).await;
                    delay = delay.saturating_mul(2).min(Duration::from_secs(30));
                }
                Err(err) => return Err(err),
            }
        }

        unreachable!("retry loop always returns")
    }

    /// Extract, sanitize and fallback-fill the raw model output
    fn assemble(&self, raw: String, model: String) -> GenerationOutcome {
        let extracted = extract(&raw);
        let complete = extracted.is_complete();
        let mut filled_sections = Vec::new();

        let html = match extracted.html {
            Some(html) => sanitize_html(&html),
            None => {
                filled_sections.push("html");
                FALLBACK_HTML.to_string()
            }
        };
        let css = match extracted.css {
            Some(css) => sanitize_css(&css),
            None => {
                filled_sections.push("css");
                FALLBACK_CSS.to_string()
            }
        };
        let js = match extracted.js {
            Some(js) => sanitize_js(&js),
            None => {
                filled_sections.push("js");
                FALLBACK_JS.to_string()
            }
        };

        if !filled_sections.is_empty() {
            warn!("filled missing sections from fallback: {filled_sections:?}");
        }

        GenerationOutcome {
            site: GeneratedSite { html, css, js },
            model: Some(model),
            complete,
            filled_sections,
        }
    }

    /// Build the full fallback site without touching the backend
    pub fn fallback_site() -> GeneratedSite {
        GeneratedSite {
            html: FALLBACK_HTML.to_string(),
            css: FALLBACK_CSS.to_string(),
            js: FALLBACK_JS.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BusinessType, Feature, Goal, Style};
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Scripted backend that pops one canned result per call
    struct ScriptedBackend {
        script: Mutex<Vec<Result<String, BackendError>>>,
        calls: Mutex<Vec<String>>,
    }

    impl ScriptedBackend {
        fn new(script: Vec<Result<String, BackendError>>) -> Self {
            Self {
                script: Mutex::new(script),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl CompletionBackend for ScriptedBackend {
        fn name(&self) -> &'static str {
            "scripted"
        }

        fn description(&self) -> &'static str {
            "test backend replaying a canned script"
        }

        fn is_hosted(&self) -> bool {
            false
        }

        async fn health_check(&self) -> bool {
            true
        }

        async fn complete(
            &self,
            model: &str,
            _request: &CompletionRequest,
        ) -> Result<String, BackendError> {
            self.calls.lock().unwrap().push(model.to_string());
            let mut script = self.script.lock().unwrap();
            if script.is_empty() {
                return Err(BackendError::Api("script exhausted".into()));
            }
            script.remove(0)
        }
    }

    fn request() -> SiteRequest {
        SiteRequest {
            business_type: BusinessType::Restaurant,
            features: vec![Feature::Hours, Feature::Location],
            goal: Goal::Messages,
            style: Style::Modern,
        }
    }

    fn full_output() -> String {
        "```html\n<main><h1>Bistro</h1></main>\n```\n\
         ```css\nh1 { color: teal; }\n```\n\
         ```javascript\nconsole.log('hi');\n```"
            .to_string()
    }

    fn service(backend: Arc<ScriptedBackend>) -> GenerationService {
        GenerationService::new(backend, GenerationConfig::instant())
    }

    #[tokio::test]
    async fn successful_generation_returns_all_sections() {
        let backend = Arc::new(ScriptedBackend::new(vec![Ok(full_output())]));
        let svc = service(backend.clone());

        let outcome = svc.generate(&request()).await.unwrap();
        assert!(outcome.complete);
        assert!(outcome.filled_sections.is_empty());
        assert!(outcome.site.html.contains("Bistro"));
        assert_eq!(outcome.site.css, "h1 { color: teal; }");
        assert_eq!(outcome.model.as_deref(), Some(crate::config::DEFAULT_MODEL));
        assert_eq!(backend.calls().len(), 1);
    }

    #[tokio::test]
    async fn transient_failures_are_retried() {
        let backend = Arc::new(ScriptedBackend::new(vec![
            Err(BackendError::Api("http 500".into())),
            Err(BackendError::Api("http 502".into())),
            Ok(full_output()),
        ]));
        let svc = service(backend.clone());

        let outcome = svc.generate(&request()).await.unwrap();
        assert!(outcome.complete);
        // two failures plus the success, all against the primary model
        let calls = backend.calls();
        assert_eq!(calls.len(), 3);
        assert!(calls.iter().all(|m| m == crate::config::DEFAULT_MODEL));
    }

    #[tokio::test]
    async fn unknown_model_rotates_to_fallback_without_retrying() {
        let backend = Arc::new(ScriptedBackend::new(vec![
            Err(BackendError::ModelNotFound(
                crate::config::DEFAULT_MODEL.into(),
            )),
            Ok(full_output()),
        ]));
        let svc = service(backend.clone());

        let outcome = svc.generate(&request()).await.unwrap();
        let calls = backend.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0], crate::config::DEFAULT_MODEL);
        assert_eq!(calls[1], crate::config::DEFAULT_FALLBACK_MODELS[0]);
        assert_eq!(
            outcome.model.as_deref(),
            Some(crate::config::DEFAULT_FALLBACK_MODELS[0])
        );
    }

    #[tokio::test]
    async fn exhausting_every_model_reports_the_last_error() {
        // 3 models x 3 attempts each
        let script = (0..9)
            .map(|i| Err(BackendError::Api(format!("boom {i}"))))
            .collect();
        let backend = Arc::new(ScriptedBackend::new(script));
        let svc = service(backend.clone());

        let err = svc.generate(&request()).await.unwrap_err();
        match err {
            GenerationError::AllModelsFailed(msg) => assert!(msg.contains("boom 8")),
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(backend.calls().len(), 9);
    }

    #[tokio::test]
    async fn missing_sections_are_filled_from_fallback() {
        let backend = Arc::new(ScriptedBackend::new(vec![Ok(
            "```html\n<main>only markup</main>\n```".to_string(),
        )]));
        let svc = service(backend);

        let outcome = svc.generate(&request()).await.unwrap();
        assert!(!outcome.complete);
        assert_eq!(outcome.filled_sections, vec!["css", "js"]);
        assert!(outcome.site.html.contains("only markup"));
        assert_eq!(outcome.site.css, FALLBACK_CSS);
        assert_eq!(outcome.site.js, FALLBACK_JS);
    }

    #[tokio::test]
    async fn model_output_is_sanitized() {
        let raw = "```html\n<div>safe</div><script>alert(1)</script>\n```\n\
                   ```css\nbody { color: red; }\n```\n\
                   ```javascript\neval('x'); console.log('ok');\n```";
        let backend = Arc::new(ScriptedBackend::new(vec![Ok(raw.to_string())]));
        let svc = service(backend);

        let outcome = svc.generate(&request()).await.unwrap();
        assert!(!outcome.site.html.contains("<script"));
        assert!(outcome.site.html.contains("<div>safe</div>"));
        assert!(outcome.site.js.contains("// disabled for safety: eval("));
        assert!(outcome.site.js.contains("console.log('ok')"));
    }

    #[test]
    fn fallback_site_is_complete() {
        let site = GenerationService::fallback_site();
        let stats = site.stats();
        assert!(stats.html_chars > 0 && stats.css_chars > 0 && stats.js_chars > 0);
    }
}
