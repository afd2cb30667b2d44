//! Local demo backend
//!
//! Used when no API token is configured. Produces a canned fenced-markdown
//! response so the normal extraction and sanitization path still runs,
//! which keeps the service usable for local development and demos.

use async_trait::async_trait;

use super::{BackendError, CompletionBackend, CompletionRequest};

/// Tokenless backend that renders a fixed demo site
pub struct LocalDemoBackend;

impl LocalDemoBackend {
    pub fn new() -> Self {
        Self
    }

    /// Render the canned response, echoing a prompt excerpt into the page
    fn render(prompt: &str) -> String {
        let excerpt: String = prompt.chars().take(200).collect();
        format!(
            "```html\n<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n    <meta charset=\"UTF-8\">\n    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n    <title>Local Demo - WebGen AI</title>\n</head>\n<body>\n    <div class=\"container\">\n        <header class=\"demo-header\">\n            <h1>Locally Generated Demo</h1>\n            <p>This is a basic demo generated without AI. Set REPLICATE_API_TOKEN to enable hosted generation.</p>\n        </header>\n        <main class=\"demo-content\">\n            <h2>Business Website</h2>\n            <p>Prompt received: {}...</p>\n            <div class=\"features-list\">\n                <span class=\"feature-tag\">HTML5</span>\n                <span class=\"feature-tag\">CSS3</span>\n                <span class=\"feature-tag\">Responsive</span>\n                <span class=\"feature-tag\">JavaScript</span>\n            </div>\n            <button class=\"cta-button\" id=\"demo-button\">Try the demo</button>\n        </main>\n    </div>\n</body>\n</html>\n```\n\n```css\nbody {{\n    font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;\n    line-height: 1.6;\n    color: #333;\n    background: #f8f9fa;\n}}\n\n.container {{\n    max-width: 1200px;\n    margin: 0 auto;\n    padding: 2rem;\n    animation: fadeIn 0.5s ease-in;\n}}\n\n@keyframes fadeIn {{\n    from {{ opacity: 0; transform: translateY(20px); }}\n    to {{ opacity: 1; transform: translateY(0); }}\n}}\n\n.demo-header {{\n    text-align: center;\n    padding: 3rem 0;\n}}\n\n.demo-header h1 {{\n    color: #4361ee;\n    font-size: 2.5rem;\n    margin-bottom: 1rem;\n}}\n\n.demo-content {{\n    background: white;\n    padding: 2rem;\n    border-radius: 10px;\n    box-shadow: 0 4px 6px rgba(0,0,0,0.1);\n}}\n\n.features-list {{\n    display: flex;\n    flex-wrap: wrap;\n    gap: 10px;\n    margin: 1.5rem 0;\n}}\n\n.feature-tag {{\n    background: #4cc9f0;\n    color: white;\n    padding: 5px 15px;\n    border-radius: 20px;\n    font-size: 14px;\n}}\n\n.cta-button {{\n    background: linear-gradient(135deg, #4361ee, #7209b7);\n    color: white;\n    border: none;\n    padding: 12px 25px;\n    border-radius: 5px;\n    font-size: 16px;\n    cursor: pointer;\n    margin-top: 20px;\n    transition: all 0.3s ease;\n}}\n\n.cta-button:hover {{\n    transform: translateY(-2px);\n    box-shadow: 0 5px 15px rgba(67, 97, 238, 0.3);\n}}\n```\n\n```javascript\n// Local demo interactions\nconsole.log('Local demo generated by WebGen AI');\n\nfunction initDemo() {{\n    var year = new Date().getFullYear();\n    var footer = document.createElement('div');\n    footer.style.marginTop = '20px';\n    footer.style.textAlign = 'center';\n    footer.style.color = '#666';\n    footer.textContent = '\\u00a9 ' + year + ' WebGen AI - Local Demo';\n    document.querySelector('.demo-content').appendChild(footer);\n\n    var clickCount = 0;\n    var button = document.getElementById('demo-button');\n    if (button) {{\n        button.addEventListener('click', function () {{\n            clickCount++;\n            console.log('Button clicked', clickCount, 'times');\n        }});\n    }}\n}}\n\ndocument.addEventListener('DOMContentLoaded', initDemo);\n```\n",
            excerpt
        )
    }
}

impl Default for LocalDemoBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CompletionBackend for LocalDemoBackend {
    fn name(&self) -> &'static str {
        "local-demo"
    }

    fn description(&self) -> &'static str {
        "Tokenless fallback that renders a fixed demo site. No network calls."
    }

    fn is_hosted(&self) -> bool {
        false
    }

    async fn health_check(&self) -> bool {
        true
    }

    async fn complete(
        &self,
        _model: &str,
        request: &CompletionRequest,
    ) -> Result<String, BackendError> {
        log::info!("Generating local demo without AI");
        Ok(Self::render(&request.prompt))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GenerationConfig;

    #[tokio::test]
    async fn emits_three_fenced_blocks() {
        let backend = LocalDemoBackend::new();
        let config = GenerationConfig::default();
        let request = CompletionRequest::new("a bakery site", "system", &config);
        let output = backend.complete("any-model", &request).await.unwrap();
        assert!(output.contains("```html"));
        assert!(output.contains("```css"));
        assert!(output.contains("```javascript"));
    }

    #[tokio::test]
    async fn echoes_prompt_excerpt() {
        let backend = LocalDemoBackend::new();
        let config = GenerationConfig::default();
        let request = CompletionRequest::new("a flower shop with catalog", "system", &config);
        let output = backend.complete("m", &request).await.unwrap();
        assert!(output.contains("a flower shop with catalog"));
    }

    #[test]
    fn excerpt_is_capped_at_200_chars() {
        let long_prompt = "x".repeat(500);
        let output = LocalDemoBackend::render(&long_prompt);
        assert!(output.contains(&format!("{}...", "x".repeat(200))));
        assert!(!output.contains(&"x".repeat(201)));
    }
}
