//! Structured extraction of model output
//!
//! Models are asked for a JSON object with `html`/`css`/`js` fields, but
//! frequently answer with fenced markdown blocks or bare markup instead.
//! Extraction is therefore two-phase: JSON-first, then an ordered list of
//! regex patterns per language. The first matching pattern wins.

use once_cell::sync::Lazy;
use regex::Regex;

/// Per-section extraction result. `None` means the section was absent and
/// the caller should substitute a fallback snippet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractedSite {
    pub html: Option<String>,
    pub css: Option<String>,
    pub js: Option<String>,
}

impl ExtractedSite {
    /// True when every section was found
    pub fn is_complete(&self) -> bool {
        self.html.is_some() && self.css.is_some() && self.js.is_some()
    }
}

// Locates a JSON object that mentions all three expected fields.
static JSON_OBJECT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?s)\{.*"html".*"css".*"js".*\}"#).expect("valid regex"));

// Ordered patterns per language; earlier patterns are more specific.
static HTML_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"(?is)```html\n(.*?)\n```").expect("valid regex"),
        // Unterminated fence (model ran out of tokens)
        Regex::new(r"(?is)```html\n(.*?)(?:\n```|$)").expect("valid regex"),
        Regex::new(r"(?is)<html[^>]*>(.*?)</html>").expect("valid regex"),
        Regex::new(r"(?is)<body[^>]*>(.*?)</body>").expect("valid regex"),
    ]
});

static CSS_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"(?is)```css\n(.*?)\n```").expect("valid regex"),
        Regex::new(r"(?is)<style[^>]*>(.*?)</style>").expect("valid regex"),
        Regex::new(r"(?is)```scss\n(.*?)\n```").expect("valid regex"),
        Regex::new(r"(?is)```sass\n(.*?)\n```").expect("valid regex"),
    ]
});

static JS_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"(?is)```javascript\n(.*?)\n```").expect("valid regex"),
        Regex::new(r"(?is)```js\n(.*?)\n```").expect("valid regex"),
        Regex::new(r"(?is)<script[^>]*>(.*?)</script>").expect("valid regex"),
    ]
});

/// Extract site sections from raw model output.
///
/// Tries JSON first; if the output contains a parseable object with
/// non-empty `html`, `css` and `js` string fields, that wins. Otherwise
/// falls back to markdown-fence extraction per section.
pub fn extract(raw: &str) -> ExtractedSite {
    if let Some(site) = extract_json(raw) {
        return site;
    }
    log::debug!("Output is not a complete JSON object, extracting code blocks");
    extract_markdown(raw)
}

fn extract_json(raw: &str) -> Option<ExtractedSite> {
    let candidate = JSON_OBJECT.find(raw)?;
    let parsed: serde_json::Value = serde_json::from_str(candidate.as_str()).ok()?;

    let field = |name: &str| -> Option<String> {
        parsed
            .get(name)
            .and_then(|v| v.as_str())
            .filter(|s| !s.trim().is_empty())
            .map(|s| s.to_string())
    };

    // Only accept the JSON path when all three sections are present;
    // partial objects fall through to fence extraction.
    match (field("html"), field("css"), field("js")) {
        (Some(html), Some(css), Some(js)) => Some(ExtractedSite {
            html: Some(html),
            css: Some(css),
            js: Some(js),
        }),
        _ => None,
    }
}

fn extract_markdown(raw: &str) -> ExtractedSite {
    ExtractedSite {
        html: first_match(&HTML_PATTERNS, raw),
        css: first_match(&CSS_PATTERNS, raw),
        js: first_match(&JS_PATTERNS, raw),
    }
}

fn first_match(patterns: &[Regex], raw: &str) -> Option<String> {
    for pattern in patterns {
        if let Some(captures) = pattern.captures(raw) {
            if let Some(body) = captures.get(1) {
                let trimmed = body.as_str().trim();
                if !trimmed.is_empty() {
                    return Some(trimmed.to_string());
                }
            }
        }
    }
    None
}
