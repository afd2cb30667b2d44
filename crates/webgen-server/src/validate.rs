//! Request validation and input scrubbing

use generation::SiteRequest;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::error::ApiError;

/// Feature cap keeps the generated prompt within the token budget
pub const MAX_FEATURES: usize = 5;

/// Domains that only hand out throwaway inboxes
const DISPOSABLE_DOMAINS: &[&str] = &["tempmail.com", "guerrillamail.com", "mailinator.com"];

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("email regex")
});

static SCRIPT_TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<script\b.*?</script>").expect("script regex"));
static EVENT_ATTR_DQ_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)on\w+="[^"]*""#).expect("handler regex"));
static EVENT_ATTR_SQ_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)on\w+='[^']*'").expect("handler regex"));
static JS_URL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)javascript:").expect("url regex"));

/// Check a generation request beyond what the typed decoding enforces
pub fn validate_generate(request: &SiteRequest) -> Result<(), ApiError> {
    let mut errors = Vec::new();

    if request.features.is_empty() {
        errors.push("select at least one feature".to_string());
    }
    if request.features.len() > MAX_FEATURES {
        errors.push(format!("at most {MAX_FEATURES} features are allowed"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ApiError::Validation(errors))
    }
}

/// Validate a lead email: syntax first, then the disposable-domain denylist
pub fn validate_lead_email(email: &str) -> Result<(), ApiError> {
    if !EMAIL_RE.is_match(email) {
        return Err(ApiError::BadRequest("invalid email".to_string()));
    }

    let domain = email.rsplit('@').next().unwrap_or_default();
    if DISPOSABLE_DOMAINS.iter().any(|d| domain.contains(d)) {
        return Err(ApiError::BadRequest(
            "please use a permanent email address".to_string(),
        ));
    }

    Ok(())
}

/// Strip script tags, inline event handlers and `javascript:` URLs from
/// every string in a JSON payload. Arrays and objects are scrubbed
/// recursively; other values pass through.
pub fn scrub_text(value: Value) -> Value {
    match value {
        Value::String(text) => {
            let text = SCRIPT_TAG_RE.replace_all(&text, "");
            let text = EVENT_ATTR_DQ_RE.replace_all(&text, "");
            let text = EVENT_ATTR_SQ_RE.replace_all(&text, "");
            let text = JS_URL_RE.replace_all(&text, "");
            Value::String(text.trim().to_string())
        }
        Value::Array(items) => Value::Array(items.into_iter().map(scrub_text).collect()),
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, item)| (key, scrub_text(item)))
                .collect(),
        ),
        other => other,
    }
}
