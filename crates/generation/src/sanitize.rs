//! Denylist-based sanitization of generated code
//!
//! The model is instructed not to emit dangerous constructs, but output is
//! still scrubbed before it is returned to callers: active content is
//! stripped from HTML, and known-dangerous JavaScript calls are neutralized
//! into comments. This is a string pipeline, not an HTML parser.

use once_cell::sync::Lazy;
use regex::Regex;

static HTML_DENYLIST: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"(?is)<script\b.*?</script>").expect("valid regex"),
        Regex::new(r"(?is)<iframe\b.*?</iframe>").expect("valid regex"),
        Regex::new(r"(?is)<object\b.*?</object>").expect("valid regex"),
        Regex::new(r"(?is)<embed\b.*?</embed>").expect("valid regex"),
        // Inline event handlers, both quote styles
        Regex::new(r#"(?i)on\w+="[^"]*""#).expect("valid regex"),
        Regex::new(r"(?i)on\w+='[^']*'").expect("valid regex"),
        Regex::new(r"(?i)javascript:").expect("valid regex"),
    ]
});

static JS_DENYLIST: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"eval\s*\(").expect("valid regex"),
        Regex::new(r"document\.write").expect("valid regex"),
        Regex::new(r"localStorage\.setItem").expect("valid regex"),
        Regex::new(r"sessionStorage\.setItem").expect("valid regex"),
        Regex::new(r"(?i)cookie\s*=").expect("valid regex"),
        Regex::new(r"window\.location\s*=").expect("valid regex"),
        Regex::new(r"XMLHttpRequest").expect("valid regex"),
        Regex::new(r"fetch\s*\(").expect("valid regex"),
    ]
});

/// Strip active content from generated HTML
pub fn sanitize_html(html: &str) -> String {
    let mut safe = html.to_string();
    for pattern in HTML_DENYLIST.iter() {
        safe = pattern.replace_all(&safe, "").into_owned();
    }
    safe
}

/// CSS passes through unmodified; the denylist has no CSS entries
pub fn sanitize_css(css: &str) -> String {
    css.to_string()
}

/// Neutralize dangerous JavaScript calls.
///
/// Each denylisted match is replaced with a line comment that preserves
/// the original text, so the rest of the statement is commented out too.
pub fn sanitize_js(js: &str) -> String {
    let mut safe = js.to_string();
    for pattern in JS_DENYLIST.iter() {
        safe = pattern
            .replace_all(&safe, |caps: &regex::Captures<'_>| {
                format!("// disabled for safety: {}", &caps[0])
            })
            .into_owned();
    }
    safe
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_script_elements() {
        let html = "<div>ok</div><script>alert('x')</script><p>after</p>";
        let safe = sanitize_html(html);
        assert_eq!(safe, "<div>ok</div><p>after</p>");
    }

    #[test]
    fn strips_script_elements_across_lines() {
        let html = "<p>hi</p><script type=\"module\">\nsteal();\n</script>";
        assert_eq!(sanitize_html(html), "<p>hi</p>");
    }

    #[test]
    fn strips_iframe_object_embed() {
        let html = "<iframe src=\"//evil\"></iframe><object data=\"x\"></object><embed src=\"y\"></embed><b>keep</b>";
        assert_eq!(sanitize_html(html), "<b>keep</b>");
    }

    #[test]
    fn strips_inline_event_handlers() {
        let html = r#"<button onclick="doEvil()" onmouseover='more()'>Click</button>"#;
        let safe = sanitize_html(html);
        assert!(!safe.contains("onclick"));
        assert!(!safe.contains("onmouseover"));
        assert!(safe.contains("<button"));
        assert!(safe.contains("Click"));
    }

    #[test]
    fn strips_javascript_urls() {
        let html = r#"<a href="javascript:alert(1)">link</a>"#;
        let safe = sanitize_html(html);
        assert!(!safe.to_lowercase().contains("javascript:"));
        assert!(safe.contains("<a href="));
    }

    #[test]
    fn css_is_passed_through() {
        let css = "body { background: url('x.png'); }";
        assert_eq!(sanitize_css(css), css);
    }

    #[test]
    fn neutralizes_eval() {
        let js = "eval('2+2');\nconsole.log('fine');";
        let safe = sanitize_js(js);
        assert!(safe.starts_with("// disabled for safety: eval("));
        assert!(safe.contains("console.log('fine');"));
    }

    #[test]
    fn neutralizes_storage_and_network_calls() {
        let js = "localStorage.setItem('k', 'v');\nfetch('/api');\nnew XMLHttpRequest();";
        let safe = sanitize_js(js);
        assert!(safe.contains("// disabled for safety: localStorage.setItem"));
        assert!(safe.contains("// disabled for safety: fetch("));
        assert!(safe.contains("// disabled for safety: XMLHttpRequest"));
    }

    #[test]
    fn neutralizes_cookie_and_location_writes() {
        let js = "document.cookie = 'a=1';\nwindow.location = 'https://evil';";
        let safe = sanitize_js(js);
        assert!(safe.contains("// disabled for safety: cookie ="));
        assert!(safe.contains("// disabled for safety: window.location ="));
    }

    #[test]
    fn clean_js_is_untouched() {
        let js = "document.querySelector('.menu').addEventListener('click', toggle);";
        assert_eq!(sanitize_js(js), js);
    }
}
