use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::collections::HashMap;

static PLACEHOLDER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{\s*([a-z_]+)\s*\}\}").expect("valid placeholder regex"));

/// Replace `{{name}}` placeholders with HTML-escaped values. Unknown
/// placeholders render as empty strings.
pub fn render_template(template: &str, vars: &HashMap<&str, String>) -> String {
    PLACEHOLDER_PATTERN
        .replace_all(template, |caps: &Captures| {
            vars.get(&caps[1])
                .map(|value| escape_html(value))
                .unwrap_or_default()
        })
        .into_owned()
}

pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
