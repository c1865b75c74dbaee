//! Coercing model output into JSON
//!
//! Models asked for "only JSON" still wrap it in prose or code fences, so we
//! take the widest `{ ... }` span and parse that.

use serde_json::Value;

/// Extract the JSON object embedded in `text`.
///
/// When the text contains a `{ ... }` span, only that span is parsed. When it
/// contains no braces at all the whole text is tried. Returns `None` when
/// parsing fails.
pub fn extract_json_object(text: &str) -> Option<Value> {
    match (text.find('{'), text.rfind('}')) {
        (Some(start), Some(end)) if start < end => serde_json::from_str(&text[start..=end]).ok(),
        _ => serde_json::from_str(text.trim()).ok(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_plain_object() {
        assert_eq!(extract_json_object(r#"{"a": 1}"#), Some(json!({"a": 1})));
    }

    #[test]
    fn test_object_inside_code_fence() {
        let text = "Here you go:\n```json\n{\"score\": \"8\", \"issues\": []}\n```\nThanks!";
        assert_eq!(
            extract_json_object(text),
            Some(json!({"score": "8", "issues": []}))
        );
    }

    #[test]
    fn test_nested_braces_use_outermost_span() {
        let text = r#"{"outer": {"inner": true}}"#;
        assert_eq!(extract_json_object(text), Some(json!({"outer": {"inner": true}})));
    }

    #[test]
    fn test_broken_span_is_none() {
        assert_eq!(extract_json_object("{ not json }"), None);
        assert_eq!(extract_json_object("no json here"), None);
    }

    #[test]
    fn test_braceless_json_value() {
        assert_eq!(extract_json_object("[1, 2]"), Some(json!([1, 2])));
    }
}
