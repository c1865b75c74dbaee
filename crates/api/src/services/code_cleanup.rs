//! Post-processing for generated code
//!
//! The model is told to return bare code but often adds fences, a language
//! tag line and comments anyway. These are stripped in a fixed order.

use once_cell::sync::Lazy;
use regex::Regex;

/// Output shorter than this (in chars) is treated as a failed generation.
pub const MIN_CODE_CHARS: usize = 10;

static FENCE_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"```[\s\S]*?\n").expect("valid fence regex"));
static FENCE_TAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"```[\s\S]*$").expect("valid fence tail regex"));
static LANGUAGE_TAG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(javascript|js|python|py|java|cpp|csharp|php|ruby|go|rust|swift)[ \t]*(\r?\n|$)")
        .expect("valid language tag regex")
});
static DOC_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/\*\*[\s\S]*?\*/").expect("valid doc block regex"));
static BLOCK_COMMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/\*[\s\S]*?\*/").expect("valid block comment regex"));
static LINE_COMMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)//.*$").expect("valid line comment regex"));

/// Strip fences, a leading language tag, and comments, then trim.
pub fn strip_code_noise(raw: &str) -> String {
    let cleaned = FENCE_LINE.replace_all(raw, "");
    let cleaned = FENCE_TAIL.replace_all(&cleaned, "");
    let cleaned = LANGUAGE_TAG.replace(&cleaned, "");
    let cleaned = DOC_BLOCK.replace_all(&cleaned, "");
    let cleaned = BLOCK_COMMENT.replace_all(&cleaned, "");
    let cleaned = LINE_COMMENT.replace_all(&cleaned, "");
    cleaned.trim().to_string()
}

pub fn generation_failed_placeholder(problem: &str, language: &str) -> String {
    format!(
        "// Code generation failed. Please try again with a more specific problem statement.\n// Problem: {}\n// Language: {}",
        problem, language
    )
}

/// Clean model output, substituting the placeholder when too little is left.
pub fn clean_generated_code(raw: &str, problem: &str, language: &str) -> String {
    let cleaned = strip_code_noise(raw);
    if cleaned.chars().count() < MIN_CODE_CHARS {
        generation_failed_placeholder(problem, language)
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_fences_and_tag() {
        let raw = "```python\ndef add(a, b):\n    return a + b\n```";
        assert_eq!(strip_code_noise(raw), "def add(a, b):\n    return a + b");
    }

    #[test]
    fn test_strips_bare_language_line() {
        let raw = "javascript\nconst add = (a, b) => a + b;";
        assert_eq!(strip_code_noise(raw), "const add = (a, b) => a + b;");
    }

    #[test]
    fn test_identifier_starting_with_tag_is_kept() {
        let raw = "jsonData = load()\nprint(jsonData)";
        assert_eq!(strip_code_noise(raw), raw);
    }

    #[test]
    fn test_strips_comments() {
        let raw = "/**\n * Adds.\n */\nfunction add(a, b) { /* inline */ return a + b; } // trailing";
        assert_eq!(strip_code_noise(raw), "function add(a, b) {  return a + b; }");
    }

    #[test]
    fn test_short_output_becomes_placeholder() {
        let code = clean_generated_code("```js\n// nothing\n```", "Reverse a list", "javascript");
        assert_eq!(
            code,
            "// Code generation failed. Please try again with a more specific problem statement.\n// Problem: Reverse a list\n// Language: javascript"
        );
    }
}
