//! JSON extraction from free-form model output.
//!
//! Models are instructed to reply with bare JSON but routinely wrap it in
//! code fences or surrounding prose; this module locates the one object
//! we asked for.

use regex::Regex;
use serde_json::{Map, Value};
use std::sync::OnceLock;
use triage_core::{Result, TriageError};

static JSON_FENCE: OnceLock<Regex> = OnceLock::new();
static ANY_FENCE: OnceLock<Regex> = OnceLock::new();

fn json_fence() -> &'static Regex {
    JSON_FENCE.get_or_init(|| Regex::new(r"(?si)```json\s*(.*?)\s*```").expect("invalid regex"))
}

fn any_fence() -> &'static Regex {
    ANY_FENCE.get_or_init(|| Regex::new(r"(?s)```\s*(.*?)\s*```").expect("invalid regex"))
}

/// Extract a single JSON object from model output.
///
/// Handles, in order of preference:
/// - a ```json fenced block
/// - any fenced block
/// - the first `{...}` span when the text does not itself start with `{`
/// - the bare (trimmed) text
pub fn extract_json_object(text: &str) -> Result<Map<String, Value>> {
    let mut candidate = text.trim();
    if candidate.is_empty() {
        return Err(TriageError::Parse("empty model response text".to_string()));
    }

    if candidate.contains("```") {
        if let Some(m) = json_fence().captures(candidate) {
            candidate = m.get(1).map_or("", |g| g.as_str()).trim();
        } else if let Some(m) = any_fence().captures(candidate) {
            candidate = m.get(1).map_or("", |g| g.as_str()).trim();
        }
    }

    // Still prose around the object: take the first-{ .. last-} span.
    // When no span exists the candidate is parsed as-is and fails below.
    if !candidate.starts_with('{') {
        if let (Some(start), Some(end)) = (candidate.find('{'), candidate.rfind('}')) {
            if start < end {
                candidate = candidate[start..=end].trim();
            }
        }
    }

    let parsed: Value = serde_json::from_str(candidate)
        .map_err(|e| TriageError::Parse(format!("could not parse JSON: {}", e)))?;

    match parsed {
        Value::Object(map) => Ok(map),
        other => Err(TriageError::Parse(format!(
            "expected JSON object, got {}",
            json_type_name(&other)
        ))),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_json() {
        let obj = extract_json_object(r#"{"urgency": "HIGH"}"#).unwrap();
        assert_eq!(obj.get("urgency").unwrap(), "HIGH");
    }

    #[test]
    fn test_json_fence() {
        let text = "```json\n{\"urgency\":\"HIGH\",\"confidence\":0.9,\"key_findings\":\"x\",\"recommended_action\":\"y\"}\n```";
        let obj = extract_json_object(text).unwrap();
        assert_eq!(obj.get("urgency").unwrap(), "HIGH");
        assert_eq!(obj.get("confidence").unwrap().as_f64().unwrap(), 0.9);
        assert_eq!(obj.get("key_findings").unwrap(), "x");
        assert_eq!(obj.get("recommended_action").unwrap(), "y");
    }

    #[test]
    fn test_json_fence_case_insensitive() {
        let text = "```JSON\n{\"a\": 1}\n```";
        let obj = extract_json_object(text).unwrap();
        assert_eq!(obj.get("a").unwrap(), 1);
    }

    #[test]
    fn test_plain_fence() {
        let text = "Here you go:\n```\n{\"a\": 1}\n```";
        let obj = extract_json_object(text).unwrap();
        assert_eq!(obj.get("a").unwrap(), 1);
    }

    #[test]
    fn test_json_fence_preferred_over_plain() {
        let text = "```\nnot the answer\n```\n```json\n{\"a\": 2}\n```";
        let obj = extract_json_object(text).unwrap();
        assert_eq!(obj.get("a").unwrap(), 2);
    }

    #[test]
    fn test_leading_and_trailing_prose() {
        let text = "Sure! The triage assessment is: {\"a\": 1} Let me know if you need more.";
        let obj = extract_json_object(text).unwrap();
        assert_eq!(obj.get("a").unwrap(), 1);
    }

    #[test]
    fn test_empty_input_rejected() {
        let err = extract_json_object("   \n ").unwrap_err();
        assert!(matches!(err, TriageError::Parse(_)));
    }

    #[test]
    fn test_no_object_rejected() {
        let err = extract_json_object("no braces here").unwrap_err();
        assert!(matches!(err, TriageError::Parse(_)));
    }

    #[test]
    fn test_invalid_json_rejected() {
        let err = extract_json_object("{not json}").unwrap_err();
        assert!(matches!(err, TriageError::Parse(_)));
    }

    #[test]
    fn test_array_rejected() {
        let err = extract_json_object("[1, 2, 3]").unwrap_err();
        match err {
            TriageError::Parse(msg) => assert!(msg.contains("array")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_scalar_in_fence_rejected() {
        let err = extract_json_object("```json\n42\n```").unwrap_err();
        match err {
            TriageError::Parse(msg) => assert!(msg.contains("number")),
            other => panic!("unexpected error: {other}"),
        }
    }
}
