//! Validation of the extracted response object against the triage
//! contract.

use serde_json::{Map, Value};
use triage_core::{Result, TriageError, TriageResponse, Urgency};

const REQUIRED_KEYS: [&str; 4] = ["urgency", "confidence", "key_findings", "recommended_action"];

/// Validate an extracted object into a [`TriageResponse`].
///
/// Requires all four keys; normalizes urgency (trim + upper-case),
/// coerces confidence to a float in [0.0, 1.0], and requires both text
/// fields to be non-empty after trimming. Extra keys are ignored.
pub fn validate_response(object: &Map<String, Value>) -> Result<TriageResponse> {
    let missing: Vec<&str> =
        REQUIRED_KEYS.iter().copied().filter(|k| !object.contains_key(*k)).collect();
    if !missing.is_empty() {
        return Err(TriageError::Validation(format!(
            "missing keys in response JSON: {:?}",
            missing
        )));
    }

    let raw_urgency = scalar_to_string(&object["urgency"]);
    let urgency = Urgency::parse(&raw_urgency).ok_or_else(|| {
        TriageError::Validation(format!("invalid urgency '{}'", raw_urgency))
    })?;

    let confidence = coerce_f64(&object["confidence"])
        .ok_or_else(|| TriageError::Validation("confidence must be a number".to_string()))?;
    if !(0.0..=1.0).contains(&confidence) {
        return Err(TriageError::Validation(format!("confidence out of range: {}", confidence)));
    }

    let key_findings = scalar_to_string(&object["key_findings"]).trim().to_string();
    if key_findings.is_empty() {
        return Err(TriageError::Validation("key_findings is empty".to_string()));
    }

    let recommended_action = scalar_to_string(&object["recommended_action"]).trim().to_string();
    if recommended_action.is_empty() {
        return Err(TriageError::Validation("recommended_action is empty".to_string()));
    }

    Ok(TriageResponse { urgency, confidence, key_findings, recommended_action })
}

/// Render a JSON scalar as the string the model presumably meant.
fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Accept JSON numbers and numeric strings.
fn coerce_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("test fixture must be an object"),
        }
    }

    fn valid() -> Map<String, Value> {
        object(json!({
            "urgency": "HIGH",
            "confidence": 0.9,
            "key_findings": "Critically raised troponin",
            "recommended_action": "Contact patient same day"
        }))
    }

    #[test]
    fn test_valid_response() {
        let response = validate_response(&valid()).unwrap();
        assert_eq!(response.urgency, Urgency::High);
        assert_eq!(response.confidence, 0.9);
        assert_eq!(response.key_findings, "Critically raised troponin");
    }

    #[test]
    fn test_missing_keys_listed() {
        let mut obj = valid();
        obj.remove("confidence");
        obj.remove("recommended_action");
        let err = validate_response(&obj).unwrap_err();
        match err {
            TriageError::Validation(msg) => {
                assert!(msg.contains("confidence"));
                assert!(msg.contains("recommended_action"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_each_required_key() {
        for key in ["urgency", "confidence", "key_findings", "recommended_action"] {
            let mut obj = valid();
            obj.remove(key);
            assert!(validate_response(&obj).is_err(), "missing {key} should fail");
        }
    }

    #[test]
    fn test_urgency_normalized() {
        let mut obj = valid();
        obj.insert("urgency".to_string(), json!("  routine "));
        let response = validate_response(&obj).unwrap();
        assert_eq!(response.urgency, Urgency::Routine);
    }

    #[test]
    fn test_invalid_urgency_rejected() {
        let mut obj = valid();
        obj.insert("urgency".to_string(), json!("URGENT"));
        assert!(validate_response(&obj).is_err());
    }

    #[test]
    fn test_confidence_bounds() {
        for (value, ok) in [(0.0, true), (1.0, true), (-0.1, false), (1.1, false)] {
            let mut obj = valid();
            obj.insert("confidence".to_string(), json!(value));
            assert_eq!(validate_response(&obj).is_ok(), ok, "confidence {value}");
        }
    }

    #[test]
    fn test_confidence_numeric_string_coerced() {
        let mut obj = valid();
        obj.insert("confidence".to_string(), json!("0.85"));
        let response = validate_response(&obj).unwrap();
        assert_eq!(response.confidence, 0.85);
    }

    #[test]
    fn test_confidence_non_numeric_rejected() {
        let mut obj = valid();
        obj.insert("confidence".to_string(), json!("very sure"));
        assert!(validate_response(&obj).is_err());
    }

    #[test]
    fn test_blank_text_fields_rejected() {
        for key in ["key_findings", "recommended_action"] {
            let mut obj = valid();
            obj.insert(key.to_string(), json!("   "));
            assert!(validate_response(&obj).is_err(), "blank {key} should fail");
        }
    }

    #[test]
    fn test_extra_keys_ignored() {
        let mut obj = valid();
        obj.insert("reasoning".to_string(), json!("extra commentary"));
        assert!(validate_response(&obj).is_ok());
    }

    #[test]
    fn test_extract_then_validate_idempotent() {
        let text = "```json\n{\"urgency\":\"HIGH\",\"confidence\":0.9,\"key_findings\":\"x\",\"recommended_action\":\"y\"}\n```";
        let first = validate_response(&crate::parse::extract_json_object(text).unwrap()).unwrap();
        let second = validate_response(&crate::parse::extract_json_object(text).unwrap()).unwrap();
        assert_eq!(first, second);
    }
}
