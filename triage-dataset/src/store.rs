//! Dataset file I/O and load-time schema validation.

use serde_json::Value;
use std::path::Path;
use triage_core::{Result, TriageCase, TriageError, Urgency};

const REQUIRED_KEYS: [&str; 7] = [
    "id",
    "item_type",
    "content",
    "patient_context",
    "ground_truth_urgency",
    "ground_truth_reasoning",
    "ground_truth_action",
];

/// Load a dataset file: a JSON array of case objects.
///
/// Schema problems (missing required keys, invalid ground-truth urgency)
/// fail with [`TriageError::Schema`] naming the offending case, before
/// any typed deserialization.
pub fn load_cases(path: impl AsRef<Path>) -> Result<Vec<TriageCase>> {
    let content = std::fs::read_to_string(path.as_ref())?;
    let raw: Value = serde_json::from_str(&content)?;

    let Value::Array(elements) = raw else {
        return Err(TriageError::Schema("dataset JSON must be an array of cases".to_string()));
    };

    validate_schema(&elements)?;

    let cases: Vec<TriageCase> = serde_json::from_value(Value::Array(elements))?;
    tracing::info!(cases = cases.len(), path = %path.as_ref().display(), "Loaded test cases");
    Ok(cases)
}

/// Write a dataset file, pretty-printed.
pub fn save_cases(path: impl AsRef<Path>, cases: &[TriageCase]) -> Result<()> {
    let content = serde_json::to_string_pretty(cases)?;
    std::fs::write(path.as_ref(), content)?;
    Ok(())
}

/// Check every element for the required keys and a valid urgency value.
pub fn validate_schema(elements: &[Value]) -> Result<()> {
    for (idx, element) in elements.iter().enumerate() {
        let Value::Object(object) = element else {
            return Err(TriageError::Schema(format!("case at index {} is not an object", idx)));
        };

        let missing: Vec<&str> =
            REQUIRED_KEYS.iter().copied().filter(|k| !object.contains_key(*k)).collect();
        if !missing.is_empty() {
            return Err(TriageError::Schema(format!(
                "case id={} missing keys: {:?}",
                object.get("id").cloned().unwrap_or(Value::Null),
                missing
            )));
        }

        let raw_urgency = match &object["ground_truth_urgency"] {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        if Urgency::parse(&raw_urgency).is_none() {
            return Err(TriageError::Schema(format!(
                "case id={} has invalid ground_truth_urgency: {}",
                object.get("id").cloned().unwrap_or(Value::Null),
                raw_urgency
            )));
        }
    }
    Ok(())
}
