//! Domain types shared across the harness.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Urgency classification for an inbox item.
///
/// HIGH requires same-day action, ROUTINE within 1-3 days, FYI none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Urgency {
    #[serde(rename = "HIGH")]
    High,
    #[serde(rename = "ROUTINE")]
    Routine,
    #[serde(rename = "FYI")]
    Fyi,
}

// Deserialization mirrors [`Urgency::parse`]: stray whitespace and casing
// in hand-edited dataset files are tolerated.
impl<'de> Deserialize<'de> for Urgency {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Urgency::parse(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid urgency '{raw}'")))
    }
}

impl Urgency {
    /// Parse a raw urgency value, trimming and upper-casing first.
    ///
    /// Returns `None` for anything outside {HIGH, ROUTINE, FYI}.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_uppercase().as_str() {
            "HIGH" => Some(Urgency::High),
            "ROUTINE" => Some(Urgency::Routine),
            "FYI" => Some(Urgency::Fyi),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Urgency::High => "HIGH",
            Urgency::Routine => "ROUTINE",
            Urgency::Fyi => "FYI",
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category of GP inbox item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemType {
    LabResult,
    RadiologyReport,
    DischargeSummary,
    SpecialistLetter,
    MedicationRelated,
}

impl ItemType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::LabResult => "lab_result",
            ItemType::RadiologyReport => "radiology_report",
            ItemType::DischargeSummary => "discharge_summary",
            ItemType::SpecialistLetter => "specialist_letter",
            ItemType::MedicationRelated => "medication_related",
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A synthetic labeled inbox item. Immutable once generated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriageCase {
    /// Sequential id, 1..=N with no gaps
    pub id: u32,
    pub item_type: ItemType,
    pub content: String,
    pub patient_context: String,
    pub ground_truth_urgency: Urgency,
    pub ground_truth_reasoning: String,
    pub ground_truth_action: String,
    /// Deliberately ambiguous edge case, flagged at construction time
    #[serde(default)]
    pub ambiguous: bool,
}

/// A validated structured answer from the triage model.
///
/// Only the validator constructs this; invalid responses are rejected,
/// never coerced into shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriageResponse {
    pub urgency: Urgency,
    /// Certainty in [0.0, 1.0]
    pub confidence: f64,
    pub key_findings: String,
    pub recommended_action: String,
}

/// Raw text and token usage from one model completion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModelOutput {
    pub text: String,
    pub input_tokens: u64,
    pub output_tokens: u64,
}

/// A successful triage call: validated response plus cost and latency.
///
/// Latency covers the successful attempt only.
#[derive(Debug, Clone)]
pub struct CallOutcome {
    pub response: TriageResponse,
    pub cost_usd: f64,
    pub latency_sec: f64,
    pub input_tokens: u64,
    pub output_tokens: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urgency_parse_normalizes() {
        assert_eq!(Urgency::parse("  high "), Some(Urgency::High));
        assert_eq!(Urgency::parse("Routine"), Some(Urgency::Routine));
        assert_eq!(Urgency::parse("FYI"), Some(Urgency::Fyi));
        assert_eq!(Urgency::parse("URGENT"), None);
        assert_eq!(Urgency::parse(""), None);
    }

    #[test]
    fn test_urgency_serde_uses_wire_names() {
        assert_eq!(serde_json::to_string(&Urgency::High).unwrap(), "\"HIGH\"");
        let parsed: Urgency = serde_json::from_str("\"ROUTINE\"").unwrap();
        assert_eq!(parsed, Urgency::Routine);
    }

    #[test]
    fn test_urgency_deserialize_tolerates_casing() {
        let parsed: Urgency = serde_json::from_str("\" high \"").unwrap();
        assert_eq!(parsed, Urgency::High);
        assert!(serde_json::from_str::<Urgency>("\"URGENT\"").is_err());
    }

    #[test]
    fn test_item_type_serde_snake_case() {
        assert_eq!(serde_json::to_string(&ItemType::LabResult).unwrap(), "\"lab_result\"");
        let parsed: ItemType = serde_json::from_str("\"medication_related\"").unwrap();
        assert_eq!(parsed, ItemType::MedicationRelated);
    }

    #[test]
    fn test_case_ambiguous_defaults_false() {
        let json = r#"{
            "id": 1,
            "item_type": "lab_result",
            "content": "x",
            "patient_context": "y",
            "ground_truth_urgency": "HIGH",
            "ground_truth_reasoning": "r",
            "ground_truth_action": "a"
        }"#;
        let case: TriageCase = serde_json::from_str(json).unwrap();
        assert!(!case.ambiguous);
    }
}
