//! Evaluation records, the aggregate summary, and results-file I/O.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use triage_core::{ItemType, Result, TriageError, Urgency};
use triage_model::CostRates;

/// Fixed feasibility targets; reported, never enforced.
pub const ACCURACY_TARGET: f64 = 0.90;
pub const SENSITIVITY_TARGET: f64 = 0.99;
pub const AVG_COST_TARGET_USD: f64 = 0.01;

/// Per-case result for a completed triage call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredRecord {
    pub case_id: u32,
    pub item_type: ItemType,
    pub actual_urgency: Urgency,
    pub predicted_urgency: Urgency,
    pub confidence: f64,
    pub correct: bool,
    pub cost_usd: f64,
    pub latency_sec: f64,
    pub input_tokens: u64,
    pub output_tokens: u64,
    pub ai_findings: String,
    pub ai_action: String,
    pub ground_truth_action: String,
}

/// Per-case result when the call wrapper exhausted its retries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorRecord {
    pub case_id: u32,
    pub error: String,
}

/// One row of `detailed_results`: a scored case or a recorded failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EvalRecord {
    Scored(ScoredRecord),
    Error(ErrorRecord),
}

impl EvalRecord {
    pub fn as_scored(&self) -> Option<&ScoredRecord> {
        match self {
            EvalRecord::Scored(record) => Some(record),
            EvalRecord::Error(_) => None,
        }
    }

    pub fn case_id(&self) -> u32 {
        match self {
            EvalRecord::Scored(record) => record.case_id,
            EvalRecord::Error(record) => record.case_id,
        }
    }
}

/// Pricing block echoed into the summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pricing {
    pub input_cost_per_mtok_usd: f64,
    pub output_cost_per_mtok_usd: f64,
}

impl From<&CostRates> for Pricing {
    fn from(rates: &CostRates) -> Self {
        Self {
            input_cost_per_mtok_usd: rates.input_per_mtok_usd,
            output_cost_per_mtok_usd: rates.output_per_mtok_usd,
        }
    }
}

/// The fixed targets block echoed into the summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Targets {
    pub accuracy: f64,
    pub high_sensitivity: f64,
    pub avg_cost_usd: f64,
}

impl Default for Targets {
    fn default() -> Self {
        Self {
            accuracy: ACCURACY_TARGET,
            high_sensitivity: SENSITIVITY_TARGET,
            avg_cost_usd: AVG_COST_TARGET_USD,
        }
    }
}

/// Aggregate snapshot computed once after all records exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvalSummary {
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f64,
    pub dry_run: bool,
    pub total_cases: usize,
    pub valid_results: usize,
    pub overall_accuracy: f64,
    pub high_urgency_sensitivity: f64,
    pub high_urgency_cases: usize,
    pub high_urgency_detected: usize,
    pub total_cost_usd: f64,
    pub avg_cost_per_item_usd: f64,
    pub avg_latency_sec: f64,
    pub total_input_tokens: u64,
    pub total_output_tokens: u64,
    pub pricing: Pricing,
    pub per_item_type_accuracy: BTreeMap<String, f64>,
    pub targets: Targets,
    pub cost_constraint_met: bool,
    pub accuracy_target_met: bool,
    pub sensitivity_target_met: bool,
}

/// Run metadata the summary carries alongside the computed metrics.
#[derive(Debug, Clone)]
pub struct RunMeta {
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f64,
    pub dry_run: bool,
    pub total_cases: usize,
    pub pricing: Pricing,
}

impl EvalSummary {
    /// Compute the aggregate snapshot from the full record sequence.
    ///
    /// Only scored records are "valid"; accuracy, cost, and latency
    /// average over those. HIGH sensitivity is 0.0 when the run contains
    /// no HIGH ground-truth cases.
    pub fn from_records(records: &[EvalRecord], meta: RunMeta) -> Self {
        let scored: Vec<&ScoredRecord> = records.iter().filter_map(|r| r.as_scored()).collect();
        let valid_results = scored.len();

        let correct = scored.iter().filter(|r| r.correct).count();
        let overall_accuracy =
            if valid_results > 0 { correct as f64 / valid_results as f64 } else { 0.0 };

        let high_cases: Vec<&ScoredRecord> =
            scored.iter().copied().filter(|r| r.actual_urgency == Urgency::High).collect();
        let high_urgency_cases = high_cases.len();
        let high_urgency_detected =
            high_cases.iter().filter(|r| r.predicted_urgency == Urgency::High).count();
        let high_urgency_sensitivity = if high_urgency_cases > 0 {
            high_urgency_detected as f64 / high_urgency_cases as f64
        } else {
            0.0
        };

        let total_cost_usd: f64 = scored.iter().map(|r| r.cost_usd).sum();
        let total_latency: f64 = scored.iter().map(|r| r.latency_sec).sum();
        let avg_cost_per_item_usd =
            if valid_results > 0 { total_cost_usd / valid_results as f64 } else { 0.0 };
        let avg_latency_sec =
            if valid_results > 0 { total_latency / valid_results as f64 } else { 0.0 };
        let total_input_tokens: u64 = scored.iter().map(|r| r.input_tokens).sum();
        let total_output_tokens: u64 = scored.iter().map(|r| r.output_tokens).sum();

        // Per-item-type breakdown for quick error pattern scans.
        let mut per_type: BTreeMap<String, (usize, usize)> = BTreeMap::new();
        for record in &scored {
            let entry = per_type.entry(record.item_type.to_string()).or_insert((0, 0));
            entry.0 += 1;
            if record.correct {
                entry.1 += 1;
            }
        }
        let per_item_type_accuracy = per_type
            .into_iter()
            .map(|(t, (n, c))| (t, if n > 0 { c as f64 / n as f64 } else { 0.0 }))
            .collect();

        Self {
            timestamp: chrono::Utc::now(),
            model: meta.model,
            max_tokens: meta.max_tokens,
            temperature: meta.temperature,
            dry_run: meta.dry_run,
            total_cases: meta.total_cases,
            valid_results,
            overall_accuracy,
            high_urgency_sensitivity,
            high_urgency_cases,
            high_urgency_detected,
            total_cost_usd,
            avg_cost_per_item_usd,
            avg_latency_sec,
            total_input_tokens,
            total_output_tokens,
            pricing: meta.pricing,
            per_item_type_accuracy,
            targets: Targets::default(),
            cost_constraint_met: avg_cost_per_item_usd <= AVG_COST_TARGET_USD,
            accuracy_target_met: overall_accuracy >= ACCURACY_TARGET,
            sensitivity_target_met: high_urgency_sensitivity >= SENSITIVITY_TARGET,
        }
    }
}

/// A complete evaluation run: summary plus the ordered record sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvalRun {
    pub summary: EvalSummary,
    pub detailed_results: Vec<EvalRecord>,
}

impl EvalRun {
    /// Write the run to `<output_dir>/triage_test_results_<stamp>.json`,
    /// returning the path written.
    pub fn save(&self, output_dir: impl AsRef<Path>) -> Result<PathBuf> {
        std::fs::create_dir_all(output_dir.as_ref())?;
        let stamp = self.summary.timestamp.format("%Y%m%d_%H%M%S");
        let path = output_dir.as_ref().join(format!("triage_test_results_{}.json", stamp));
        std::fs::write(&path, serde_json::to_string_pretty(self)?)?;
        Ok(path)
    }

    /// Load a previously persisted run.
    ///
    /// Fails with [`TriageError::Format`] when the file lacks the
    /// `summary` / `detailed_results` top-level shape.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let raw: Value = serde_json::from_str(&content)?;

        let Value::Object(object) = &raw else {
            return Err(TriageError::Format(
                "results file must be a JSON object".to_string(),
            ));
        };
        if !object.contains_key("summary") || !object.contains_key("detailed_results") {
            return Err(TriageError::Format(
                "input does not look like a triage_test_results_*.json file".to_string(),
            ));
        }

        Ok(serde_json::from_value(raw)?)
    }

    /// Scored records with an incorrect prediction, in run order.
    pub fn misclassifications(&self) -> Vec<&ScoredRecord> {
        self.detailed_results
            .iter()
            .filter_map(|r| r.as_scored())
            .filter(|r| !r.correct)
            .collect()
    }
}
