//! The evaluation engine.
//!
//! Deterministically shuffles the case list, then walks it strictly
//! sequentially: one in-flight model call at a time, since ordering is
//! the source of reproducibility and call latency dominates throughput.

use crate::results::{ErrorRecord, EvalRecord, EvalRun, EvalSummary, Pricing, RunMeta, ScoredRecord};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::future::Future;
use std::time::Duration;
use triage_core::{Result, TriageCase, TriageError, TriageResponse, Urgency};
use triage_model::{CostRates, ModelEndpoint, RetryPolicy, call_with_retry};

/// Configuration for one evaluation run.
#[derive(Debug, Clone)]
pub struct EvalConfig {
    /// Model label recorded in the summary.
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f64,
    /// Process only the first N cases of the shuffled order.
    pub max_cases: Option<usize>,
    /// Shuffle seed; same seed and case set give the same order.
    pub seed: u64,
    /// Skip the endpoint entirely and emit placeholder responses.
    pub dry_run: bool,
    pub retry: RetryPolicy,
    pub rates: CostRates,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            model: triage_model::DEFAULT_MODEL.to_string(),
            max_tokens: triage_model::DEFAULT_MAX_TOKENS,
            temperature: 0.0,
            max_cases: None,
            seed: 42,
            dry_run: false,
            retry: RetryPolicy::default(),
            rates: CostRates::default(),
        }
    }
}

/// Fixed placeholder emitted for every case in dry-run mode.
fn dry_run_response() -> TriageResponse {
    TriageResponse {
        urgency: Urgency::Fyi,
        confidence: 0.0,
        key_findings: "DRY RUN: No model call made.".to_string(),
        recommended_action: "DRY RUN: Set ANTHROPIC_API_KEY and rerun without --dry-run."
            .to_string(),
    }
}

/// Shuffle the cases deterministically from the seed.
///
/// The pre-sort by id makes the order a function of (seed, case set)
/// alone, independent of how the dataset file happened to be ordered.
pub fn shuffle_cases(cases: &[TriageCase], seed: u64) -> Vec<TriageCase> {
    let mut ordered: Vec<TriageCase> = cases.to_vec();
    ordered.sort_by_key(|c| c.id);
    let mut rng = StdRng::seed_from_u64(seed);
    ordered.shuffle(&mut rng);
    ordered
}

/// Run the evaluation with the real clock driving retry backoff.
pub async fn evaluate(
    cases: &[TriageCase],
    endpoint: Option<&dyn ModelEndpoint>,
    config: &EvalConfig,
) -> Result<EvalRun> {
    evaluate_with_delay(cases, endpoint, config, tokio::time::sleep).await
}

/// Run the evaluation with an injected retry delay (no-op in tests).
///
/// A per-case failure is recorded and processing continues; one case's
/// failure never aborts the run.
pub async fn evaluate_with_delay<D, Fut>(
    cases: &[TriageCase],
    endpoint: Option<&dyn ModelEndpoint>,
    config: &EvalConfig,
    mut delay: D,
) -> Result<EvalRun>
where
    D: FnMut(Duration) -> Fut,
    Fut: Future<Output = ()>,
{
    let live = if config.dry_run {
        None
    } else {
        Some(endpoint.ok_or_else(|| {
            TriageError::Config("an endpoint is required unless dry_run is set".to_string())
        })?)
    };

    let mut ordered = shuffle_cases(cases, config.seed);
    if let Some(max_cases) = config.max_cases {
        ordered.truncate(max_cases);
    }
    let total = ordered.len();

    let mut records: Vec<EvalRecord> = Vec::with_capacity(total);

    for (i, case) in ordered.iter().enumerate() {
        tracing::info!(
            case_id = case.id,
            item_type = %case.item_type,
            "[{}/{}] Processing case",
            i + 1,
            total
        );

        let (response, cost_usd, latency_sec, input_tokens, output_tokens) = match live {
            None => (dry_run_response(), 0.0, 0.0, 0, 0),
            Some(endpoint) => match call_with_retry(
                endpoint,
                &case.content,
                &case.patient_context,
                &config.retry,
                &config.rates,
                &mut delay,
            )
            .await
            {
                Ok(outcome) => (
                    outcome.response,
                    outcome.cost_usd,
                    outcome.latency_sec,
                    outcome.input_tokens,
                    outcome.output_tokens,
                ),
                Err(error) => {
                    tracing::warn!(case_id = case.id, error = %error, "Case failed");
                    records.push(EvalRecord::Error(ErrorRecord {
                        case_id: case.id,
                        error: error.to_string(),
                    }));
                    continue;
                }
            },
        };

        let actual_urgency = case.ground_truth_urgency;
        let predicted_urgency = response.urgency;
        records.push(EvalRecord::Scored(ScoredRecord {
            case_id: case.id,
            item_type: case.item_type,
            actual_urgency,
            predicted_urgency,
            confidence: response.confidence,
            correct: predicted_urgency == actual_urgency,
            cost_usd,
            latency_sec,
            input_tokens,
            output_tokens,
            ai_findings: response.key_findings,
            ai_action: response.recommended_action,
            ground_truth_action: case.ground_truth_action.clone(),
        }));
    }

    let summary = EvalSummary::from_records(
        &records,
        RunMeta {
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
            dry_run: config.dry_run,
            total_cases: total,
            pricing: Pricing::from(&config.rates),
        },
    );

    Ok(EvalRun { summary, detailed_results: records })
}

#[cfg(test)]
mod tests {
    use super::*;
    use triage_core::ItemType;
    use triage_model::MockEndpoint;

    fn case(id: u32, urgency: Urgency) -> TriageCase {
        TriageCase {
            id,
            item_type: ItemType::LabResult,
            content: format!("content {id}"),
            patient_context: format!("context {id}"),
            ground_truth_urgency: urgency,
            ground_truth_reasoning: "reasoning".to_string(),
            ground_truth_action: "action".to_string(),
            ambiguous: false,
        }
    }

    fn cases(n: u32) -> Vec<TriageCase> {
        (1..=n).map(|id| case(id, Urgency::Routine)).collect()
    }

    fn dry_config(seed: u64) -> EvalConfig {
        EvalConfig { dry_run: true, seed, ..Default::default() }
    }

    const HIGH_JSON: &str = r#"{"urgency":"HIGH","confidence":0.9,"key_findings":"f","recommended_action":"a"}"#;
    const ROUTINE_JSON: &str = r#"{"urgency":"ROUTINE","confidence":0.8,"key_findings":"f","recommended_action":"a"}"#;

    #[test]
    fn test_shuffle_deterministic_for_seed() {
        let cases = cases(20);
        let a = shuffle_cases(&cases, 42);
        let b = shuffle_cases(&cases, 42);
        assert_eq!(a, b);

        let c = shuffle_cases(&cases, 43);
        assert_ne!(
            a.iter().map(|x| x.id).collect::<Vec<_>>(),
            c.iter().map(|x| x.id).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_shuffle_independent_of_input_order() {
        let cases = cases(20);
        let mut reversed = cases.clone();
        reversed.reverse();

        let a = shuffle_cases(&cases, 42);
        let b = shuffle_cases(&reversed, 42);
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn test_dry_run_is_reproducible_and_free() {
        let cases = cases(10);

        let first = evaluate(&cases, None, &dry_config(42)).await.unwrap();
        let second = evaluate(&cases, None, &dry_config(42)).await.unwrap();

        let order: Vec<u32> = first.detailed_results.iter().map(|r| r.case_id()).collect();
        let order2: Vec<u32> = second.detailed_results.iter().map(|r| r.case_id()).collect();
        assert_eq!(order, order2);

        assert_eq!(first.summary.total_cost_usd, 0.0);
        assert_eq!(first.summary.avg_latency_sec, 0.0);
        assert_eq!(first.summary.valid_results, 10);
        assert_eq!(first.summary.overall_accuracy, second.summary.overall_accuracy);
        for record in &first.detailed_results {
            let scored = record.as_scored().unwrap();
            assert_eq!(scored.predicted_urgency, Urgency::Fyi);
            assert_eq!(scored.confidence, 0.0);
        }
    }

    #[tokio::test]
    async fn test_live_run_scores_against_ground_truth() {
        let cases = vec![case(1, Urgency::High), case(2, Urgency::Routine)];
        // Order after shuffle is fixed by the seed; script enough answers
        // for both whichever comes first.
        let mock = MockEndpoint::new("mock")
            .with_text(HIGH_JSON, 100, 50)
            .with_text(HIGH_JSON, 100, 50);

        let config = EvalConfig { seed: 42, ..Default::default() };
        let run = evaluate_with_delay(&cases, Some(&mock), &config, |_| std::future::ready(()))
            .await
            .unwrap();

        assert_eq!(run.summary.valid_results, 2);
        assert_eq!(run.summary.high_urgency_cases, 1);
        assert_eq!(run.summary.high_urgency_detected, 1);
        assert_eq!(run.summary.high_urgency_sensitivity, 1.0);
        // One of the two ROUTINE/HIGH answers is wrong by construction.
        assert_eq!(run.summary.overall_accuracy, 0.5);
        assert!(run.summary.total_cost_usd > 0.0);
    }

    #[tokio::test]
    async fn test_case_failure_recorded_and_run_continues() {
        let cases = vec![case(1, Urgency::Routine), case(2, Urgency::Routine)];
        // First processed case exhausts its three attempts, second succeeds.
        let mock = MockEndpoint::new("mock")
            .with_error(TriageError::Model("down".to_string()))
            .with_error(TriageError::Model("down".to_string()))
            .with_error(TriageError::Model("down".to_string()))
            .with_text(ROUTINE_JSON, 10, 10);

        let config = EvalConfig { seed: 42, ..Default::default() };
        let run = evaluate_with_delay(&cases, Some(&mock), &config, |_| std::future::ready(()))
            .await
            .unwrap();

        assert_eq!(run.detailed_results.len(), 2);
        assert_eq!(run.summary.valid_results, 1);
        let errors: Vec<_> = run
            .detailed_results
            .iter()
            .filter(|r| matches!(r, EvalRecord::Error(_)))
            .collect();
        assert_eq!(errors.len(), 1);
        assert_eq!(run.summary.overall_accuracy, 1.0);
    }

    #[tokio::test]
    async fn test_max_cases_truncates_after_shuffle() {
        let cases = cases(10);
        let config = EvalConfig { max_cases: Some(3), ..dry_config(42) };
        let run = evaluate(&cases, None, &config).await.unwrap();
        assert_eq!(run.detailed_results.len(), 3);
        assert_eq!(run.summary.total_cases, 3);

        let full = evaluate(&cases, None, &dry_config(42)).await.unwrap();
        let prefix: Vec<u32> =
            full.detailed_results.iter().take(3).map(|r| r.case_id()).collect();
        let truncated: Vec<u32> =
            run.detailed_results.iter().map(|r| r.case_id()).collect();
        assert_eq!(prefix, truncated);
    }

    #[tokio::test]
    async fn test_live_run_without_endpoint_is_config_error() {
        let cases = cases(1);
        let config = EvalConfig::default();
        let err = evaluate(&cases, None, &config).await.unwrap_err();
        assert!(matches!(err, TriageError::Config(_)));
    }
}
