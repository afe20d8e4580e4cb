//! Retry-with-backoff wrapper around the model endpoint.
//!
//! Each attempt runs the full completion -> parse -> validate chain; any
//! failure before the last attempt sleeps and retries. The delay function
//! is injected so tests can run the loop without waiting.

use crate::endpoint::ModelEndpoint;
use crate::parse::extract_json_object;
use crate::validate::validate_response;
use std::future::Future;
use std::time::{Duration, Instant};
use triage_core::{CallOutcome, Result, TriageError, render_triage_prompt};

/// Retry policy for triage calls.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Total attempts (not additional retries).
    pub max_retries: u32,
    /// Attempt N sleeps `backoff_base^(N-1)` seconds before retrying.
    pub backoff_base: f64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self { max_retries: 3, backoff_base: 1.5 }
    }
}

impl RetryPolicy {
    #[must_use]
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    #[must_use]
    pub fn with_backoff_base(mut self, backoff_base: f64) -> Self {
        self.backoff_base = backoff_base;
        self
    }

    /// Backoff before retrying after the given 1-based attempt.
    pub fn backoff_delay(&self, attempt: u32) -> Duration {
        Duration::from_secs_f64(self.backoff_base.powi(attempt.saturating_sub(1) as i32))
    }
}

/// Per-million-token pricing used for cost accounting.
#[derive(Debug, Clone)]
pub struct CostRates {
    pub input_per_mtok_usd: f64,
    pub output_per_mtok_usd: f64,
}

impl Default for CostRates {
    fn default() -> Self {
        // Sonnet feasibility pricing: $3/MTok in, $15/MTok out.
        Self { input_per_mtok_usd: 3.0, output_per_mtok_usd: 15.0 }
    }
}

impl CostRates {
    pub fn cost_usd(&self, input_tokens: u64, output_tokens: u64) -> f64 {
        input_tokens as f64 * self.input_per_mtok_usd / 1_000_000.0
            + output_tokens as f64 * self.output_per_mtok_usd / 1_000_000.0
    }
}

/// Call the triage model with retries, an injected delay, and cost
/// accounting.
///
/// On success, returns a [`CallOutcome`] whose latency covers the
/// successful attempt only. On exhaustion, fails with
/// [`TriageError::CallFailed`] wrapping the last attempt's error. No
/// state is retained across attempts beyond that error.
pub async fn call_with_retry<E, D, Fut>(
    endpoint: &E,
    content: &str,
    patient_context: &str,
    policy: &RetryPolicy,
    rates: &CostRates,
    mut delay: D,
) -> Result<CallOutcome>
where
    E: ModelEndpoint + ?Sized,
    D: FnMut(Duration) -> Fut,
    Fut: Future<Output = ()>,
{
    let prompt = render_triage_prompt(content, patient_context);
    let attempts = policy.max_retries.max(1);
    let mut last_error: Option<TriageError> = None;

    for attempt in 1..=attempts {
        let start = Instant::now();
        match attempt_call(endpoint, &prompt).await {
            Ok((response, input_tokens, output_tokens)) => {
                let latency_sec = start.elapsed().as_secs_f64();
                return Ok(CallOutcome {
                    response,
                    cost_usd: rates.cost_usd(input_tokens, output_tokens),
                    latency_sec,
                    input_tokens,
                    output_tokens,
                });
            }
            Err(error) => {
                if attempt >= attempts {
                    last_error = Some(error);
                    break;
                }
                let backoff = policy.backoff_delay(attempt);
                tracing::warn!(
                    attempt,
                    max_retries = attempts,
                    backoff_sec = backoff.as_secs_f64(),
                    error = %error,
                    "Triage call attempt failed; retrying"
                );
                last_error = Some(error);
                delay(backoff).await;
            }
        }
    }

    // Loop always sets last_error before falling through.
    let last = last_error
        .unwrap_or_else(|| TriageError::Model("no attempt was made".to_string()));
    Err(TriageError::call_failed(attempts, last))
}

/// Convenience wrapper using the real clock for backoff.
pub async fn call_triage<E>(
    endpoint: &E,
    content: &str,
    patient_context: &str,
    policy: &RetryPolicy,
    rates: &CostRates,
) -> Result<CallOutcome>
where
    E: ModelEndpoint + ?Sized,
{
    call_with_retry(endpoint, content, patient_context, policy, rates, tokio::time::sleep).await
}

async fn attempt_call<E>(
    endpoint: &E,
    prompt: &str,
) -> Result<(triage_core::TriageResponse, u64, u64)>
where
    E: ModelEndpoint + ?Sized,
{
    let output = endpoint.complete(prompt).await?;
    let object = extract_json_object(&output.text)?;
    let response = validate_response(&object)?;
    Ok((response, output.input_tokens, output.output_tokens))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockEndpoint;
    use std::sync::{Arc, Mutex};
    use triage_core::Urgency;

    const VALID_JSON: &str = r#"{"urgency":"HIGH","confidence":0.9,"key_findings":"x","recommended_action":"y"}"#;

    fn recording_delay(
        log: Arc<Mutex<Vec<Duration>>>,
    ) -> impl FnMut(Duration) -> std::future::Ready<()> {
        move |d| {
            log.lock().unwrap().push(d);
            std::future::ready(())
        }
    }

    #[tokio::test]
    async fn test_success_first_attempt() {
        let mock = MockEndpoint::new("mock").with_text(VALID_JSON, 1000, 500);
        let delays = Arc::new(Mutex::new(Vec::new()));

        let outcome = call_with_retry(
            &mock,
            "content",
            "context",
            &RetryPolicy::default(),
            &CostRates::default(),
            recording_delay(delays.clone()),
        )
        .await
        .unwrap();

        assert_eq!(outcome.response.urgency, Urgency::High);
        assert_eq!(outcome.input_tokens, 1000);
        assert_eq!(outcome.output_tokens, 500);
        // 1000 * 3/1e6 + 500 * 15/1e6
        assert!((outcome.cost_usd - 0.0105).abs() < 1e-12);
        assert!(delays.lock().unwrap().is_empty());
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn test_retries_then_succeeds_with_exponential_backoff() {
        let mock = MockEndpoint::new("mock")
            .with_error(TriageError::Model("HTTP 529 overloaded".to_string()))
            .with_text("not json at all", 0, 0)
            .with_text(VALID_JSON, 10, 10);
        let delays = Arc::new(Mutex::new(Vec::new()));

        let outcome = call_with_retry(
            &mock,
            "content",
            "context",
            &RetryPolicy::default(),
            &CostRates::default(),
            recording_delay(delays.clone()),
        )
        .await
        .unwrap();

        assert_eq!(outcome.response.urgency, Urgency::High);
        assert_eq!(mock.call_count(), 3);
        let recorded = delays.lock().unwrap();
        // base^0, base^1 for attempts 1 and 2
        assert_eq!(recorded.len(), 2);
        assert!((recorded[0].as_secs_f64() - 1.0).abs() < 1e-9);
        assert!((recorded[1].as_secs_f64() - 1.5).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_exhaustion_wraps_last_error() {
        let mock = MockEndpoint::new("mock")
            .with_error(TriageError::Model("first".to_string()))
            .with_error(TriageError::Model("second".to_string()))
            .with_text("{\"urgency\":\"MAYBE\"}", 0, 0);
        let delays = Arc::new(Mutex::new(Vec::new()));

        let err = call_with_retry(
            &mock,
            "content",
            "context",
            &RetryPolicy::default(),
            &CostRates::default(),
            recording_delay(delays.clone()),
        )
        .await
        .unwrap_err();

        match err {
            TriageError::CallFailed { attempts, last_error } => {
                assert_eq!(attempts, 3);
                // Last attempt failed validation, not transport
                assert!(matches!(*last_error, TriageError::Validation(_)));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(mock.call_count(), 3);
        assert_eq!(delays.lock().unwrap().len(), 2, "no sleep after the final attempt");
    }

    #[tokio::test]
    async fn test_zero_retries_clamped_to_one_attempt() {
        let mock = MockEndpoint::new("mock").with_error(TriageError::Model("down".to_string()));
        let err = call_with_retry(
            &mock,
            "content",
            "context",
            &RetryPolicy::default().with_max_retries(0),
            &CostRates::default(),
            |_| std::future::ready(()),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, TriageError::CallFailed { attempts: 1, .. }));
        assert_eq!(mock.call_count(), 1);
    }

    #[test]
    fn test_cost_rates() {
        let rates = CostRates::default();
        assert!((rates.cost_usd(1_000_000, 0) - 3.0).abs() < 1e-12);
        assert!((rates.cost_usd(0, 1_000_000) - 15.0).abs() < 1e-12);
        assert_eq!(rates.cost_usd(0, 0), 0.0);
    }

    #[test]
    fn test_backoff_delay_schedule() {
        let policy = RetryPolicy::default().with_backoff_base(2.0);
        assert_eq!(policy.backoff_delay(1), Duration::from_secs_f64(1.0));
        assert_eq!(policy.backoff_delay(2), Duration::from_secs_f64(2.0));
        assert_eq!(policy.backoff_delay(3), Duration::from_secs_f64(4.0));
    }
}
