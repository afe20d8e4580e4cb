//! Human-readable rendering of a persisted evaluation run.

use crate::results::EvalRun;

fn pct(x: f64) -> String {
    format!("{:.1}%", x * 100.0)
}

fn usd(x: f64) -> String {
    format!("${:.4}", x)
}

fn mark(met: bool) -> &'static str {
    if met { "✓" } else { "✗" }
}

/// Format the post-run console summary.
pub fn format_console_summary(run: &EvalRun) -> String {
    let s = &run.summary;
    let mut output = String::new();
    let banner = "=".repeat(60);

    output.push_str(&banner);
    output.push_str("\nEVALUATION SUMMARY\n");
    output.push_str(&banner);
    output.push('\n');

    output.push_str(&format!("Overall Accuracy: {}\n", pct(s.overall_accuracy)));
    output.push_str(&format!("  Target: ≥90% {}\n", mark(s.accuracy_target_met)));

    output.push_str(&format!(
        "\nHIGH Urgency Sensitivity: {}\n",
        pct(s.high_urgency_sensitivity)
    ));
    output.push_str(&format!("  Target: ≥99% {}\n", mark(s.sensitivity_target_met)));
    output.push_str(&format!(
        "  Cases: {}/{} detected\n",
        s.high_urgency_detected, s.high_urgency_cases
    ));

    output.push_str(&format!("\nAverage Cost: {} per item\n", usd(s.avg_cost_per_item_usd)));
    output.push_str(&format!("  Target: <$0.01 {}\n", mark(s.cost_constraint_met)));

    output.push_str(&format!("\nAverage Latency: {:.2} seconds\n", s.avg_latency_sec));
    output.push_str(&format!("\nTotal Cost: ${:.2}\n", s.total_cost_usd));

    let failures = run.misclassifications();
    if !failures.is_empty() {
        output.push_str(&format!(
            "\n{} INCORRECT CLASSIFICATIONS (showing up to 5):\n",
            failures.len()
        ));
        for failure in failures.iter().take(5) {
            output.push_str(&format!(
                "  - Case {}: Predicted {}, Actually {}\n",
                failure.case_id, failure.predicted_urgency, failure.actual_urgency
            ));
        }
    }

    output.push_str(&banner);
    output
}

/// Render the fixed one-page Markdown summary of a saved run.
pub fn build_markdown_summary(run: &EvalRun) -> String {
    let s = &run.summary;

    let interpretation = if s.overall_accuracy >= 0.75 || s.high_urgency_sensitivity >= 0.85 {
        "Initial performance is encouraging but falls short of clinical-grade requirements, confirming the need for systematic R&D investigation."
    } else {
        "These preliminary results highlight the magnitude of the challenge and the genuine uncertainty about technical feasibility."
    };

    let failures = run.misclassifications();
    let failure_lines = if failures.is_empty() {
        "- No misclassifications in this run (or dry-run mode).".to_string()
    } else {
        failures
            .iter()
            .take(6)
            .map(|f| {
                format!(
                    "- Case {}: predicted {}, actual {}",
                    f.case_id, f.predicted_urgency, f.actual_urgency
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    };

    [
        "## Preliminary Feasibility Assessment".to_string(),
        String::new(),
        format!(
            "To validate that our performance targets are plausible but not trivial, we conducted a baseline test using **{}** on **{}** synthetic GP inbox items (valid results: {}).",
            s.model, s.total_cases, s.valid_results
        ),
        String::new(),
        format!(
            "- **Overall accuracy**: {} (target ≥90% {})",
            pct(s.overall_accuracy),
            if s.accuracy_target_met { "met" } else { "not met" }
        ),
        format!(
            "- **HIGH-urgency sensitivity**: {} (target ≥99% {}; detected {}/{})",
            pct(s.high_urgency_sensitivity),
            if s.sensitivity_target_met { "met" } else { "not met" },
            s.high_urgency_detected,
            s.high_urgency_cases
        ),
        format!(
            "- **Average inference cost**: {} per item (target <$0.01 {})",
            usd(s.avg_cost_per_item_usd),
            if s.cost_constraint_met { "met" } else { "not met" }
        ),
        format!("- **Average latency**: {:.2}s per item", s.avg_latency_sec),
        String::new(),
        interpretation.to_string(),
        String::new(),
        "### Notes".to_string(),
        format!("- **Run timestamp**: {}", s.timestamp.to_rfc3339()),
        "- **Dataset**: Synthetic items only; results do not include any patient-identifiable data.".to_string(),
        "- **Safety metric**: HIGH-urgency sensitivity is the primary safety-critical metric.".to_string(),
        String::new(),
        "### Quick error sample (first few incorrect classifications)".to_string(),
        failure_lines,
        String::new(),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::{ErrorRecord, EvalRecord, EvalSummary, Pricing, RunMeta, ScoredRecord};
    use triage_core::{ItemType, Urgency};

    fn scored(case_id: u32, actual: Urgency, predicted: Urgency) -> EvalRecord {
        EvalRecord::Scored(ScoredRecord {
            case_id,
            item_type: ItemType::LabResult,
            actual_urgency: actual,
            predicted_urgency: predicted,
            confidence: 0.9,
            correct: actual == predicted,
            cost_usd: 0.005,
            latency_sec: 2.5,
            input_tokens: 900,
            output_tokens: 100,
            ai_findings: "f".to_string(),
            ai_action: "a".to_string(),
            ground_truth_action: "g".to_string(),
        })
    }

    fn run_with(records: Vec<EvalRecord>) -> EvalRun {
        let summary = EvalSummary::from_records(
            &records,
            RunMeta {
                model: "test-model".to_string(),
                max_tokens: 2000,
                temperature: 0.0,
                dry_run: false,
                total_cases: records.len(),
                pricing: Pricing {
                    input_cost_per_mtok_usd: 3.0,
                    output_cost_per_mtok_usd: 15.0,
                },
            },
        );
        EvalRun { summary, detailed_results: records }
    }

    #[test]
    fn test_console_summary_shows_metrics_and_failures() {
        let run = run_with(vec![
            scored(1, Urgency::High, Urgency::High),
            scored(2, Urgency::Routine, Urgency::Fyi),
        ]);
        let text = format_console_summary(&run);
        assert!(text.contains("EVALUATION SUMMARY"));
        assert!(text.contains("Overall Accuracy: 50.0%"));
        assert!(text.contains("Cases: 1/1 detected"));
        assert!(text.contains("Case 2: Predicted FYI, Actually ROUTINE"));
    }

    #[test]
    fn test_markdown_lists_at_most_six_misclassifications() {
        let records: Vec<EvalRecord> =
            (1..=9).map(|id| scored(id, Urgency::High, Urgency::Routine)).collect();
        let run = run_with(records);
        let md = build_markdown_summary(&run);
        let bullets = md.matches("- Case ").count();
        assert_eq!(bullets, 6);
        assert!(md.contains("## Preliminary Feasibility Assessment"));
        assert!(md.contains("**test-model**"));
    }

    #[test]
    fn test_markdown_handles_clean_run() {
        let run = run_with(vec![scored(1, Urgency::High, Urgency::High)]);
        let md = build_markdown_summary(&run);
        assert!(md.contains("No misclassifications in this run"));
    }

    #[test]
    fn test_markdown_interpretation_tracks_performance() {
        let good = run_with(vec![scored(1, Urgency::High, Urgency::High)]);
        assert!(build_markdown_summary(&good).contains("encouraging"));

        let bad = run_with(vec![
            scored(1, Urgency::High, Urgency::Routine),
            EvalRecord::Error(ErrorRecord { case_id: 2, error: "x".to_string() }),
        ]);
        assert!(build_markdown_summary(&bad).contains("magnitude of the challenge"));
    }
}
