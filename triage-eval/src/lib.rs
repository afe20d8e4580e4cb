//! # triage-eval
//!
//! Evaluation engine for the inbox triage feasibility harness.
//!
//! Runs a labeled case set through the triage model (or a dry-run stub),
//! scores predictions against ground truth, aggregates the summary
//! metrics, persists the run, and renders reports.
//!
//! Processing is strictly sequential: the deterministic seeded shuffle is
//! the source of reproducibility, and per-call latency dominates
//! throughput anyway.

pub mod engine;
pub mod report;
pub mod results;

pub use engine::{EvalConfig, evaluate, evaluate_with_delay, shuffle_cases};
pub use report::{build_markdown_summary, format_console_summary};
pub use results::{
    ACCURACY_TARGET, AVG_COST_TARGET_USD, ErrorRecord, EvalRecord, EvalRun, EvalSummary, Pricing,
    RunMeta, ScoredRecord, SENSITIVITY_TARGET, Targets,
};
