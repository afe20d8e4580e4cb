//! # triage-dataset
//!
//! Synthetic labeled dataset for the inbox triage feasibility study:
//! generation with a fixed, self-checked distribution, and dataset file
//! I/O with load-time schema validation.

pub mod generator;
pub mod store;

pub use generator::{DATASET_SIZE, EXPECTED_TYPE_COUNTS, EXPECTED_URGENCY_COUNTS, generate, verify_distribution};
pub use store::{load_cases, save_cases, validate_schema};
