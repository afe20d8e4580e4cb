//! # triage-core
//!
//! Core types and errors for the clinical inbox triage feasibility
//! harness.
//!
//! This crate provides the shared vocabulary of the workspace:
//!
//! - [`TriageCase`] - A synthetic labeled inbox item
//! - [`TriageResponse`] - A validated structured model answer
//! - [`CallOutcome`] - Response plus cost/latency accounting
//! - [`TriageError`] / [`Result`] - Unified error handling
//! - [`TRIAGE_PROMPT`] / [`render_triage_prompt`] - The fixed instruction
//!   template and its per-case interpolation

pub mod error;
pub mod prompt;
pub mod types;

pub use error::{Result, TriageError};
pub use prompt::{TRIAGE_PROMPT, render_triage_prompt};
pub use types::{CallOutcome, ItemType, ModelOutput, TriageCase, TriageResponse, Urgency};
