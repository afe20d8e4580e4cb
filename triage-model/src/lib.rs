//! # triage-model
//!
//! The model-call subsystem of the inbox triage harness:
//!
//! - [`extract_json_object`] - Locate the JSON object in free-form model
//!   output
//! - [`validate_response`] - Enforce the four-field response contract
//! - [`ModelEndpoint`] - The seam between the pipeline and a provider
//! - [`AnthropicClient`] - Messages API implementation
//! - [`MockEndpoint`] - Scripted implementation for tests
//! - [`call_with_retry`] - Bounded retry loop with injected delay and
//!   cost/latency accounting

pub mod anthropic;
pub mod call;
pub mod endpoint;
pub mod mock;
pub mod parse;
pub mod validate;

pub use anthropic::{
    ANTHROPIC_API_BASE, API_KEY_ENV, AnthropicClient, AnthropicConfig, DEFAULT_MAX_TOKENS,
    DEFAULT_MODEL,
};
pub use call::{CostRates, RetryPolicy, call_triage, call_with_retry};
pub use endpoint::ModelEndpoint;
pub use mock::MockEndpoint;
pub use parse::extract_json_object;
pub use validate::validate_response;
