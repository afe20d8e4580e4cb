//! The model endpoint seam.

use async_trait::async_trait;
use triage_core::{ModelOutput, Result};

/// A triage model endpoint: takes a rendered prompt, returns raw text
/// plus token usage.
///
/// The evaluation pipeline only talks to this trait; the Anthropic client
/// and the scripted mock both implement it.
#[async_trait]
pub trait ModelEndpoint: Send + Sync {
    /// Model identifier used in reports.
    fn name(&self) -> &str;

    /// Run one completion for the given prompt.
    async fn complete(&self, prompt: &str) -> Result<ModelOutput>;
}
