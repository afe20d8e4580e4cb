//! Scripted endpoint for tests and offline pipeline checks.

use crate::endpoint::ModelEndpoint;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU32, Ordering};
use triage_core::{ModelOutput, Result, TriageError};

/// A [`ModelEndpoint`] that replays a scripted sequence of outputs and
/// errors, one per call.
pub struct MockEndpoint {
    name: String,
    script: Mutex<VecDeque<Result<ModelOutput>>>,
    calls: AtomicU32,
}

impl MockEndpoint {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), script: Mutex::new(VecDeque::new()), calls: AtomicU32::new(0) }
    }

    /// Queue a successful completion with the given text and usage.
    pub fn with_text(self, text: impl Into<String>, input_tokens: u64, output_tokens: u64) -> Self {
        self.push(Ok(ModelOutput { text: text.into(), input_tokens, output_tokens }));
        self
    }

    /// Queue a failing call.
    pub fn with_error(self, error: TriageError) -> Self {
        self.push(Err(error));
        self
    }

    /// Number of calls made so far.
    pub fn call_count(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }

    fn push(&self, entry: Result<ModelOutput>) {
        self.script.lock().expect("mock script lock poisoned").push_back(entry);
    }
}

#[async_trait]
impl ModelEndpoint for MockEndpoint {
    fn name(&self) -> &str {
        &self.name
    }

    async fn complete(&self, _prompt: &str) -> Result<ModelOutput> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.script
            .lock()
            .expect("mock script lock poisoned")
            .pop_front()
            .unwrap_or_else(|| Err(TriageError::Model("mock endpoint script exhausted".to_string())))
    }
}
