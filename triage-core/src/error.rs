use thiserror::Error;

/// Result type alias for triage operations
pub type Result<T> = std::result::Result<T, TriageError>;

/// Errors that can occur across the triage harness
#[derive(Error, Debug)]
pub enum TriageError {
    /// Generator self-check failed (case counts do not match targets)
    #[error("Dataset distribution check failed: {0}")]
    Distribution(String),

    /// No JSON object could be extracted from model output
    #[error("Could not parse model response: {0}")]
    Parse(String),

    /// Extracted object does not satisfy the response contract
    #[error("Invalid model response: {0}")]
    Validation(String),

    /// Retries exhausted; wraps the final attempt's error
    #[error("Model call failed after {attempts} attempts: {last_error}")]
    CallFailed {
        attempts: u32,
        #[source]
        last_error: Box<TriageError>,
    },

    /// Dataset file does not match the case schema
    #[error("Dataset schema error: {0}")]
    Schema(String),

    /// Results file does not have the summary/detailed_results shape
    #[error("Results format error: {0}")]
    Format(String),

    /// Missing or invalid configuration (e.g. API credential)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Transport or API failure from the model endpoint
    #[error("Model error: {0}")]
    Model(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl TriageError {
    /// Wrap an attempt's error once retries are exhausted.
    pub fn call_failed(attempts: u32, last_error: TriageError) -> Self {
        TriageError::CallFailed { attempts, last_error: Box::new(last_error) }
    }
}
