//! Anthropic Messages API client.

use crate::endpoint::ModelEndpoint;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use triage_core::{ModelOutput, Result, TriageError};

/// Default API base; override for tests with [`AnthropicConfig::with_base_url`].
pub const ANTHROPIC_API_BASE: &str = "https://api.anthropic.com";

/// Environment variable holding the API credential.
pub const API_KEY_ENV: &str = "ANTHROPIC_API_KEY";

const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Model used for the feasibility runs unless overridden.
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";

/// Default output token budget per triage call.
pub const DEFAULT_MAX_TOKENS: u32 = 2000;

/// Configuration for the Anthropic endpoint.
#[derive(Debug, Clone)]
pub struct AnthropicConfig {
    /// Anthropic API key.
    pub api_key: String,
    /// Model name (e.g. "claude-sonnet-4-20250514").
    pub model: String,
    /// Maximum tokens to generate.
    pub max_tokens: u32,
    /// Sampling temperature; 0.0 for deterministic triage.
    pub temperature: f64,
    /// Optional custom base URL.
    pub base_url: Option<String>,
}

impl AnthropicConfig {
    /// Create a new config with the given API key and model.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: 0.0,
            base_url: None,
        }
    }

    /// Read the API key from the environment.
    ///
    /// A missing or empty credential is a configuration error, surfaced
    /// before any call is attempted.
    pub fn from_env(model: impl Into<String>) -> Result<Self> {
        match std::env::var(API_KEY_ENV) {
            Ok(key) if !key.trim().is_empty() => Ok(Self::new(key, model)),
            _ => Err(TriageError::Config(format!(
                "{} environment variable not set",
                API_KEY_ENV
            ))),
        }
    }

    #[must_use]
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    #[must_use]
    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }
}

/// Anthropic client implementing [`ModelEndpoint`].
pub struct AnthropicClient {
    client: Client,
    config: AnthropicConfig,
}

impl AnthropicClient {
    /// Create a new Anthropic client.
    pub fn new(config: AnthropicConfig) -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| TriageError::Model(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    /// Build the API URL for message creation.
    fn api_url(&self) -> String {
        let base = self.config.base_url.as_deref().unwrap_or(ANTHROPIC_API_BASE);
        format!("{}/v1/messages", base.trim_end_matches('/'))
    }
}

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    temperature: f64,
    messages: Vec<Message<'a>>,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
    #[serde(default)]
    usage: Usage,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Default, Deserialize)]
struct Usage {
    #[serde(default)]
    input_tokens: u64,
    #[serde(default)]
    output_tokens: u64,
}

#[async_trait]
impl ModelEndpoint for AnthropicClient {
    fn name(&self) -> &str {
        &self.config.model
    }

    async fn complete(&self, prompt: &str) -> Result<ModelOutput> {
        let request = MessagesRequest {
            model: &self.config.model,
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
            messages: vec![Message { role: "user", content: prompt }],
        };

        let response = self
            .client
            .post(self.api_url())
            .header("x-api-key", &self.config.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&request)
            .send()
            .await
            .map_err(|e| TriageError::Model(format!("Anthropic API request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(TriageError::Model(format!(
                "Anthropic API error ({}): {}",
                status, error_text
            )));
        }

        let message: MessagesResponse = response
            .json()
            .await
            .map_err(|e| TriageError::Model(format!("Failed to parse API response: {}", e)))?;

        let text: String = message
            .content
            .iter()
            .map(|block| block.text.as_str())
            .collect::<Vec<_>>()
            .join("");

        Ok(ModelOutput {
            text,
            input_tokens: message.usage.input_tokens,
            output_tokens: message.usage.output_tokens,
        })
    }
}
