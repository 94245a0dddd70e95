//! Plain-language explanations of calculation results.
//!
//! The requestor turns a scenario, the caller's inputs, and a [`ResultSet`]
//! into a prompt and hands it to a [`TextGenerator`]. The returned prose is
//! passed through untouched.
//!
//! One outbound call per explanation. No retry, no caching: a generator
//! failure fails the request.

pub mod openai;

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

use telecalc_common::ResultSet;

// ── Errors ──────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ExplainError {
    #[error("text generation request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("text generation service rejected the API key")]
    Unauthorized,
    #[error("text generation service is rate limiting requests")]
    RateLimited,
    #[error("text generation service returned {status}: {body}")]
    Upstream { status: u16, body: String },
    #[error("malformed text generation response: {0}")]
    MalformedResponse(String),
    #[error("text generation service returned an empty completion")]
    EmptyCompletion,
    #[error("failed to encode inputs: {0}")]
    Inputs(#[from] serde_json::Error),
}

// ── Capability ──────────────────────────────────────────────────────

/// Generates explanatory text for a prompt.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, ExplainError>;
}

// ── Scenario ────────────────────────────────────────────────────────

/// What the explanation should cover.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scenario {
    /// Short system label, e.g. "OFDM". Produces a one-sentence-per-value
    /// explanation.
    Label(String),
    /// Fully custom instruction placed at the top of the prompt.
    Instruction(String),
}

impl Scenario {
    pub fn label(label: impl Into<String>) -> Self {
        Scenario::Label(label.into())
    }

    pub fn instruction(text: impl Into<String>) -> Self {
        Scenario::Instruction(text.into())
    }
}

/// Build the prompt sent to the generator.
pub fn build_prompt(scenario: &Scenario, inputs: &serde_json::Value, results: &ResultSet) -> String {
    let inputs = render_inputs(inputs);
    match scenario {
        Scenario::Label(label) => format!(
            "You are a helpful assistant. The following are results from a {label} system:\n\
             {results}\
             They were computed from these inputs:\n\
             {inputs}\n\
             For each value, write a short sentence that says what it means in simple words, \
             and include the number itself in the sentence.\n\
             Do not explain how it was calculated, just say what the number represents in an \
             easy and friendly way.\n\
             One sentence per value."
        ),
        Scenario::Instruction(instruction) => format!(
            "{instruction}\n\n\
             Inputs:\n\
             {inputs}\
             Results:\n\
             {results}"
        ),
    }
}

/// One `key: value` line per top-level input field.
fn render_inputs(inputs: &serde_json::Value) -> String {
    match inputs {
        serde_json::Value::Object(map) => map
            .iter()
            .map(|(k, v)| format!("{k}: {v}\n"))
            .collect(),
        other => format!("{other}\n"),
    }
}

// ── Requestor ───────────────────────────────────────────────────────

/// Requests explanations from an injected [`TextGenerator`].
#[derive(Clone)]
pub struct ExplanationRequestor {
    generator: Arc<dyn TextGenerator>,
}

impl ExplanationRequestor {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    pub async fn explain<I: Serialize>(
        &self,
        scenario: &Scenario,
        inputs: &I,
        results: &ResultSet,
    ) -> Result<String, ExplainError> {
        let inputs = serde_json::to_value(inputs)?;
        let prompt = build_prompt(scenario, &inputs, results);
        tracing::debug!(prompt_chars = prompt.len(), "requesting explanation");

        let text = self.generator.generate(&prompt).await?;
        if text.trim().is_empty() {
            return Err(ExplainError::EmptyCompletion);
        }

        tracing::debug!(explanation_chars = text.len(), "explanation received");
        Ok(text)
    }
}
