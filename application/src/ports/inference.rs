//! Inference gateway port
//!
//! Defines the interface for the single LLM completion round that turns a
//! questionnaire into an architecture proposal.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during an inference round.
#[derive(Error, Debug)]
pub enum InferenceError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Upstream API returned {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("No response from model")]
    EmptyResponse,
}

/// Gateway for LLM completion.
///
/// One request, one response. The application layer never sees transport
/// details; it hands over a system and a user prompt and gets back the raw
/// model text, which still needs normalization before it can be trusted.
#[async_trait]
pub trait InferenceGateway: Send + Sync {
    /// Run a completion and return the raw model output.
    async fn complete(&self, system: &str, user: &str) -> Result<String, InferenceError>;
}
