//! Generate Architecture use case.
//!
//! The core flow of the service: questionnaire text in, normalized
//! [`Architecture`] out. One inference round, then the deterministic
//! repair pipeline. There is no retry on malformed output; the caller
//! surfaces the failure and the user resubmits.

use std::sync::Arc;

use chrono::Utc;
use thiserror::Error;
use tracing::{debug, info};

use lzdw_domain::architecture::model::Architecture;
use lzdw_domain::architecture::normalize::{NormalizeError, normalize};
use lzdw_domain::prompt::InferencePrompt;
use lzdw_domain::util::truncate_str;

use crate::ports::inference::{InferenceError, InferenceGateway};

/// Errors that can occur while generating an architecture.
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Questionnaire content is required")]
    EmptyQuestionnaire,

    #[error(transparent)]
    Inference(#[from] InferenceError),

    #[error(transparent)]
    Normalize(#[from] NormalizeError),
}

/// Input for the [`GenerateArchitectureUseCase`].
#[derive(Debug, Clone)]
pub struct GenerateInput {
    /// Plain questionnaire text (already extracted if it came from a DOCX).
    pub questionnaire: String,
    /// Free-form notes the consultant typed alongside the upload.
    pub extra_notes: Option<String>,
}

impl GenerateInput {
    pub fn new(questionnaire: impl Into<String>) -> Self {
        Self {
            questionnaire: questionnaire.into(),
            extra_notes: None,
        }
    }

    pub fn with_extra_notes(mut self, notes: impl Into<String>) -> Self {
        self.extra_notes = Some(notes.into());
        self
    }
}

/// Use case for generating a landing zone architecture from a questionnaire.
pub struct GenerateArchitectureUseCase {
    gateway: Arc<dyn InferenceGateway>,
}

impl GenerateArchitectureUseCase {
    pub fn new(gateway: Arc<dyn InferenceGateway>) -> Self {
        Self { gateway }
    }

    pub async fn execute(&self, input: GenerateInput) -> Result<Architecture, GenerateError> {
        if input.questionnaire.trim().is_empty() {
            return Err(GenerateError::EmptyQuestionnaire);
        }

        info!(
            "Generating architecture from questionnaire: {}",
            truncate_str(&input.questionnaire, 100)
        );

        let user = InferencePrompt::user(&input.questionnaire, input.extra_notes.as_deref());
        let raw = self
            .gateway
            .complete(InferencePrompt::system(), &user)
            .await?;

        debug!("Inference returned {} bytes", raw.len());

        let today = Utc::now().date_naive();
        let architecture = normalize(&raw, &input.questionnaire, today)?;

        info!(
            client_name = %architecture.client_name,
            workloads = architecture.account_structure.workload_ou.len(),
            "Architecture generated"
        );
        Ok(architecture)
    }
}
