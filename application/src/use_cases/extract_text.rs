//! Extract Text use case.
//!
//! Validates an uploaded document and runs it through the extraction port.

use std::sync::Arc;

use tracing::{info, warn};

use crate::ports::extraction::{ExtractedText, ExtractionError, TextExtractor};

/// Use case for extracting questionnaire text from an uploaded document.
pub struct ExtractTextUseCase {
    extractor: Arc<dyn TextExtractor>,
}

impl ExtractTextUseCase {
    pub fn new(extractor: Arc<dyn TextExtractor>) -> Self {
        Self { extractor }
    }

    pub fn execute(&self, bytes: &[u8]) -> Result<ExtractedText, ExtractionError> {
        if bytes.is_empty() {
            return Err(ExtractionError::EmptyDocument);
        }

        let extracted = self.extractor.extract(bytes)?;
        if !extracted.warnings.is_empty() {
            warn!(
                warnings = extracted.warnings.len(),
                "Extraction finished with warnings"
            );
        }
        info!(bytes = extracted.text.len(), "Questionnaire text extracted");
        Ok(extracted)
    }
}
