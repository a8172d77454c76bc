//! Document text extraction port
//!
//! Uploaded questionnaires arrive as DOCX files; this port turns the raw
//! bytes into plain text the inference prompt can embed.

use thiserror::Error;

/// Plain text pulled out of a document, plus non-fatal extraction notes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedText {
    pub text: String,
    /// Warnings about content the extractor had to drop or approximate
    /// (embedded images, unsupported formatting). Extraction still succeeded.
    pub warnings: Vec<String>,
}

/// Errors that can occur during document extraction.
#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("Document is empty")]
    EmptyDocument,

    #[error("Invalid document: {0}")]
    InvalidDocument(String),
}

/// Extracts plain text from an uploaded document.
///
/// Synchronous by design: extraction is CPU-bound and small, callers on an
/// async runtime should wrap it in a blocking section if files get large.
pub trait TextExtractor: Send + Sync {
    fn extract(&self, bytes: &[u8]) -> Result<ExtractedText, ExtractionError>;
}
