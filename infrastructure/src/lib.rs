//! Infrastructure layer for lzdw
//!
//! Adapters for the application layer's ports: the OpenAI-compatible
//! inference client, the DOCX text extractor, and file-based configuration.

pub mod config;
pub mod extraction;
pub mod inference;

// Re-export commonly used types
pub use config::{ConfigLoader, FileConfig, FileInferenceConfig, FileServerConfig};
pub use extraction::DocxTextExtractor;
pub use inference::OpenAiCompatGateway;
