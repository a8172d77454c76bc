//! Application layer for lzdw
//!
//! This crate contains use cases and port definitions. It depends only on
//! the domain layer; adapters for the ports live in the infrastructure
//! layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    extraction::{ExtractedText, ExtractionError, TextExtractor},
    inference::{InferenceError, InferenceGateway},
};
pub use use_cases::extract_text::ExtractTextUseCase;
pub use use_cases::generate_architecture::{
    GenerateArchitectureUseCase, GenerateError, GenerateInput,
};
pub use use_cases::graph_view::GraphViewUseCase;
pub use use_cases::render_diagram::{DiagramArtifact, RenderDiagramUseCase};
