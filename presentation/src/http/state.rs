//! Shared handler state.

use std::sync::Arc;

use lzdw_application::ports::extraction::TextExtractor;
use lzdw_application::ports::inference::InferenceGateway;
use lzdw_application::use_cases::extract_text::ExtractTextUseCase;
use lzdw_application::use_cases::generate_architecture::GenerateArchitectureUseCase;
use lzdw_application::use_cases::graph_view::GraphViewUseCase;
use lzdw_application::use_cases::render_diagram::RenderDiagramUseCase;

/// Use cases shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub generate: Arc<GenerateArchitectureUseCase>,
    pub render_diagram: RenderDiagramUseCase,
    pub graph_view: GraphViewUseCase,
    pub extract_text: Arc<ExtractTextUseCase>,
}

impl AppState {
    pub fn new(gateway: Arc<dyn InferenceGateway>, extractor: Arc<dyn TextExtractor>) -> Self {
        Self {
            generate: Arc::new(GenerateArchitectureUseCase::new(gateway)),
            render_diagram: RenderDiagramUseCase::new(),
            graph_view: GraphViewUseCase::new(),
            extract_text: Arc::new(ExtractTextUseCase::new(extractor)),
        }
    }
}
