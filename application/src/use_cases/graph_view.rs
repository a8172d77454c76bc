//! Graph View use case.
//!
//! Thin wrapper around the domain graph builder so the presentation layer
//! works against use cases uniformly.

use tracing::debug;

use lzdw_domain::architecture::model::Architecture;
use lzdw_domain::graph::{GraphView, build_graph_view};

/// Use case for building the interactive graph view payload.
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphViewUseCase;

impl GraphViewUseCase {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self, architecture: &Architecture) -> GraphView {
        let view = build_graph_view(architecture);
        debug!(
            nodes = view.nodes.len(),
            edges = view.edges.len(),
            "Graph view built"
        );
        view
    }
}
