//! Render Diagram use case.
//!
//! Turns a normalized architecture into the downloadable draw.io artifact
//! plus the matching file names.

use chrono::{DateTime, Utc};
use tracing::debug;

use lzdw_domain::architecture::model::Architecture;
use lzdw_domain::diagram::drawio::to_drawio_xml;
use lzdw_domain::util::underscore_name;

/// A ready-to-download diagram document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagramArtifact {
    pub xml: String,
    /// Suggested download name, e.g. `Acme_Corp_Landing_Zone.drawio`.
    pub file_name: String,
}

/// Use case for rendering the draw.io export.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderDiagramUseCase;

impl RenderDiagramUseCase {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self, architecture: &Architecture) -> DiagramArtifact {
        self.execute_at(architecture, Utc::now())
    }

    /// Render with an explicit modification timestamp.
    pub fn execute_at(
        &self,
        architecture: &Architecture,
        modified: DateTime<Utc>,
    ) -> DiagramArtifact {
        let xml = to_drawio_xml(architecture, modified);
        let file_name = format!(
            "{}_Landing_Zone.drawio",
            underscore_name(&architecture.client_name)
        );
        debug!(file_name, bytes = xml.len(), "Diagram rendered");
        DiagramArtifact { xml, file_name }
    }

    /// Download name for the architecture JSON that accompanies the diagram.
    pub fn architecture_file_name(&self, architecture: &Architecture) -> String {
        format!(
            "{}_Architecture.json",
            underscore_name(&architecture.client_name)
        )
    }
}
