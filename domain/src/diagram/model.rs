//! Intermediate diagram model.
//!
//! Every element carries explicit geometry. There is no relative or flow
//! layout, so a document is fully determined by the cells pushed into it.

/// Absolute position and size of a diagram element, in page units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Geometry {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }
}

/// One diagram element: a styled box/icon/text vertex or a directed edge.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// A box, icon, or text label with explicit geometry.
    Vertex {
        id: String,
        /// Display text. Interpolated into the document with XML escaping;
        /// may contain `<br>` for intentional line breaks.
        value: String,
        style: String,
        geometry: Geometry,
    },
    /// A directed connector between two absolute points.
    Edge {
        id: String,
        style: String,
        source: (i32, i32),
        target: (i32, i32),
        /// Optional orthogonal routing waypoints.
        waypoints: Vec<(i32, i32)>,
    },
}

impl Cell {
    pub fn id(&self) -> &str {
        match self {
            Cell::Vertex { id, .. } | Cell::Edge { id, .. } => id,
        }
    }
}

/// A complete diagram page.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagramDoc {
    pub name: String,
    pub page_width: i32,
    pub page_height: i32,
    pub cells: Vec<Cell>,
}

impl DiagramDoc {
    pub fn new(name: impl Into<String>, page_width: i32, page_height: i32) -> Self {
        Self {
            name: name.into(),
            page_width,
            page_height,
            cells: Vec::new(),
        }
    }

    pub fn vertex(
        &mut self,
        id: impl Into<String>,
        value: impl Into<String>,
        style: impl Into<String>,
        geometry: Geometry,
    ) {
        self.cells.push(Cell::Vertex {
            id: id.into(),
            value: value.into(),
            style: style.into(),
            geometry,
        });
    }

    pub fn edge(
        &mut self,
        id: impl Into<String>,
        style: impl Into<String>,
        source: (i32, i32),
        target: (i32, i32),
        waypoints: Vec<(i32, i32)>,
    ) {
        self.cells.push(Cell::Edge {
            id: id.into(),
            style: style.into(),
            source,
            target,
            waypoints,
        });
    }

    /// Count of vertex cells (boxes, icons, labels).
    pub fn vertex_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|c| matches!(c, Cell::Vertex { .. }))
            .count()
    }

    /// Count of edge cells.
    pub fn edge_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|c| matches!(c, Cell::Edge { .. }))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_by_kind() {
        let mut doc = DiagramDoc::new("t", 100, 100);
        doc.vertex("a", "A", "s", Geometry::new(0, 0, 10, 10));
        doc.edge("e", "s", (0, 0), (5, 5), vec![]);
        assert_eq!(doc.vertex_count(), 1);
        assert_eq!(doc.edge_count(), 1);
        assert_eq!(doc.cells[0].id(), "a");
    }
}
