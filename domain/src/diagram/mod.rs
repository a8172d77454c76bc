//! Diagram generation: a box/edge intermediate model, the fixed-formula
//! layout, and the draw.io XML writer.
//!
//! The layout and the writer are deliberately separate so one set of
//! coordinate formulas serves every export path.

pub mod drawio;
pub mod layout;
pub mod model;

pub use drawio::to_drawio_xml;
pub use layout::layout_architecture;
pub use model::{Cell, DiagramDoc, Geometry};
