//! Use cases
//!
//! One module per operation the presentation layer can trigger.

pub mod extract_text;
pub mod generate_architecture;
pub mod graph_view;
pub mod render_diagram;
