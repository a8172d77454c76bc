//! Domain layer for lzdw
//!
//! This crate contains the core business logic of the Landing Zone Design
//! Workshop service. It has no dependencies on infrastructure or
//! presentation concerns.
//!
//! # Core Concepts
//!
//! ## Architecture
//!
//! The [`Architecture`] value describes a proposed AWS multi-account landing
//! zone: one master/payer account plus accounts grouped into Security,
//! Workload, and Networking organizational units (OUs).
//!
//! ## Normalization
//!
//! The inference boundary returns a loosely-shaped JSON blob. The
//! [`normalize`] pipeline deterministically repairs it into a value that
//! satisfies every schema invariant. Missing fields, placeholder names,
//! sentinel emails, and out-of-range OU lengths are all self-healed, never
//! surfaced as errors. Only unparseable JSON is fatal.
//!
//! ## Rendering
//!
//! Two read-only views are derived from a normalized architecture: a
//! draw.io diagram-interchange XML document ([`diagram`]) and a node/edge
//! graph for the interactive browser viewer ([`graph`]).

pub mod architecture;
pub mod diagram;
pub mod graph;
pub mod prompt;
pub mod util;

// Re-export commonly used types
pub use architecture::{
    extract::{extract_client_name, infer_region},
    model::{Account, AccountStructure, Architecture, MasterAccount, NetworkArchitecture},
    normalize::{NormalizeError, domain_token, normalize, strip_code_fences},
};
pub use diagram::{
    drawio::to_drawio_xml,
    layout::layout_architecture,
    model::{Cell, DiagramDoc, Geometry},
};
pub use graph::{GraphEdge, GraphNode, GraphView, NodeKind, build_graph_view};
pub use prompt::InferencePrompt;
pub use util::{truncate_str, underscore_name};
