//! Presentation layer for lzdw
//!
//! The HTTP API (handlers, routes, error envelope) and the CLI argument
//! definitions. Wiring happens in the `lzdw` binary crate.

pub mod cli;
pub mod http;

// Re-export commonly used types
pub use cli::{Cli, Command};
pub use http::{ApiError, AppState, create_router};
