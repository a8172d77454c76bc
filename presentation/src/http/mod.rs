//! HTTP API
//!
//! JSON endpoints mirroring the workshop flow: extract questionnaire text,
//! generate an architecture, render the diagram and graph views.

mod error;
mod handlers;
mod routes;
mod state;

pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
