//! Port definitions
//!
//! Interfaces the application layer needs from the outside world.
//! Implementations (adapters) live in the infrastructure layer.

pub mod extraction;
pub mod inference;
