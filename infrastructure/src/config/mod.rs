//! Configuration loading

mod file_config;
mod loader;

pub use file_config::{FileConfig, FileInferenceConfig, FileServerConfig};
pub use loader::ConfigLoader;
