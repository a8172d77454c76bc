//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the `lzdw.toml` file.

use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// HTTP server settings
    pub server: FileServerConfig,
    /// Inference endpoint settings
    pub inference: FileInferenceConfig,
}

/// `[server]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for FileServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

/// `[inference]` section
///
/// `api_key` has no file default on purpose; set it through the environment
/// (`LZDW_INFERENCE__API_KEY`) so it never ends up in a committed file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileInferenceConfig {
    /// API base URL, without the `/chat/completions` suffix.
    pub endpoint: String,
    pub model: String,
    pub api_key: Option<String>,
}

impl Default for FileInferenceConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.groq.com/openai/v1".to_string(),
            model: "llama-3.3-70b-versatile".to_string(),
            api_key: None,
        }
    }
}
