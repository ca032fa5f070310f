use serde::{Deserialize, Serialize};

use super::defaults;

/// Embedding subsystem configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Base URL of the Ollama server; `/api/embed` is appended.
    pub base_url: String,
    /// Embedding model name sent with every request.
    pub model: String,
    /// Per-request timeout in seconds. `0` waits indefinitely.
    pub request_timeout_secs: u64,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::DEFAULT_OLLAMA_URL.to_string(),
            model: defaults::DEFAULT_EMBEDDING_MODEL.to_string(),
            request_timeout_secs: defaults::DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}
