use serde::{Deserialize, Serialize};

use super::defaults;

/// Retrieval subsystem configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Number of leading corpus records scored on the semantic path.
    pub max_pool_size: usize,
    /// Result count used by `RetrievalEngine::search`.
    pub default_top_k: usize,
    /// Record count used by `RetrievalEngine::context`.
    pub default_context_verses: usize,
    /// Degradation events kept until drained. The oldest is dropped when full;
    /// `0` keeps none.
    pub max_degradation_events: usize,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            max_pool_size: defaults::DEFAULT_MAX_POOL_SIZE,
            default_top_k: defaults::DEFAULT_TOP_K,
            default_context_verses: defaults::DEFAULT_CONTEXT_VERSES,
            max_degradation_events: defaults::DEFAULT_MAX_DEGRADATION_EVENTS,
        }
    }
}
