use serde::{Deserialize, Serialize};

use super::ScoredRecord;

/// Which path produced a set of results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchMode {
    /// Embedding similarity over the search pool.
    Semantic,
    /// Substring match over the whole corpus after an embedding failure.
    Fallback,
}

/// Results of one search together with the path that produced them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchOutcome {
    pub mode: SearchMode,
    pub results: Vec<ScoredRecord>,
}

impl SearchOutcome {
    pub fn empty() -> Self {
        Self {
            mode: SearchMode::Semantic,
            results: Vec::new(),
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.mode == SearchMode::Fallback
    }
}
