//! Substring fallback search over the whole corpus.

use verse_core::constants::FALLBACK_SCORE;
use verse_core::models::{Record, ScoredRecord};

/// Whether `text` contains `query` literally or case-insensitively.
pub fn matches(text: &str, query: &str, query_lower: &str) -> bool {
    text.contains(query) || text.to_lowercase().contains(query_lower)
}

/// Records containing `query`, in corpus order, each scored `FALLBACK_SCORE`.
///
/// Cannot fail; no match yields an empty result.
pub fn search_keyword(records: &[Record], query: &str, top_k: usize) -> Vec<ScoredRecord> {
    let query_lower = query.to_lowercase();
    records
        .iter()
        .filter(|record| matches(&record.text, query, &query_lower))
        .take(top_k)
        .map(|record| ScoredRecord {
            record: record.clone(),
            score: FALLBACK_SCORE,
        })
        .collect()
}
