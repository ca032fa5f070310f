//! Embedding-similarity ranking over the search pool.

use futures::future::try_join_all;
use tracing::{debug, Instrument};
use verse_core::errors::EmbeddingError;
use verse_core::models::{Record, ScoredRecord};
use verse_embeddings::EmbeddingClient;

use crate::similarity::cosine_similarity;

/// Rank `pool` against `query` by cosine similarity, best first.
///
/// The query is embedded first, then every pool record concurrently. Any
/// embedding failure aborts the whole ranking. Equal scores keep pool order.
pub async fn search_semantic(
    client: &EmbeddingClient,
    query: &str,
    pool: &[Record],
    top_k: usize,
) -> Result<Vec<ScoredRecord>, EmbeddingError> {
    let query_embedding = client.embed(query).await?;

    let embeddings = try_join_all(pool.iter().map(|record| client.embed(&record.text)))
        .instrument(verse_observability::embedding_span!(
            client.provider_name(),
            pool.len()
        ))
        .await?;

    let mut scored: Vec<ScoredRecord> = pool
        .iter()
        .zip(embeddings)
        .map(|(record, embedding)| ScoredRecord {
            record: record.clone(),
            score: cosine_similarity(&query_embedding, &embedding),
        })
        .collect();

    // Stable sort: ties stay in pool order.
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored.truncate(top_k);

    debug!(pool = pool.len(), returned = scored.len(), "semantic ranking complete");
    Ok(scored)
}
