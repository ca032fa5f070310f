//! Process-lifetime in-memory embedding cache backed by dashmap.
//!
//! Append-only: a key is written at most once and never evicted. Growth is
//! bounded by the corpus size.

use std::sync::Arc;

use dashmap::DashMap;
use verse_core::models::Embedding;

/// In-memory embedding cache.
#[derive(Debug, Default)]
pub struct EmbeddingCache {
    entries: DashMap<String, Embedding>,
}

impl EmbeddingCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience for sharing one cache between clients.
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Get an embedding by cache key.
    pub fn get(&self, key: &str) -> Option<Embedding> {
        self.entries.get(key).map(|entry| Arc::clone(entry.value()))
    }

    /// Insert an embedding unless the key is already present.
    ///
    /// Returns the embedding now stored under `key`, which is the earlier
    /// value when another writer got there first.
    pub fn insert(&self, key: String, embedding: Embedding) -> Embedding {
        Arc::clone(self.entries.entry(key).or_insert(embedding).value())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of entries currently in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
