//! EmbeddingClient: the entry point for embedding access.
//!
//! Wraps an injected provider with the prefix-keyed cache. Each distinct
//! cache key reaches the provider at most once per successful call; failed
//! calls leave the cache untouched.

use std::sync::Arc;

use tracing::{debug, info};
use verse_core::config::EmbeddingConfig;
use verse_core::errors::EmbeddingError;
use verse_core::models::Embedding;
use verse_core::traits::IEmbeddingProvider;

use crate::cache::{cache_key, EmbeddingCache};
use crate::providers::OllamaProvider;

/// Memoizing embedding client.
///
/// Cheap to clone; clones share the provider and the cache. Concurrent
/// misses on the same key are not collapsed: each issues its own request
/// and the first stored vector wins.
#[derive(Clone)]
pub struct EmbeddingClient {
    provider: Arc<dyn IEmbeddingProvider>,
    cache: Arc<EmbeddingCache>,
}

impl EmbeddingClient {
    pub fn new(provider: Arc<dyn IEmbeddingProvider>, cache: Arc<EmbeddingCache>) -> Self {
        Self { provider, cache }
    }

    /// Client with a fresh, empty cache.
    pub fn with_provider(provider: Arc<dyn IEmbeddingProvider>) -> Self {
        Self::new(provider, EmbeddingCache::shared())
    }

    /// Client talking to the configured Ollama server.
    pub fn from_config(config: &EmbeddingConfig) -> Result<Self, EmbeddingError> {
        let provider = OllamaProvider::from_config(config)?;
        info!(
            endpoint = provider.endpoint(),
            model = %config.model,
            timeout_secs = config.request_timeout_secs,
            "embedding client initialized"
        );
        Ok(Self::with_provider(Arc::new(provider)))
    }

    /// Embed `text`, serving from cache when its key has been seen.
    pub async fn embed(&self, text: &str) -> Result<Embedding, EmbeddingError> {
        let key = cache_key(text);
        if let Some(hit) = self.cache.get(key) {
            debug!(key_chars = key.chars().count(), "embedding cache hit");
            return Ok(hit);
        }

        debug!(provider = self.provider.name(), "embedding cache miss");
        let vector = self.provider.embed(text).await?;
        Ok(self.cache.insert(key.to_string(), Embedding::from(vector)))
    }

    pub fn cache(&self) -> &EmbeddingCache {
        &self.cache
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }
}
