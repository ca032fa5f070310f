use async_trait::async_trait;

use crate::errors::EmbeddingError;

/// Embedding generation provider.
///
/// Implementations perform exactly one provider round-trip per call;
/// memoization belongs to the caller.
#[async_trait]
pub trait IEmbeddingProvider: Send + Sync {
    /// Embed a single text, returning a vector of floats.
    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError>;

    /// Human-readable provider name.
    fn name(&self) -> &str;
}
