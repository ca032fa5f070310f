/// Embedding subsystem errors.
///
/// Every variant aborts the semantic path of the search that raised it.
#[derive(Debug, thiserror::Error)]
pub enum EmbeddingError {
    #[error("embedding provider returned {status}: {body}")]
    ProviderError { status: u16, body: String },

    #[error("embedding provider response contained no vector")]
    MissingEmbedding,

    #[error("embedding transport failed: {reason}")]
    Transport { reason: String },

    #[error("embedding response could not be decoded: {reason}")]
    Decode { reason: String },

    #[error("embedding request timed out after {after_secs}s")]
    Timeout { after_secs: u64 },
}

impl EmbeddingError {
    /// HTTP status carried by a provider error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ProviderError { status, .. } => Some(*status),
            _ => None,
        }
    }
}
