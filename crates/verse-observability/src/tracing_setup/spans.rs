//! Span definitions per operation: retrieval and embedding.

/// Create a retrieval span.
#[macro_export]
macro_rules! retrieval_span {
    ($query:expr, $top_k:expr) => {
        tracing::info_span!("verse.retrieval", query = %$query, top_k = $top_k)
    };
}

/// Create an embedding span.
#[macro_export]
macro_rules! embedding_span {
    ($provider:expr, $pool:expr) => {
        tracing::debug_span!("verse.embedding", provider = %$provider, pool = $pool)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const RETRIEVAL: &str = "verse.retrieval";
    pub const EMBEDDING: &str = "verse.embedding";
}
