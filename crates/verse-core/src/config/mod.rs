pub mod defaults;
pub mod embedding_config;
pub mod observability_config;
pub mod retrieval_config;
pub mod verse_config;

pub use embedding_config::EmbeddingConfig;
pub use observability_config::ObservabilityConfig;
pub use retrieval_config::RetrievalConfig;
pub use verse_config::VerseConfig;
