//! Error handling for the verse engine.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod corpus_error;
pub mod embedding_error;

pub use config_error::ConfigError;
pub use corpus_error::CorpusError;
pub use embedding_error::EmbeddingError;

/// Top-level error aggregating every subsystem error.
#[derive(Debug, thiserror::Error)]
pub enum VerseError {
    #[error("embedding error: {0}")]
    EmbeddingError(#[from] EmbeddingError),

    #[error("config error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("corpus error: {0}")]
    CorpusError(#[from] CorpusError),
}

pub type VerseResult<T> = Result<T, VerseError>;
