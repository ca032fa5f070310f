//! # verse-retrieval
//!
//! The query engine. Ranks corpus records against a free-text query by
//! embedding similarity, degrading to substring matching when the embedding
//! provider fails.
//!
//! ## Architecture
//!
//! ```text
//! RetrievalEngine
//! ├── CorpusIndex (flat, ordered, read-only)
//! ├── Semantic path
//! │   ├── EmbeddingClient (query + pool, fan-out)
//! │   └── cosine_similarity
//! └── Keyword fallback (whole corpus, flat score)
//! ```

pub mod corpus;
pub mod engine;
pub mod search;
pub mod similarity;

pub use corpus::{build_index, CorpusIndex};
pub use engine::RetrievalEngine;
pub use similarity::cosine_similarity;
