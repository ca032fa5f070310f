//! # verse-embeddings
//!
//! Embedding acquisition for the verse engine: a remote Ollama provider
//! behind the `IEmbeddingProvider` seam, plus per-process memoization keyed
//! by the first 200 characters of the text.
//!
//! ## Architecture
//!
//! ```text
//! EmbeddingClient
//! ├── IEmbeddingProvider (injected)
//! │   └── OllamaProvider (POST {base_url}/api/embed)
//! └── EmbeddingCache (dashmap, append-only)
//! ```

pub mod cache;
pub mod client;
pub mod providers;

pub use cache::{cache_key, EmbeddingCache};
pub use client::EmbeddingClient;
pub use providers::OllamaProvider;
