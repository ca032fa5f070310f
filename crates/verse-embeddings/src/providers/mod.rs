//! Embedding providers.

pub mod ollama_provider;

pub use ollama_provider::OllamaProvider;
