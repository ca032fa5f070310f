// Single source of truth for all default values.

// --- Embeddings ---
pub const DEFAULT_OLLAMA_URL: &str = "http://nexus_ollama:11434";
pub const DEFAULT_EMBEDDING_MODEL: &str = "nomic-embed-text";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

// --- Retrieval ---
pub const DEFAULT_MAX_POOL_SIZE: usize = 80;
pub const DEFAULT_TOP_K: usize = 10;
pub const DEFAULT_CONTEXT_VERSES: usize = 5;
pub const DEFAULT_MAX_DEGRADATION_EVENTS: usize = 256;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
