use std::sync::Arc;

/// A fixed-length embedding vector.
///
/// Shared read-only between the cache and its callers; cloning only bumps
/// the reference count.
pub type Embedding = Arc<[f32]>;
