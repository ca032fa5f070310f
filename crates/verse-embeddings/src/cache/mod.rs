//! Embedding memoization.
//!
//! Keys are the first `CACHE_KEY_CHARS` characters of the embedded text, so
//! texts sharing that prefix share one embedding.

pub mod memory;

pub use memory::EmbeddingCache;

use verse_core::constants::CACHE_KEY_CHARS;

/// Cache key for `text`: its first `CACHE_KEY_CHARS` characters.
///
/// Shorter texts are used whole. Truncation never splits a code point.
pub fn cache_key(text: &str) -> &str {
    match text.char_indices().nth(CACHE_KEY_CHARS) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}
