/// Verse engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Score assigned to every keyword-fallback match.
///
/// Signals "relevant but not ranked": fallback results carry no similarity.
pub const FALLBACK_SCORE: f64 = 0.9;

/// Number of leading characters of a text used as its embedding cache key.
pub const CACHE_KEY_CHARS: usize = 200;

/// Component name used in degradation events raised by retrieval.
pub const RETRIEVAL_COMPONENT: &str = "retrieval";

/// Name of the keyword path as reported in degradation events.
pub const KEYWORD_FALLBACK_NAME: &str = "keyword-substring";
