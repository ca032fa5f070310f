//! The two retrieval paths.

pub mod keyword_search;
pub mod semantic_search;

pub use keyword_search::search_keyword;
pub use semantic_search::search_semantic;
