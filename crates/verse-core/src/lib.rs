//! # verse-core
//!
//! Foundation crate for the verse retrieval engine.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::VerseConfig;
pub use errors::{VerseError, VerseResult};
pub use models::{Embedding, Group, Record, ScoredRecord, SearchMode, SearchOutcome};
