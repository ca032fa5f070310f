//! # verse-observability
//!
//! Structured logging setup. Library crates only emit `tracing` events;
//! the embedding application installs a subscriber once at startup.

pub mod tracing_setup;

pub use tracing_setup::{init_from_config, init_tracing, init_tracing_with_filter, OutputFormat};
