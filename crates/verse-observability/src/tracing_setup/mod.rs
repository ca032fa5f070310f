//! Tracing setup: env-filtered fmt subscriber, human-readable or JSON.

pub mod spans;

use tracing_subscriber::EnvFilter;
use verse_core::config::ObservabilityConfig;

/// Environment variable holding the log filter directive.
pub const LOG_ENV_VAR: &str = "VERSE_LOG";

/// Subscriber output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Plain,
    Json,
}

impl OutputFormat {
    pub fn from_config(config: &ObservabilityConfig) -> Self {
        if config.json {
            Self::Json
        } else {
            Self::Plain
        }
    }
}

/// Initialize tracing with the default configuration: plain output,
/// filtered by `VERSE_LOG` or `info` when it is not set.
///
/// Returns `false` if a global subscriber was already installed.
pub fn init_tracing() -> bool {
    init_from_config(&ObservabilityConfig::default())
}

/// Initialize tracing with a custom filter string (for testing or embedding).
pub fn init_tracing_with_filter(filter: &str) -> bool {
    install(EnvFilter::new(filter), OutputFormat::Plain)
}

/// Initialize tracing from configuration. `VERSE_LOG` still wins when set.
pub fn init_from_config(config: &ObservabilityConfig) -> bool {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    install(filter, OutputFormat::from_config(config))
}

fn install(filter: EnvFilter, format: OutputFormat) -> bool {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    let result = match format {
        OutputFormat::Json => builder
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .json()
            .try_init(),
        OutputFormat::Plain => builder.try_init(),
    };
    result.is_ok()
}
