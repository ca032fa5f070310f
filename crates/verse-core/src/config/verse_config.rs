//! Top-level configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{EmbeddingConfig, ObservabilityConfig, RetrievalConfig};
use crate::errors::ConfigError;

/// Base URL of the embedding server. Kept unprefixed for compatibility with
/// existing deployments.
pub const ENV_OLLAMA_URL: &str = "OLLAMA_URL";
pub const ENV_EMBEDDING_MODEL: &str = "VERSE_EMBEDDING_MODEL";
pub const ENV_EMBEDDING_TIMEOUT_SECS: &str = "VERSE_EMBEDDING_TIMEOUT_SECS";
pub const ENV_MAX_POOL_SIZE: &str = "VERSE_MAX_POOL_SIZE";
pub const ENV_LOG_LEVEL: &str = "VERSE_LOG_LEVEL";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`OLLAMA_URL`, `VERSE_*`)
/// 2. TOML config file, when one is given
/// 3. Compiled defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct VerseConfig {
    pub embedding: EmbeddingConfig,
    pub retrieval: RetrievalConfig,
    pub observability: ObservabilityConfig,
}

impl VerseConfig {
    /// Load configuration from an optional TOML file plus the process environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_toml_file(path)?,
            None => Self::default(),
        };
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Apply overrides from the process environment.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary key lookup.
    /// Values that fail to parse are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup(ENV_OLLAMA_URL) {
            self.embedding.base_url = val;
        }
        if let Some(val) = lookup(ENV_EMBEDDING_MODEL) {
            self.embedding.model = val;
        }
        if let Some(val) = lookup(ENV_EMBEDDING_TIMEOUT_SECS) {
            if let Ok(v) = val.parse::<u64>() {
                self.embedding.request_timeout_secs = v;
            }
        }
        if let Some(val) = lookup(ENV_MAX_POOL_SIZE) {
            if let Ok(v) = val.parse::<usize>() {
                self.retrieval.max_pool_size = v;
            }
        }
        if let Some(val) = lookup(ENV_LOG_LEVEL) {
            self.observability.log_level = val;
        }
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.embedding.base_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::ValidationFailed {
                field: "embedding.base_url".to_string(),
                message: format!("must be an http(s) URL, got {url:?}"),
            });
        }
        if self.embedding.model.trim().is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "embedding.model".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if self.retrieval.default_top_k == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "retrieval.default_top_k".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
