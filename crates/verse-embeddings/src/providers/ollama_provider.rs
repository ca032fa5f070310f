//! Ollama embedding provider.
//!
//! Connects to an Ollama instance and requests one embedding per call via
//! `POST {base_url}/api/embed`. Only the first returned vector is used.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;
use verse_core::config::EmbeddingConfig;
use verse_core::errors::EmbeddingError;
use verse_core::traits::IEmbeddingProvider;

/// Provider name reported in logs and spans.
pub const PROVIDER_NAME: &str = "ollama";

/// Ollama embedding provider.
pub struct OllamaProvider {
    client: reqwest::Client,
    endpoint: String,
    model: String,
    timeout_secs: u64,
}

#[derive(Serialize)]
struct OllamaEmbedRequest<'a> {
    model: &'a str,
    input: &'a str,
}

#[derive(Deserialize)]
struct OllamaEmbedResponse {
    #[serde(default)]
    embeddings: Option<Vec<Vec<f32>>>,
}

impl OllamaProvider {
    /// Create a new Ollama provider.
    ///
    /// `timeout_secs = 0` disables the per-request timeout.
    pub fn new(base_url: &str, model: &str, timeout_secs: u64) -> Result<Self, EmbeddingError> {
        let mut builder = reqwest::Client::builder();
        if timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(timeout_secs));
        }
        let client = builder.build().map_err(|e| EmbeddingError::Transport {
            reason: format!("failed to build HTTP client: {e}"),
        })?;

        Ok(Self {
            client,
            endpoint: format!("{}/api/embed", base_url.trim_end_matches('/')),
            model: model.to_string(),
            timeout_secs,
        })
    }

    pub fn from_config(config: &EmbeddingConfig) -> Result<Self, EmbeddingError> {
        Self::new(&config.base_url, &config.model, config.request_timeout_secs)
    }

    /// Full URL requests are posted to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn map_send_error(&self, e: reqwest::Error) -> EmbeddingError {
        if e.is_timeout() {
            EmbeddingError::Timeout {
                after_secs: self.timeout_secs,
            }
        } else {
            EmbeddingError::Transport {
                reason: format!("Ollama HTTP error: {e}"),
            }
        }
    }
}

/// Turn a raw provider response into a vector.
///
/// Non-2xx statuses become `ProviderError` with the body attached. A success
/// body that is not JSON is a `Decode` error; valid JSON without a first
/// embedding is `MissingEmbedding`. Components that are not finite (values
/// overflowing `f32`) are a `Decode` error.
pub fn decode_response(status: u16, body: &str) -> Result<Vec<f32>, EmbeddingError> {
    if !(200..300).contains(&status) {
        return Err(EmbeddingError::ProviderError {
            status,
            body: body.to_string(),
        });
    }

    let resp: OllamaEmbedResponse =
        serde_json::from_str(body).map_err(|e| EmbeddingError::Decode {
            reason: format!("Ollama JSON parse error: {e}"),
        })?;

    let vector = resp
        .embeddings
        .and_then(|all| all.into_iter().next())
        .ok_or(EmbeddingError::MissingEmbedding)?;

    if let Some(pos) = vector.iter().position(|x| !x.is_finite()) {
        return Err(EmbeddingError::Decode {
            reason: format!("non-finite embedding component at index {pos}"),
        });
    }
    Ok(vector)
}

#[async_trait]
impl IEmbeddingProvider for OllamaProvider {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        let request = OllamaEmbedRequest {
            model: &self.model,
            input: text,
        };

        debug!(endpoint = %self.endpoint, model = %self.model, chars = text.chars().count(), "requesting embedding");

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| self.map_send_error(e))?;

        decode_response(status, &body)
    }

    fn name(&self) -> &str {
        PROVIDER_NAME
    }
}
