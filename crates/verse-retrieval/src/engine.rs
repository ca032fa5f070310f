//! RetrievalEngine: two-tier verse retrieval.
//!
//! Every call starts on the semantic path. Any embedding failure switches
//! that call, once and for good, to the keyword fallback over the whole
//! corpus. Callers never see an error.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use chrono::Utc;
use tracing::{debug, info, warn, Instrument};
use verse_core::config::{RetrievalConfig, VerseConfig};
use verse_core::constants::{KEYWORD_FALLBACK_NAME, RETRIEVAL_COMPONENT};
use verse_core::errors::VerseResult;
use verse_core::models::{
    DegradationEvent, Record, ScoredRecord, SearchMode, SearchOutcome,
};
use verse_embeddings::EmbeddingClient;

use crate::corpus::CorpusIndex;
use crate::search::{search_keyword, search_semantic};

/// The main retrieval engine.
pub struct RetrievalEngine {
    corpus: Arc<CorpusIndex>,
    embeddings: EmbeddingClient,
    config: RetrievalConfig,
    /// Degradation events since the last drain, oldest first, at most
    /// `config.max_degradation_events`.
    events: Mutex<VecDeque<DegradationEvent>>,
}

impl RetrievalEngine {
    pub fn new(
        corpus: impl Into<Arc<CorpusIndex>>,
        embeddings: EmbeddingClient,
        config: RetrievalConfig,
    ) -> Self {
        let corpus = corpus.into();
        info!(
            records = corpus.len(),
            pool = corpus.pool(config.max_pool_size).len(),
            provider = embeddings.provider_name(),
            "RetrievalEngine initialized"
        );
        Self {
            corpus,
            embeddings,
            config,
            events: Mutex::new(VecDeque::new()),
        }
    }

    /// Engine backed by the configured Ollama server.
    pub fn from_config(corpus: impl Into<Arc<CorpusIndex>>, config: &VerseConfig) -> VerseResult<Self> {
        let embeddings = EmbeddingClient::from_config(&config.embedding)?;
        Ok(Self::new(corpus, embeddings, config.retrieval.clone()))
    }

    /// Full indexed corpus, in order.
    pub fn records(&self) -> &[Record] {
        self.corpus.records()
    }

    pub fn corpus(&self) -> &CorpusIndex {
        &self.corpus
    }

    pub fn embeddings(&self) -> &EmbeddingClient {
        &self.embeddings
    }

    pub fn config(&self) -> &RetrievalConfig {
        &self.config
    }

    /// Run a search and report which path produced the results.
    pub async fn retrieve(&self, query: &str, top_k: usize) -> SearchOutcome {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return SearchOutcome::empty();
        }

        let pool = self.corpus.pool(self.config.max_pool_size);
        let semantic = search_semantic(&self.embeddings, trimmed, pool, top_k)
            .instrument(verse_observability::retrieval_span!(trimmed, top_k))
            .await;
        match semantic {
            Ok(results) => SearchOutcome {
                mode: SearchMode::Semantic,
                results,
            },
            Err(e) => {
                warn!(error = %e, "semantic search failed, using keyword fallback");
                self.record_degradation(e.to_string());

                let results = search_keyword(self.corpus.records(), query, top_k);
                debug!(matches = results.len(), "keyword fallback complete");
                SearchOutcome {
                    mode: SearchMode::Fallback,
                    results,
                }
            }
        }
    }

    /// Top `top_k` records for `query`, best first.
    pub async fn semantic_search(&self, query: &str, top_k: usize) -> Vec<ScoredRecord> {
        self.retrieve(query, top_k).await.results
    }

    /// `semantic_search` with the configured default result count.
    pub async fn search(&self, query: &str) -> Vec<ScoredRecord> {
        self.semantic_search(query, self.config.default_top_k).await
    }

    /// Records to ground a downstream generation step, in ranked order.
    pub async fn get_context_for_query(&self, query: &str, max_verses: usize) -> Vec<Record> {
        self.semantic_search(query, max_verses)
            .await
            .into_iter()
            .map(|scored| scored.record)
            .collect()
    }

    /// `get_context_for_query` with the configured default verse count.
    pub async fn context(&self, query: &str) -> Vec<Record> {
        self.get_context_for_query(query, self.config.default_context_verses)
            .await
    }

    /// Drain retained degradation events, oldest first.
    pub fn drain_degradation_events(&self) -> Vec<DegradationEvent> {
        self.events
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .drain(..)
            .collect()
    }

    fn record_degradation(&self, failure: String) {
        let event = DegradationEvent {
            component: RETRIEVAL_COMPONENT.to_string(),
            failure,
            fallback_used: KEYWORD_FALLBACK_NAME.to_string(),
            timestamp: Utc::now(),
        };
        let capacity = self.config.max_degradation_events;
        if capacity == 0 {
            return;
        }
        let mut events = self.events.lock().unwrap_or_else(|e| e.into_inner());
        while events.len() >= capacity {
            events.pop_front();
        }
        events.push_back(event);
    }
}

#[cfg(test)]
mod tests {
    use test_fixtures::{sun_moon_corpus, ScriptedProvider};

    use super::*;

    fn engine(provider: ScriptedProvider) -> RetrievalEngine {
        RetrievalEngine::new(
            CorpusIndex::build(&sun_moon_corpus()),
            EmbeddingClient::with_provider(Arc::new(provider)),
            RetrievalConfig::default(),
        )
    }

    #[tokio::test]
    async fn semantic_path_reports_mode() {
        let outcome = engine(ScriptedProvider::new(64)).retrieve("sun", 2).await;
        assert_eq!(outcome.mode, SearchMode::Semantic);
        assert_eq!(outcome.results.len(), 2);
    }

    #[tokio::test]
    async fn failure_records_one_degradation_event() {
        let engine = engine(ScriptedProvider::new(64).failing_with_status(500));
        let outcome = engine.retrieve("moon", 5).await;
        assert!(outcome.is_fallback());

        let events = engine.drain_degradation_events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].component, "retrieval");
        assert_eq!(events[0].fallback_used, "keyword-substring");
        assert!(events[0].failure.contains("500"));
        assert!(engine.drain_degradation_events().is_empty());
    }

    #[tokio::test]
    async fn degradation_buffer_keeps_most_recent_events() {
        let engine = RetrievalEngine::new(
            CorpusIndex::build(&sun_moon_corpus()),
            EmbeddingClient::with_provider(Arc::new(
                ScriptedProvider::new(8).failing_with_status(500),
            )),
            RetrievalConfig {
                max_degradation_events: 3,
                ..Default::default()
            },
        );
        for query in ["q0", "q1", "q2", "q3"] {
            assert!(engine.retrieve(query, 1).await.is_fallback());
        }

        let events = engine.drain_degradation_events();
        assert_eq!(events.len(), 3);
        assert!(events[0].timestamp <= events[2].timestamp);
        assert!(engine.drain_degradation_events().is_empty());
    }

    #[tokio::test]
    async fn zero_capacity_keeps_no_events() {
        let engine = RetrievalEngine::new(
            CorpusIndex::build(&sun_moon_corpus()),
            EmbeddingClient::with_provider(Arc::new(
                ScriptedProvider::new(8).failing_with_status(500),
            )),
            RetrievalConfig {
                max_degradation_events: 0,
                ..Default::default()
            },
        );
        assert!(engine.retrieve("moon", 5).await.is_fallback());
        assert!(engine.drain_degradation_events().is_empty());
    }

    #[tokio::test]
    async fn no_degradation_events_on_success() {
        let engine = engine(ScriptedProvider::new(64));
        engine.retrieve("sun", 1).await;
        assert!(engine.drain_degradation_events().is_empty());
    }

    #[tokio::test]
    async fn defaults_come_from_config() {
        let engine = RetrievalEngine::new(
            CorpusIndex::build(&test_fixtures::numbered_corpus(20)),
            EmbeddingClient::with_provider(Arc::new(ScriptedProvider::new(16))),
            RetrievalConfig::default(),
        );
        assert_eq!(engine.search("line").await.len(), 10);
        assert_eq!(engine.context("line").await.len(), 5);
    }
}
