//! Test fixtures for the verse workspace: a small sample corpus and a
//! scripted embedding provider that needs no network.

use std::collections::{HashMap, HashSet};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use verse_core::errors::EmbeddingError;
use verse_core::models::Group;
use verse_core::traits::IEmbeddingProvider;

const SAMPLE_CORPUS_JSON: &str = include_str!("../data/corpus/sample.json");

/// Raw JSON of the sample corpus.
pub fn sample_corpus_json() -> &'static str {
    SAMPLE_CORPUS_JSON
}

/// The sample corpus: 4 groups, 8 lines, group 3 without content.
pub fn sample_corpus() -> Vec<Group> {
    serde_json::from_str(SAMPLE_CORPUS_JSON)
        .unwrap_or_else(|e| panic!("Failed to parse sample corpus: {e}"))
}

/// Absolute path of a file under the fixture `data/` directory.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("data")
        .join(relative_path)
}

/// The two-line corpus used in most retrieval scenarios.
pub fn sun_moon_corpus() -> Vec<Group> {
    vec![Group::new(
        1,
        "A",
        vec!["the sun rises".to_string(), "the moon sets".to_string()],
    )]
}

/// A single group with `count` distinct lines: `"line 0"`, `"line 1"`, ...
pub fn numbered_corpus(count: usize) -> Vec<Group> {
    vec![Group::new(
        7,
        "Numbers",
        (0..count).map(|i| format!("line {i}")).collect(),
    )]
}

/// How the scripted provider fails, if at all.
#[derive(Debug, Clone)]
enum FailureMode {
    None,
    /// Every request returns this HTTP status.
    Status(u16),
    /// Every request succeeds without a vector.
    MissingVector,
}

/// Deterministic in-memory embedding provider.
///
/// Texts with an explicit vector get that vector; all other texts get a
/// bag-of-words vector (lowercased terms hashed into `dims` buckets).
/// Every call is counted and recorded, including failing ones.
pub struct ScriptedProvider {
    dims: usize,
    vectors: HashMap<String, Vec<f32>>,
    fail_texts: HashSet<String>,
    failure: FailureMode,
    calls: AtomicUsize,
    requests: Mutex<Vec<String>>,
}

impl ScriptedProvider {
    pub fn new(dims: usize) -> Self {
        Self {
            dims,
            vectors: HashMap::new(),
            fail_texts: HashSet::new(),
            failure: FailureMode::None,
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Return `vector` whenever exactly `text` is embedded.
    pub fn with_vector(mut self, text: &str, vector: Vec<f32>) -> Self {
        self.vectors.insert(text.to_string(), vector);
        self
    }

    /// Fail with HTTP 500 whenever exactly `text` is embedded.
    pub fn fail_on(mut self, text: &str) -> Self {
        self.fail_texts.insert(text.to_string());
        self
    }

    /// Fail every request with `status`.
    pub fn failing_with_status(mut self, status: u16) -> Self {
        self.failure = FailureMode::Status(status);
        self
    }

    /// Answer every request with a success that carries no vector.
    pub fn returning_no_vector(mut self) -> Self {
        self.failure = FailureMode::MissingVector;
        self
    }

    /// Number of `embed` calls received.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Texts received, in arrival order.
    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Bag-of-words vector for `text`.
    pub fn bag_of_words(&self, text: &str) -> Vec<f32> {
        let mut vec = vec![0.0f32; self.dims];
        for term in text
            .split(|c: char| !c.is_alphanumeric())
            .filter(|s| !s.is_empty())
        {
            vec[hash_term(&term.to_lowercase(), self.dims)] += 1.0;
        }
        vec
    }
}

/// Hash a term into a bucket index using FNV-1a.
fn hash_term(term: &str, dims: usize) -> usize {
    let mut h: u64 = 0xcbf29ce484222325;
    for b in term.as_bytes() {
        h ^= *b as u64;
        h = h.wrapping_mul(0x100000001b3);
    }
    (h as usize) % dims
}

#[async_trait]
impl IEmbeddingProvider for ScriptedProvider {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(text.to_string());

        match self.failure {
            FailureMode::Status(status) => {
                return Err(EmbeddingError::ProviderError {
                    status,
                    body: "scripted failure".to_string(),
                })
            }
            FailureMode::MissingVector => return Err(EmbeddingError::MissingEmbedding),
            FailureMode::None => {}
        }
        if self.fail_texts.contains(text) {
            return Err(EmbeddingError::ProviderError {
                status: 500,
                body: format!("scripted failure for {text:?}"),
            });
        }

        Ok(self
            .vectors
            .get(text)
            .cloned()
            .unwrap_or_else(|| self.bag_of_words(text)))
    }

    fn name(&self) -> &str {
        "scripted"
    }
}
