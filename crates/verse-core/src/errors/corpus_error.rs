/// Corpus loading errors.
///
/// Building an index from already-parsed groups never fails; these only
/// arise when reading or decoding the source data.
#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("failed to read corpus {path}: {reason}")]
    Io { path: String, reason: String },

    #[error("failed to parse corpus: {reason}")]
    Parse { reason: String },
}
