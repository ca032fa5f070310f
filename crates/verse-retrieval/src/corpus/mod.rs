//! Corpus index: the nested source dataset flattened into ordered records.
//!
//! Built once at startup and read-only afterwards.

use std::collections::HashMap;
use std::path::Path;

use tracing::debug;
use verse_core::errors::CorpusError;
use verse_core::models::{Group, Record};

/// Flatten groups into records, preserving group order then line order.
///
/// Groups without content contribute nothing.
pub fn build_index(groups: &[Group]) -> Vec<Record> {
    groups
        .iter()
        .flat_map(|group| {
            group
                .lines()
                .iter()
                .enumerate()
                .map(move |(idx, text)| Record::new(group.number, &group.name, idx, text))
        })
        .collect()
}

/// Ordered, addressable view over the indexed records.
#[derive(Debug, Clone, Default)]
pub struct CorpusIndex {
    records: Vec<Record>,
    /// Record id → position. First occurrence wins on duplicate ids.
    positions: HashMap<String, usize>,
}

impl CorpusIndex {
    pub fn build(groups: &[Group]) -> Self {
        let records = build_index(groups);
        let mut positions = HashMap::with_capacity(records.len());
        for (pos, record) in records.iter().enumerate() {
            positions.entry(record.id.clone()).or_insert(pos);
        }
        debug!(
            groups = groups.len(),
            records = records.len(),
            "corpus index built"
        );
        Self { records, positions }
    }

    /// Parse a JSON array of groups and index it.
    pub fn from_json(json: &str) -> Result<Self, CorpusError> {
        let groups: Vec<Group> = serde_json::from_str(json).map_err(|e| CorpusError::Parse {
            reason: e.to_string(),
        })?;
        Ok(Self::build(&groups))
    }

    /// Read and index a JSON corpus file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CorpusError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| CorpusError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_json(&content)
    }

    /// All records in corpus order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn get(&self, id: &str) -> Option<&Record> {
        self.positions.get(id).map(|&pos| &self.records[pos])
    }

    /// The first `size` records (fewer if the corpus is smaller).
    pub fn pool(&self, size: usize) -> &[Record] {
        &self.records[..size.min(self.records.len())]
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
