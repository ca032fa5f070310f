use serde::{Deserialize, Serialize};

/// One indexed verse with a stable identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// `"<group_number>:<index_in_group + 1>"`.
    pub id: String,
    pub group_number: u32,
    pub group_name: String,
    /// 0-based position within the group.
    pub index_in_group: usize,
    pub text: String,
}

impl Record {
    pub fn new(group_number: u32, group_name: &str, index_in_group: usize, text: &str) -> Self {
        Self {
            id: Self::make_id(group_number, index_in_group),
            group_number,
            group_name: group_name.to_string(),
            index_in_group,
            text: text.to_string(),
        }
    }

    /// Build the identifier for a position. Identifiers are 1-based within the group.
    pub fn make_id(group_number: u32, index_in_group: usize) -> String {
        format!("{group_number}:{}", index_in_group + 1)
    }
}

/// A record paired with its retrieval score.
///
/// Semantic scores are cosine similarities in `[-1, 1]`; keyword fallback
/// matches all carry `FALLBACK_SCORE`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredRecord {
    pub record: Record,
    pub score: f64,
}
