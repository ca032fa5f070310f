use verse_core::models::{Group, Record, ScoredRecord, SearchMode, SearchOutcome};

#[test]
fn record_id_is_one_based() {
    let record = Record::new(2, "The Cow", 0, "first line");
    assert_eq!(record.id, "2:1");
    assert_eq!(record.index_in_group, 0);
}

#[test]
fn group_without_content_deserializes() {
    let group: Group = serde_json::from_str(r#"{"number": 9, "name": "Repentance"}"#).unwrap();
    assert!(group.content.is_none());
    assert!(group.lines().is_empty());
}

#[test]
fn group_with_null_content_deserializes() {
    let group: Group =
        serde_json::from_str(r#"{"number": 1, "name": "A", "content": null, "extra": 3}"#)
            .unwrap();
    assert!(group.lines().is_empty());
}

#[test]
fn record_serializes_camel_case() {
    let scored = ScoredRecord {
        record: Record::new(1, "A", 1, "the moon sets"),
        score: 0.9,
    };
    let json = serde_json::to_value(&scored).unwrap();
    assert_eq!(json["record"]["id"], "1:2");
    assert_eq!(json["record"]["groupNumber"], 1);
    assert_eq!(json["record"]["indexInGroup"], 1);
    assert_eq!(json["score"], 0.9);
}

#[test]
fn empty_outcome_is_semantic() {
    let outcome = SearchOutcome::empty();
    assert_eq!(outcome.mode, SearchMode::Semantic);
    assert!(!outcome.is_fallback());
    assert!(outcome.results.is_empty());
}
