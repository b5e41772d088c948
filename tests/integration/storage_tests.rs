//! Persisted documents on disk: tolerant reads, bounded writes.

use xray::history::MAX_HISTORY;
use xray::quota::DAILY_LIMIT;
use xray::search::ResultItem;

use super::fixture::TestFixture;

#[test]
fn test_corrupt_quota_file_reads_as_fresh_day() {
    let fixture = TestFixture::new("test_corrupt_quota_file_reads_as_fresh_day");
    fixture.data.write_document("quota_usage", "{ this is not json");

    let status = fixture.ledger().status();
    assert_eq!(status.used, 0);
    assert_eq!(status.remaining, DAILY_LIMIT);

    // The next increment replaces the corrupt file.
    fixture.ledger().increment().unwrap();
    let raw = fixture.data.read_document("quota_usage").unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(parsed["date"], "2026-03-12");
    assert_eq!(parsed["count"], 1);
}

#[test]
fn test_stale_quota_is_not_rewritten_by_reads() {
    let fixture = TestFixture::new("test_stale_quota_is_not_rewritten_by_reads");
    let path = fixture
        .data
        .write_document("quota_usage", r#"{"date":"2026-03-01","count":77}"#);

    assert_eq!(fixture.ledger().status().used, 0);
    let raw = std::fs::read_to_string(path).unwrap();
    assert!(raw.contains("77"));
}

#[test]
fn test_history_file_never_exceeds_cap() {
    let fixture = TestFixture::new("test_history_file_never_exceeds_cap");
    let history = fixture.history();
    for i in 0..(MAX_HISTORY + 5) {
        history.record(&format!("query {i}"), "Jobs", i + 1).unwrap();
    }

    let raw = fixture.data.read_document("search_history").unwrap();
    let on_disk: Vec<serde_json::Value> = serde_json::from_str(&raw).unwrap();
    assert_eq!(on_disk.len(), MAX_HISTORY);
    assert_eq!(on_disk[0]["query"], format!("query {}", MAX_HISTORY + 4));
    assert_eq!(on_disk[MAX_HISTORY - 1]["query"], "query 5");
}

#[test]
fn test_wrong_shaped_history_is_empty_then_replaced() {
    let fixture = TestFixture::new("test_wrong_shaped_history_is_empty_then_replaced");
    fixture
        .data
        .write_document("search_history", r#"{"entries":"unexpected"}"#);

    let history = fixture.history();
    assert!(history.list().is_empty());

    history.record("fresh", "People", 4).unwrap();
    assert_eq!(history.list().len(), 1);
}

#[test]
fn test_history_clear_removes_document() {
    let fixture = TestFixture::new("test_history_clear_removes_document");
    let history = fixture.history();
    history.record("q", "Jobs", 1).unwrap();
    assert!(fixture.data.read_document("search_history").is_some());

    history.clear().unwrap();
    assert!(fixture.data.read_document("search_history").is_none());
    assert!(history.list().is_empty());
    // Clearing twice is fine.
    history.clear().unwrap();
}

#[test]
fn test_saved_delete_out_of_range_leaves_file_alone() {
    let fixture = TestFixture::new("test_saved_delete_out_of_range_leaves_file_alone");
    let saved = fixture.saved();
    saved
        .save("first", "Jobs", vec![ResultItem::new("a", "https://x.co/a")])
        .unwrap();
    saved
        .save("second", "People", vec![ResultItem::new("b", "https://x.co/b")])
        .unwrap();
    let before = fixture.data.read_document("saved_searches").unwrap();

    assert!(saved.delete_at(2).unwrap().is_none());
    assert_eq!(fixture.data.read_document("saved_searches").unwrap(), before);

    let removed = saved.delete_at(0).unwrap().unwrap();
    assert_eq!(removed.name, "first");
    let remaining = saved.list();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].name, "second");
}

#[test]
fn test_data_dir_is_created_on_first_write() {
    let fixture = TestFixture::new("test_data_dir_is_created_on_first_write");
    let nested = fixture.data.path().join("deeper/still");
    let store = xray::storage::FileStore::new(nested.clone());
    let history = xray::history::HistoryStore::new(&store, &fixture.clock);

    history.record("q", "Jobs", 1).unwrap();
    assert!(nested.join("search_history.json").exists());
}
