//! Storage behaviour against hand-written records.

use diarybot::diary_core::{Emotion, Owner};
use diarybot::diary_io::EntryStore;
use diarybot::errors::{AppError, RecordFault};
use std::fs;
use tempfile::tempdir;

fn record_json(id: &str, title: &str, created_at: &str, score: f64) -> String {
    serde_json::json!({
        "id": id,
        "title": title,
        "content": "Some content",
        "created_at": created_at,
        "emotion": "positive",
        "sentiment_score": score,
        "attachments": []
    })
    .to_string()
}

#[test]
fn test_one_malformed_record_among_valid_ones() {
    let dir = tempdir().unwrap();
    let owner = Owner::new("alice").unwrap();

    for day in 1..=4 {
        let id = format!("2024010{}_100000", day);
        let created_at = format!("2024-01-0{}T10:00:00+00:00", day);
        fs::write(
            dir.path().join(format!("alice_{}.json", id)),
            record_json(&id, &format!("Day {}", day), &created_at, 0.5),
        )
        .unwrap();
    }
    fs::write(dir.path().join("alice_20240105_100000.json"), "{ not json").unwrap();

    let store = EntryStore::open(dir.path()).unwrap();
    let listing = store.list(&owner);

    assert_eq!(listing.entries.len(), 4);
    assert_eq!(listing.skipped.len(), 1);
    assert!(listing.skipped[0].to_string().contains("alice_20240105_100000"));
    let titles: Vec<_> = listing.entries.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, vec!["Day 4", "Day 3", "Day 2", "Day 1"]);
}

#[test]
fn test_legacy_record_with_date_key_loads() {
    let dir = tempdir().unwrap();
    let owner = Owner::new("alice").unwrap();

    let legacy = serde_json::json!({
        "id": "20230704_201500",
        "title": "Fireworks",
        "content": "Watched them from the roof",
        "date": "2023-07-04T20:15:00.123456",
        "emotion": "positive",
        "sentiment_score": 0.4
    });
    fs::write(
        dir.path().join("alice_20230704_201500.json"),
        serde_json::to_string_pretty(&legacy).unwrap(),
    )
    .unwrap();

    let store = EntryStore::open(dir.path()).unwrap();
    let entry = store
        .get(&owner, "20230704_201500")
        .unwrap()
        .expect("legacy record found");

    assert_eq!(entry.title, "Fireworks");
    assert_eq!(entry.emotion, Emotion::Positive);
    assert!(entry.attachments.is_empty());
    assert_eq!(entry.display_date(), "2023-07-04 20:15");
}

#[test]
fn test_out_of_range_score_is_skipped_by_list_and_reported_by_get() {
    let dir = tempdir().unwrap();
    let owner = Owner::new("alice").unwrap();

    fs::write(
        dir.path().join("alice_20240101_100000.json"),
        record_json("20240101_100000", "Broken", "2024-01-01T10:00:00+00:00", 3.5),
    )
    .unwrap();

    let store = EntryStore::open(dir.path()).unwrap();
    assert!(store.list(&owner).entries.is_empty());

    match store.get(&owner, "20240101_100000") {
        Err(AppError::Record(notice)) => {
            assert!(matches!(notice.fault, RecordFault::Invalid(_)))
        }
        other => panic!("Expected Record error, got {:?}", other),
    }
}

#[test]
fn test_other_files_in_directory_are_ignored() {
    let dir = tempdir().unwrap();
    let owner = Owner::new("alice").unwrap();

    fs::write(dir.path().join("notes.txt"), "not a record").unwrap();
    fs::write(dir.path().join("alice_readme.json"), "{}").unwrap();
    fs::create_dir(dir.path().join("alice_20240101_100000.json.d")).unwrap();

    let store = EntryStore::open(dir.path()).unwrap();
    let listing = store.list(&owner);
    assert!(listing.entries.is_empty());
    assert!(listing.skipped.is_empty());
}
