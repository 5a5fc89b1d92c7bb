use std::fs;

use chrono::{Duration, TimeZone, Utc};
use tempfile::TempDir;

use snaplink::models::{ClickEvent, LinkRecord};
use snaplink::store::LinkStore;

fn sample_record(code: &str) -> LinkRecord {
    let created_at = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
    LinkRecord {
        id: format!("{}_{}", code, created_at.timestamp_millis()),
        original_url: format!("https://example.com/{}", code),
        short_code: code.to_string(),
        created_at,
        expires_at: created_at + Duration::minutes(60),
        click_count: 1,
        click_history: vec![ClickEvent {
            id: "click_1".to_string(),
            timestamp: created_at + Duration::minutes(1),
            client_agent: "test-agent".to_string(),
            referrer: "direct".to_string(),
        }],
        created_by: "form_1".to_string(),
    }
}

#[test]
fn test_missing_file_starts_empty_and_creates_the_slot() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("links.json");

    let store = LinkStore::open(&path).unwrap();
    assert!(store.is_empty());
    assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
}

#[test]
fn test_malformed_content_is_treated_as_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("links.json");

    for content in ["not json at all", "{\"wrong\": \"shape\"}", "[{\"id\": 1}]"] {
        fs::write(&path, content).unwrap();
        let store = LinkStore::open(&path).unwrap();
        assert!(store.is_empty(), "content={:?}", content);
    }
}

#[test]
fn test_append_persists_the_full_sequence() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("links.json");

    let mut store = LinkStore::open(&path).unwrap();
    store.append(sample_record("aaa")).unwrap();
    store.append(sample_record("bbb")).unwrap();

    let reopened = LinkStore::open(&path).unwrap();
    assert_eq!(reopened.len(), 2);
    assert_eq!(reopened.records(), store.records());
    // Insertion order survives the round trip
    assert_eq!(reopened.records()[0].short_code, "aaa");
    assert_eq!(reopened.records()[1].short_code, "bbb");
}

#[test]
fn test_round_trip_preserves_click_history() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("links.json");

    let mut store = LinkStore::open(&path).unwrap();
    let record = sample_record("aaa");
    store.append(record.clone()).unwrap();

    let reopened = LinkStore::open(&path).unwrap();
    assert_eq!(reopened.find("aaa"), Some(&record));
}

#[test]
fn test_mutate_one_persists_the_change() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("links.json");

    let mut store = LinkStore::open(&path).unwrap();
    store.append(sample_record("aaa")).unwrap();

    let matched = store
        .mutate_one("aaa", |r| {
            r.click_count += 1;
        })
        .unwrap();
    assert!(matched);

    let reopened = LinkStore::open(&path).unwrap();
    assert_eq!(reopened.find("aaa").unwrap().click_count, 2);
}

#[test]
fn test_mutate_one_unknown_code_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("links.json");

    let mut store = LinkStore::open(&path).unwrap();
    store.append(sample_record("aaa")).unwrap();
    let on_disk = fs::read_to_string(&path).unwrap();

    let matched = store
        .mutate_one("missing", |r| {
            r.click_count += 1;
        })
        .unwrap();
    assert!(!matched);
    assert_eq!(fs::read_to_string(&path).unwrap(), on_disk);
}

#[test]
fn test_find_is_exact_match() {
    let dir = TempDir::new().unwrap();
    let mut store = LinkStore::open(dir.path().join("links.json")).unwrap();
    store.append(sample_record("my-link")).unwrap();

    assert!(store.contains_code("my-link"));
    assert!(!store.contains_code("My-Link"));
    assert!(!store.contains_code("my-lin"));
}
