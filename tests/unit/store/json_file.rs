use chrono::{TimeZone, Utc};

use super::*;
use crate::form::values::{FormValues, TicketType};

fn record(name: &str) -> TicketRecord {
    let values = FormValues {
        ticket_type: Some(TicketType::Regular),
        attendee_name: name.to_string(),
        attendee_email: format!("{name}@example.com"),
        ..FormValues::default()
    };
    TicketRecord::materialize(&values, Utc.with_ymd_and_hms(2025, 3, 15, 0, 0, 0).unwrap())
        .unwrap()
}

#[test]
fn missing_file_reads_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("tickets.json"));
    assert!(store.records().unwrap().is_empty());
}

#[test]
fn append_creates_parent_dirs_and_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("tickets.json");
    let mut store = JsonFileStore::new(&path);
    store.append(&record("ada")).unwrap();

    assert!(path.is_file());
    assert!(!path.with_extension("json.tmp").exists());
    let recs = store.records().unwrap();
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].values.attendee_email, "ada@example.com");
}

#[test]
fn existing_entries_survive_byte_for_byte() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tickets.json");
    let first = r#"{"legacy":   "entry","n":[1, 2]}"#;
    std::fs::write(&path, format!("[{first}]")).unwrap();

    let mut store = JsonFileStore::new(&path);
    store.append(&record("bob")).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.starts_with(&format!("[{first},")));
    assert_eq!(store.records().unwrap().len(), 1);
}

#[test]
fn corrupt_file_is_treated_as_empty_and_replaced() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tickets.json");
    std::fs::write(&path, "{{{ definitely not json").unwrap();

    let mut store = JsonFileStore::new(&path);
    assert!(store.records().unwrap().is_empty());
    store.append(&record("eve")).unwrap();

    let parsed: Vec<serde_json::Value> =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(parsed.len(), 1);
}

#[test]
fn non_utf8_file_is_treated_as_empty_and_replaced() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tickets.json");
    std::fs::write(&path, [0xff, 0xfe, 0x00, 0x80]).unwrap();

    let mut store = JsonFileStore::new(&path);
    assert!(store.records().unwrap().is_empty());
    store.append(&record("mallory")).unwrap();

    let recs = store.records().unwrap();
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].values.attendee_name, "mallory");
}

#[test]
fn failed_replace_leaves_no_temp_file() {
    let dir = tempfile::tempdir().unwrap();
    // A directory at the slot path makes the final rename fail.
    let path = dir.path().join("tickets.json");
    std::fs::create_dir(&path).unwrap();
    std::fs::write(path.join("keep"), b"x").unwrap();

    let store = JsonFileStore::new(&path);
    let entry = encode_entry(&record("ada")).unwrap();
    assert!(store.write_entries(&[entry]).is_err());
    assert!(!path.with_extension("json.tmp").exists());
    assert!(path.join("keep").is_file());
}
