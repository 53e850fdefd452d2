use std::fs;

use roster_engine::{ensure_store_dir, SlotWriter};
use tempfile::TempDir;

#[test]
fn creates_missing_store_dir() {
    let temp = TempDir::new().unwrap();
    let new_dir = temp.path().join("store");
    assert!(!new_dir.exists());
    ensure_store_dir(&new_dir).unwrap();
    assert!(new_dir.is_dir());
}

#[test]
fn rejects_a_path_that_is_not_a_directory() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("not_a_dir");
    fs::write(&file_path, "x").unwrap();
    assert!(ensure_store_dir(&file_path).is_err());
}

#[test]
fn slot_write_replaces_existing_content_atomically() {
    let temp = TempDir::new().unwrap();
    let writer = SlotWriter::new(temp.path().join("favorites.json"));

    writer.write("[1]").unwrap();
    assert_eq!(fs::read_to_string(writer.path()).unwrap(), "[1]");

    writer.write("[1,2]").unwrap();
    assert_eq!(fs::read_to_string(writer.path()).unwrap(), "[1,2]");
}

#[test]
fn failed_write_leaves_no_slot_behind() {
    let temp = TempDir::new().unwrap();
    let blocked = temp.path().join("blocked");
    fs::write(&blocked, "x").unwrap();

    let writer = SlotWriter::new(blocked.join("favorites.json"));
    assert!(writer.write("[]").is_err());
    assert!(!blocked.join("favorites.json").exists());
}
