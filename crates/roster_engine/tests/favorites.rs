use std::fs;

use roster_core::{CharacterRecord, CharacterStatus, LocationRef};
use roster_engine::{FavoritesStore, PersistError};
use tempfile::TempDir;

fn record(id: u64, name: &str) -> CharacterRecord {
    CharacterRecord {
        id,
        name: name.to_string(),
        status: CharacterStatus::Alive,
        species: "Human".to_string(),
        gender: "Male".to_string(),
        kind: String::new(),
        origin: LocationRef {
            name: "Earth".to_string(),
            url: None,
        },
        location: LocationRef {
            name: "Earth".to_string(),
            url: None,
        },
        image: format!("https://example.com/avatar/{id}.jpeg"),
        episode_refs: vec!["https://example.com/episode/1".to_string()],
    }
}

#[test]
fn add_then_membership_then_remove() {
    let temp = TempDir::new().unwrap();
    let mut store = FavoritesStore::open(temp.path());
    assert!(store.is_empty());

    store.add(record(7, "Abradolf Lincler")).unwrap();
    assert!(store.is_favorite(7));
    assert_eq!(store.get(7).map(|r| r.name.as_str()), Some("Abradolf Lincler"));

    store.remove(7).unwrap();
    assert!(!store.is_favorite(7));
    assert!(store.is_empty());
}

#[test]
fn add_is_idempotent() {
    let temp = TempDir::new().unwrap();
    let mut store = FavoritesStore::open(temp.path());

    store.add(record(1, "Rick")).unwrap();
    store.add(record(1, "Rick")).unwrap();
    assert_eq!(store.len(), 1);

    // Removing an absent id and clearing twice change nothing further.
    store.remove(42).unwrap();
    assert_eq!(store.len(), 1);
    store.clear().unwrap();
    store.clear().unwrap();
    assert!(store.is_empty());
}

#[test]
fn add_then_remove_restores_the_pre_add_state() {
    let temp = TempDir::new().unwrap();
    let mut store = FavoritesStore::open(temp.path());
    store.add(record(1, "Rick")).unwrap();
    let before: Vec<u64> = store.snapshot().iter().map(|r| r.id).collect();

    store.add(record(2, "Morty")).unwrap();
    store.remove(2).unwrap();
    let after: Vec<u64> = store.snapshot().iter().map(|r| r.id).collect();
    assert_eq!(before, after);
}

#[test]
fn reopening_reconstructs_the_last_persisted_set() {
    let temp = TempDir::new().unwrap();
    {
        let mut store = FavoritesStore::open(temp.path());
        store.add(record(1, "Rick")).unwrap();
        store.add(record(2, "Morty")).unwrap();
        store.add(record(3, "Summer")).unwrap();
        store.remove(2).unwrap();
    }

    // Simulated restart: a fresh store primed from the slot.
    let store = FavoritesStore::open(temp.path());
    let ids: Vec<u64> = store.snapshot().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 3]);
    assert_eq!(
        store.get(1).map(|r| r.image.as_str()),
        Some("https://example.com/avatar/1.jpeg")
    );
}

#[test]
fn clear_then_reopen_yields_an_empty_set() {
    let temp = TempDir::new().unwrap();
    {
        let mut store = FavoritesStore::open(temp.path());
        store.add(record(1, "Rick")).unwrap();
        store.clear().unwrap();
    }
    let store = FavoritesStore::open(temp.path());
    assert!(store.is_empty());
}

#[test]
fn malformed_slot_degrades_to_an_empty_set() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("favorites.json"), "{{ not json").unwrap();

    let mut store = FavoritesStore::open(temp.path());
    assert!(store.is_empty());

    // The store stays usable and the next mutation replaces the slot.
    store.add(record(5, "Jerry")).unwrap();
    let store = FavoritesStore::open(temp.path());
    assert!(store.is_favorite(5));
}

#[test]
fn absent_slot_is_not_an_error() {
    let temp = TempDir::new().unwrap();
    let store = FavoritesStore::open(temp.path().join("never_created"));
    assert!(store.is_empty());
}

#[test]
fn failed_persist_rolls_back_the_mutation() {
    let temp = TempDir::new().unwrap();
    // Point the store at a directory path that is actually a file, so
    // every write fails.
    let blocked = temp.path().join("blocked");
    fs::write(&blocked, "x").unwrap();

    let mut store = FavoritesStore::open(&blocked);
    let err = store.add(record(7, "Abradolf Lincler")).unwrap_err();
    assert!(matches!(err, PersistError::StoreDir(_)));
    assert!(!store.is_favorite(7));
    assert!(store.is_empty());
}

#[test]
fn reload_discards_unpersisted_state() {
    let temp = TempDir::new().unwrap();
    let mut store = FavoritesStore::open(temp.path());
    store.add(record(1, "Rick")).unwrap();

    // Another writer replaces the slot; reload picks it up.
    fs::write(temp.path().join("favorites.json"), "[]").unwrap();
    store.reload();
    assert!(store.is_empty());
}
