use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use roster_core::CharacterRecord;
use roster_logging::roster_warn;

use crate::persist::{PersistError, SlotWriter};

const SLOT_FILENAME: &str = "favorites.json";

/// Locally persisted favorites, keyed by catalog id and kept in the order
/// they were favorited.
///
/// The durable encoding is a single JSON array of full record snapshots.
/// Every mutation persists the full set before returning; a failed write
/// rolls the in-memory set back so memory and disk never diverge.
#[derive(Debug)]
pub struct FavoritesStore {
    writer: SlotWriter,
    records: Vec<CharacterRecord>,
}

impl FavoritesStore {
    /// Opens the store backed by `{dir}/favorites.json` and primes the
    /// in-memory set. An absent or malformed slot yields an empty set.
    pub fn open(dir: impl Into<PathBuf>) -> Self {
        let path = dir.into().join(SLOT_FILENAME);
        let records = load_slot(&path);
        Self {
            writer: SlotWriter::new(path),
            records,
        }
    }

    /// Opens the store in the platform data directory.
    pub fn open_default() -> Result<Self, PersistError> {
        let dirs = ProjectDirs::from("", "", "roster")
            .ok_or_else(|| PersistError::StoreDir("no platform data directory".into()))?;
        Ok(Self::open(dirs.data_dir()))
    }

    /// Re-reads the slot, discarding unpersisted in-memory state.
    pub fn reload(&mut self) {
        self.records = load_slot(self.writer.path());
    }

    pub fn is_favorite(&self, id: u64) -> bool {
        self.records.iter().any(|record| record.id == id)
    }

    pub fn get(&self, id: u64) -> Option<&CharacterRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    pub fn snapshot(&self) -> &[CharacterRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Inserts a snapshot of `record` and persists the set. No-op if the
    /// id is already a favorite.
    pub fn add(&mut self, record: CharacterRecord) -> Result<(), PersistError> {
        if self.is_favorite(record.id) {
            return Ok(());
        }
        self.records.push(record);
        if let Err(err) = self.persist() {
            self.records.pop();
            return Err(err);
        }
        Ok(())
    }

    /// Removes the entry for `id` if present and persists the set.
    pub fn remove(&mut self, id: u64) -> Result<(), PersistError> {
        let Some(pos) = self.records.iter().position(|record| record.id == id) else {
            return Ok(());
        };
        let removed = self.records.remove(pos);
        if let Err(err) = self.persist() {
            self.records.insert(pos, removed);
            return Err(err);
        }
        Ok(())
    }

    /// Empties the set and persists the empty encoding.
    pub fn clear(&mut self) -> Result<(), PersistError> {
        if self.records.is_empty() {
            return Ok(());
        }
        let previous = std::mem::take(&mut self.records);
        if let Err(err) = self.persist() {
            self.records = previous;
            return Err(err);
        }
        Ok(())
    }

    fn persist(&self) -> Result<(), PersistError> {
        let payload = serde_json::to_string_pretty(&self.records)?;
        self.writer.write(&payload)
    }
}

fn load_slot(path: &Path) -> Vec<CharacterRecord> {
    let payload = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Vec::new();
        }
        Err(err) => {
            roster_warn!("failed to read favorites slot {:?}: {}", path, err);
            return Vec::new();
        }
    };

    match serde_json::from_str(&payload) {
        Ok(records) => records,
        Err(err) => {
            roster_warn!("malformed favorites slot {:?}: {}", path, err);
            Vec::new()
        }
    }
}
