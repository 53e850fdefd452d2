use std::collections::HashSet;

use crate::record::{CatalogPage, CharacterRecord};

/// Insertion-ordered, de-duplicated collection of fetched characters.
///
/// Successive page merges append only records whose id has not been seen;
/// display order is the order in which ids first arrived.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Roster {
    records: Vec<CharacterRecord>,
    ids: HashSet<u64>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears all entries; used when starting a fresh page sequence.
    pub fn reset(&mut self) {
        self.records.clear();
        self.ids.clear();
    }

    /// Appends records from `page` whose id is not already present,
    /// preserving fetch order. Returns the number of records added;
    /// 0 for an empty or fully-duplicate page.
    pub fn merge_page(&mut self, page: &CatalogPage) -> usize {
        let mut added = 0;
        for record in &page.records {
            if self.ids.insert(record.id) {
                self.records.push(record.clone());
                added += 1;
            }
        }
        added
    }

    /// Read-only ordered view of the current entries.
    pub fn snapshot(&self) -> &[CharacterRecord] {
        &self.records
    }

    pub fn get(&self, id: u64) -> Option<&CharacterRecord> {
        if !self.ids.contains(&id) {
            return None;
        }
        self.records.iter().find(|record| record.id == id)
    }

    pub fn contains(&self, id: u64) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
