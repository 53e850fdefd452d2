use crate::record::{CharacterRecord, CharacterStatus};
use crate::state::MergeStats;

/// Snapshot handed to presentation: the filtered rows plus the flags the
/// list screen needs to drive pagination and the retry affordance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterViewModel {
    pub rows: Vec<CharacterRow>,
    /// Unfiltered roster size.
    pub total: usize,
    pub has_more: bool,
    pub loading: bool,
    pub fetch_failed: bool,
    pub last_merge: Option<MergeStats>,
    /// Bumped on every view-relevant state change; lets a renderer skip
    /// redraws when nothing moved.
    pub revision: u64,
}

/// Display fields for one list row / detail card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterRow {
    pub id: u64,
    pub name: String,
    pub status: CharacterStatus,
    pub species: String,
    pub location: String,
    pub image: String,
    pub episode_count: usize,
}

impl From<&CharacterRecord> for CharacterRow {
    fn from(record: &CharacterRecord) -> Self {
        Self {
            id: record.id,
            name: record.name.clone(),
            status: record.status,
            species: record.species.clone(),
            location: record.location.name.clone(),
            image: record.image.clone(),
            episode_count: record.episode_refs.len(),
        }
    }
}

impl Default for RosterViewModel {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            total: 0,
            has_more: true,
            loading: false,
            fetch_failed: false,
            last_merge: None,
            revision: 0,
        }
    }
}
