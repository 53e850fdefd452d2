//! Pure filtering over a roster snapshot.

use crate::record::{CharacterRecord, CharacterStatus};

/// Status selector for the filter bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Alive,
    Dead,
    Unknown,
}

impl StatusFilter {
    pub fn matches(self, status: CharacterStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Alive => status == CharacterStatus::Alive,
            StatusFilter::Dead => status == CharacterStatus::Dead,
            StatusFilter::Unknown => status == CharacterStatus::Unknown,
        }
    }
}

/// Text query plus status selector.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    /// Case-insensitive substring matched against character names.
    /// Empty matches everything.
    pub query: String,
    pub status: StatusFilter,
}

impl FilterCriteria {
    /// True when the criteria select every record.
    pub fn is_identity(&self) -> bool {
        self.query.is_empty() && self.status == StatusFilter::All
    }
}

/// Returns the ordered subsequence of `records` matching `criteria`.
///
/// Deterministic and side-effect free; recomputed in full on every
/// criteria change, which is fine for a pagination-bounded list.
pub fn apply<'a>(
    records: &'a [CharacterRecord],
    criteria: &FilterCriteria,
) -> Vec<&'a CharacterRecord> {
    let query = criteria.query.to_lowercase();
    records
        .iter()
        .filter(|record| {
            (query.is_empty() || record.name.to_lowercase().contains(&query))
                && criteria.status.matches(record.status)
        })
        .collect()
}
