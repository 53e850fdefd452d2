use std::fmt;

use crate::filter::{self, FilterCriteria, StatusFilter};
use crate::record::CatalogPage;
use crate::roster::Roster;
use crate::view_model::{CharacterRow, RosterViewModel};

/// Generation counter for the stale-response guard. Bumped on every
/// refresh; fetch results tagged with an older session are discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct SessionId(u64);

impl SessionId {
    fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Outcome of the most recent page merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeStats {
    pub added: usize,
    pub skipped: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    session: SessionId,
    roster: Roster,
    criteria: FilterCriteria,
    next_page: u32,
    has_more: bool,
    loading: bool,
    fetch_failed: bool,
    last_merge: Option<MergeStats>,
    revision: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            session: SessionId::default(),
            roster: Roster::new(),
            criteria: FilterCriteria::default(),
            next_page: 1,
            has_more: true,
            loading: false,
            fetch_failed: false,
            last_merge: None,
            revision: 0,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> SessionId {
        self.session
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Most recently observed has-more flag. Frozen to false after a
    /// fetch failure so pagination stops until the user refreshes.
    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn fetch_failed(&self) -> bool {
        self.fetch_failed
    }

    pub fn view(&self) -> RosterViewModel {
        let rows = filter::apply(self.roster.snapshot(), &self.criteria)
            .into_iter()
            .map(CharacterRow::from)
            .collect();
        RosterViewModel {
            rows,
            total: self.roster.len(),
            has_more: self.has_more,
            loading: self.loading,
            fetch_failed: self.fetch_failed,
            last_merge: self.last_merge,
            revision: self.revision,
        }
    }

    /// Starts a new session: bumps the generation, clears the roster and
    /// rewinds pagination. Returns the new session id for the fetch effect.
    pub(crate) fn begin_session(&mut self) -> SessionId {
        self.session = self.session.next();
        self.roster.reset();
        self.next_page = 1;
        self.has_more = true;
        self.loading = true;
        self.fetch_failed = false;
        self.last_merge = None;
        self.touch();
        self.session
    }

    /// Marks a next-page fetch as in flight and returns its tag.
    pub(crate) fn begin_page_fetch(&mut self) -> (SessionId, u32) {
        self.loading = true;
        self.touch();
        (self.session, self.next_page)
    }

    pub(crate) fn apply_page(&mut self, page: &CatalogPage) -> MergeStats {
        let added = self.roster.merge_page(page);
        let stats = MergeStats {
            added,
            skipped: page.records.len() - added,
        };
        self.last_merge = Some(stats);
        self.next_page += 1;
        self.has_more = page.has_next;
        self.loading = false;
        self.touch();
        stats
    }

    pub(crate) fn apply_fetch_failure(&mut self) {
        self.has_more = false;
        self.loading = false;
        self.fetch_failed = true;
        self.touch();
    }

    pub(crate) fn set_query(&mut self, query: String) {
        if self.criteria.query != query {
            self.criteria.query = query;
            self.touch();
        }
    }

    pub(crate) fn set_status_filter(&mut self, status: StatusFilter) {
        if self.criteria.status != status {
            self.criteria.status = status;
            self.touch();
        }
    }

    fn touch(&mut self) {
        self.revision += 1;
    }
}
