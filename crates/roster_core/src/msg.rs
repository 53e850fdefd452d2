#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Start a fresh page sequence from page 1, discarding current entries.
    RefreshRequested,
    /// User scrolled near the end of the list; request the next page.
    LoadNextRequested,
    /// Catalog client delivered a page for the tagged session.
    PageLoaded {
        session: crate::SessionId,
        page: crate::CatalogPage,
    },
    /// Catalog client failed to deliver a page for the tagged session.
    PageFailed { session: crate::SessionId },
    /// User edited the search query.
    QueryChanged(String),
    /// User picked a different status selector.
    StatusFilterChanged(crate::StatusFilter),
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
