#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Ask the catalog client for one page. `session` tags the request so
    /// a result arriving after a refresh can be discarded as stale.
    FetchPage { session: crate::SessionId, page: u32 },
}
