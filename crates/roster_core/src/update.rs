use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::RefreshRequested => {
            let session = state.begin_session();
            vec![Effect::FetchPage { session, page: 1 }]
        }
        Msg::LoadNextRequested => {
            // One in-flight fetch at a time; a frozen has-more flag stops
            // pagination until the user refreshes.
            if state.has_more() && !state.loading() {
                let (session, page) = state.begin_page_fetch();
                vec![Effect::FetchPage { session, page }]
            } else {
                Vec::new()
            }
        }
        Msg::PageLoaded { session, page } => {
            if session == state.session() {
                state.apply_page(&page);
            }
            Vec::new()
        }
        Msg::PageFailed { session } => {
            if session == state.session() {
                state.apply_fetch_failure();
            }
            Vec::new()
        }
        Msg::QueryChanged(query) => {
            state.set_query(query);
            Vec::new()
        }
        Msg::StatusFilterChanged(status) => {
            state.set_status_filter(status);
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
