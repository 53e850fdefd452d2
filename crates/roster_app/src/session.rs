use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc, Mutex};
use std::thread;
use std::time::Duration;

use roster_core::{
    update, AppState, CharacterRecord, Msg, RosterViewModel, StatusFilter,
};
use roster_engine::{CatalogSettings, FavoritesStore, PersistError};

use crate::effects::EffectRunner;

/// One catalog browsing session: owns the synchronized roster state, the
/// effect runner and the favorites store.
///
/// Presentation drives it through the signal methods and renders from
/// [`view`](Self::view) snapshots. Dropping the session stops its worker
/// threads; late fetch results for a dead session are discarded by the
/// core's stale-response guard.
pub struct RosterSession {
    state: Arc<Mutex<AppState>>,
    favorites: Mutex<FavoritesStore>,
    msg_tx: mpsc::Sender<Msg>,
    shutdown: Arc<AtomicBool>,
}

impl RosterSession {
    pub fn new(settings: CatalogSettings, favorites: FavoritesStore) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel();
        let shutdown = Arc::new(AtomicBool::new(false));
        let runner = EffectRunner::new(settings, msg_tx.clone(), shutdown.clone());
        let state = Arc::new(Mutex::new(AppState::new()));
        spawn_driver(state.clone(), msg_rx, runner, shutdown.clone());

        Self {
            state,
            favorites: Mutex::new(favorites),
            msg_tx,
            shutdown,
        }
    }

    /// Discard the current roster and start again from page 1.
    pub fn refresh(&self) {
        self.send(Msg::RefreshRequested);
    }

    /// Request the next catalog page, if one is available and no fetch is
    /// already in flight.
    pub fn load_next(&self) {
        self.send(Msg::LoadNextRequested);
    }

    pub fn set_query(&self, query: impl Into<String>) {
        self.send(Msg::QueryChanged(query.into()));
    }

    pub fn set_status_filter(&self, status: StatusFilter) {
        self.send(Msg::StatusFilterChanged(status));
    }

    /// Render snapshot of the current synchronized, filtered state.
    pub fn view(&self) -> RosterViewModel {
        self.state.lock().expect("lock session state").view()
    }

    /// Detail lookup against the synchronized roster.
    pub fn character(&self, id: u64) -> Option<CharacterRecord> {
        self.state
            .lock()
            .expect("lock session state")
            .roster()
            .get(id)
            .cloned()
    }

    pub fn is_favorite(&self, id: u64) -> bool {
        self.favorites
            .lock()
            .expect("lock favorites store")
            .is_favorite(id)
    }

    pub fn favorites(&self) -> Vec<CharacterRecord> {
        self.favorites
            .lock()
            .expect("lock favorites store")
            .snapshot()
            .to_vec()
    }

    /// Flips membership for `record` and persists before returning the
    /// new membership. On `Err` nothing changed, so optimistic UI state
    /// must be reverted.
    pub fn toggle_favorite(&self, record: &CharacterRecord) -> Result<bool, PersistError> {
        let mut store = self.favorites.lock().expect("lock favorites store");
        if store.is_favorite(record.id) {
            store.remove(record.id)?;
            Ok(false)
        } else {
            store.add(record.clone())?;
            Ok(true)
        }
    }

    pub fn clear_favorites(&self) -> Result<(), PersistError> {
        self.favorites.lock().expect("lock favorites store").clear()
    }

    fn send(&self, msg: Msg) {
        let _ = self.msg_tx.send(msg);
    }
}

impl Drop for RosterSession {
    fn drop(&mut self) {
        self.shutdown.store(true, Ordering::Relaxed);
    }
}

fn spawn_driver(
    state: Arc<Mutex<AppState>>,
    msg_rx: mpsc::Receiver<Msg>,
    runner: EffectRunner,
    shutdown: Arc<AtomicBool>,
) {
    thread::spawn(move || loop {
        if shutdown.load(Ordering::Relaxed) {
            break;
        }
        match msg_rx.recv_timeout(Duration::from_millis(25)) {
            Ok(msg) => {
                let effects = {
                    let mut guard = state.lock().expect("lock session state");
                    let current = std::mem::take(&mut *guard);
                    let (next, effects) = update(current, msg);
                    *guard = next;
                    effects
                };
                runner.run(effects);
            }
            Err(mpsc::RecvTimeoutError::Timeout) => continue,
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        }
    });
}
