use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use roster_core::{Effect, Msg};
use roster_engine::{CatalogSettings, EngineEvent, EngineHandle};
use roster_logging::{roster_info, roster_warn};

/// Executes core effects against the catalog engine and pumps engine
/// events back into the state machine as messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(
        settings: CatalogSettings,
        msg_tx: mpsc::Sender<Msg>,
        shutdown: Arc<AtomicBool>,
    ) -> Self {
        let engine = EngineHandle::new(settings);
        let runner = Self { engine };
        runner.spawn_event_pump(msg_tx, shutdown);
        runner
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchPage { session, page } => {
                    roster_info!("FetchPage session={} page={}", session, page);
                    self.engine.fetch_page(session, page);
                }
            }
        }
    }

    fn spawn_event_pump(&self, msg_tx: mpsc::Sender<Msg>, shutdown: Arc<AtomicBool>) {
        let engine = self.engine.clone();
        thread::spawn(move || loop {
            if shutdown.load(Ordering::Relaxed) {
                break;
            }
            match engine.try_recv() {
                Some(EngineEvent::PageFetched {
                    session,
                    page_no,
                    result,
                }) => {
                    let msg = match result {
                        Ok(page) => Msg::PageLoaded { session, page },
                        Err(err) => {
                            roster_warn!("page {} fetch failed: {}", page_no, err);
                            Msg::PageFailed { session }
                        }
                    };
                    if msg_tx.send(msg).is_err() {
                        break;
                    }
                }
                None => thread::sleep(Duration::from_millis(20)),
            }
        });
    }
}
