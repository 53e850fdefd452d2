use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use roster_core::SessionId;

use crate::client::{CatalogFetcher, CatalogSettings, ReqwestCatalogClient};
use crate::types::EngineEvent;

enum EngineCommand {
    FetchPage { session: SessionId, page: u32 },
}

/// Handle to the catalog worker: a dedicated thread owning a tokio runtime.
/// Dropping every clone closes the command channel, which stops the worker
/// and cancels any in-flight fetches.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: Arc<Mutex<mpsc::Receiver<EngineEvent>>>,
}

impl EngineHandle {
    pub fn new(settings: CatalogSettings) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let fetcher = Arc::new(ReqwestCatalogClient::new(settings));

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let fetcher = fetcher.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(fetcher.as_ref(), command, event_tx).await;
                });
            }
        });

        Self {
            cmd_tx,
            event_rx: Arc::new(Mutex::new(event_rx)),
        }
    }

    pub fn fetch_page(&self, session: SessionId, page: u32) {
        let _ = self.cmd_tx.send(EngineCommand::FetchPage { session, page });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.lock().ok()?.try_recv().ok()
    }
}

async fn handle_command(
    fetcher: &dyn CatalogFetcher,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::FetchPage { session, page } => {
            let result = fetcher.fetch_page(page).await;
            let _ = event_tx.send(EngineEvent::PageFetched {
                session,
                page_no: page,
                result,
            });
        }
    }
}
