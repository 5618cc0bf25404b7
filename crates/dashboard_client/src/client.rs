use std::path::PathBuf;
use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use crate::{BackendApi, ClientEvent, RequestId};

enum ClientCommand {
    FetchLatest { request_id: RequestId },
    UploadCsv { request_id: RequestId, path: PathBuf },
    CheckHealth { request_id: RequestId },
}

/// Handle to the client worker thread. Commands go in over a channel and
/// `ClientEvent`s come back out; clones share the same worker and event
/// queue. Each command runs as its own task, so a fetch and an upload may
/// genuinely overlap in flight.
#[derive(Clone)]
pub struct ClientHandle {
    cmd_tx: mpsc::Sender<ClientCommand>,
    event_rx: Arc<Mutex<mpsc::Receiver<ClientEvent>>>,
}

impl ClientHandle {
    pub fn new(api: Arc<dyn BackendApi>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let api = api.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(api, command, event_tx).await;
                });
            }
        });

        Self {
            cmd_tx,
            event_rx: Arc::new(Mutex::new(event_rx)),
        }
    }

    pub fn fetch_latest(&self, request_id: RequestId) {
        let _ = self.cmd_tx.send(ClientCommand::FetchLatest { request_id });
    }

    pub fn upload_csv(&self, request_id: RequestId, path: PathBuf) {
        let _ = self
            .cmd_tx
            .send(ClientCommand::UploadCsv { request_id, path });
    }

    pub fn check_health(&self, request_id: RequestId) {
        let _ = self.cmd_tx.send(ClientCommand::CheckHealth { request_id });
    }

    pub fn try_recv(&self) -> Option<ClientEvent> {
        self.event_rx.lock().ok()?.try_recv().ok()
    }
}

async fn handle_command(
    api: Arc<dyn BackendApi>,
    command: ClientCommand,
    event_tx: mpsc::Sender<ClientEvent>,
) {
    let event = match command {
        ClientCommand::FetchLatest { request_id } => ClientEvent::FetchCompleted {
            request_id,
            result: api.fetch_latest().await,
        },
        ClientCommand::UploadCsv { request_id, path } => ClientEvent::UploadCompleted {
            request_id,
            result: api.upload_csv(&path).await,
        },
        ClientCommand::CheckHealth { request_id } => ClientEvent::HealthCompleted {
            request_id,
            result: api.health().await,
        },
    };
    let _ = event_tx.send(event);
}
