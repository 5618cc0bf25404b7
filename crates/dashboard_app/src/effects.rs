use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use dashboard_client::{BackendConfig, ClientEvent, ClientHandle, JobRecord, ReqwestBackend};
use dashboard_core::{Effect, Job, Msg};
use dashboard_logging::{dash_info, dash_warn};

use crate::app::Event;

/// Executes core effects against the backend client and pumps completion
/// events back into the app loop as messages.
pub struct EffectRunner {
    client: ClientHandle,
    next_request_id: AtomicU64,
}

impl EffectRunner {
    pub fn new(config: BackendConfig, event_tx: mpsc::Sender<Event>) -> anyhow::Result<Self> {
        let backend = ReqwestBackend::new(config)?;
        let client = ClientHandle::new(Arc::new(backend));
        let runner = Self {
            client,
            next_request_id: AtomicU64::new(1),
        };
        runner.spawn_event_loop(event_tx);
        Ok(runner)
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            let request_id = self.next_request_id.fetch_add(1, Ordering::Relaxed);
            match effect {
                Effect::FetchLatest => {
                    dash_info!("request {}: fetch-latest", request_id);
                    self.client.fetch_latest(request_id);
                }
                Effect::UploadCsv { path } => {
                    dash_info!("request {}: upload {}", request_id, path.display());
                    self.client.upload_csv(request_id, path);
                }
                Effect::CheckHealth => {
                    self.client.check_health(request_id);
                }
            }
        }
    }

    fn spawn_event_loop(&self, event_tx: mpsc::Sender<Event>) {
        let client = self.client.clone();
        thread::spawn(move || loop {
            if let Some(event) = client.try_recv() {
                if event_tx.send(Event::Msg(map_event(event))).is_err() {
                    break;
                }
            } else {
                thread::sleep(Duration::from_millis(20));
            }
        });
    }
}

fn map_event(event: ClientEvent) -> Msg {
    match event {
        ClientEvent::FetchCompleted { request_id, result } => match result {
            Ok(records) => {
                dash_info!("request {}: {} jobs", request_id, records.len());
                Msg::FetchFinished(Ok(records.into_iter().map(map_job).collect()))
            }
            Err(err) => {
                dash_warn!("request {} failed: {}", request_id, err);
                Msg::FetchFinished(Err(err.to_string()))
            }
        },
        ClientEvent::UploadCompleted { request_id, result } => match result {
            Ok(message) => {
                dash_info!("request {}: upload accepted", request_id);
                Msg::UploadFinished(Ok(message))
            }
            Err(err) => {
                dash_warn!("request {} failed: {}", request_id, err);
                Msg::UploadFinished(Err(err.to_string()))
            }
        },
        ClientEvent::HealthCompleted {
            request_id: _,
            result,
        } => Msg::HealthChecked(result.map_err(|err| err.to_string())),
    }
}

fn map_job(record: JobRecord) -> Job {
    Job {
        company: record.company,
        title: record.title,
        url: record.url,
        scraped_at: record.scraped_at,
    }
}
