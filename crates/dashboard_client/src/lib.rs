//! Dashboard client: backend HTTP access and command execution.
mod api;
mod client;
mod config;
mod types;

pub use api::{BackendApi, ReqwestBackend};
pub use client::ClientHandle;
pub use config::{BackendConfig, ConfigError, BACKEND_URL_VAR};
pub use types::{ClientError, ClientEvent, FailureKind, JobRecord, RequestId};
