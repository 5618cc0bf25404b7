use std::fmt;

use serde::Deserialize;

pub type RequestId = u64;

/// One job posting as deserialized from the backend. Unknown fields the
/// backend may send alongside (location, status, ...) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct JobRecord {
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub scraped_at: String,
}

/// Completion event for a command previously handed to the worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientEvent {
    FetchCompleted {
        request_id: RequestId,
        result: Result<Vec<JobRecord>, ClientError>,
    },
    UploadCompleted {
        request_id: RequestId,
        result: Result<String, ClientError>,
    },
    HealthCompleted {
        request_id: RequestId,
        result: Result<(), ClientError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ClientError {
    pub kind: FailureKind,
    pub message: String,
}

impl ClientError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    Network,
    MalformedBody,
    FileRead,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::MalformedBody => write!(f, "malformed response body"),
            FailureKind::FileRead => write!(f, "file read error"),
        }
    }
}
