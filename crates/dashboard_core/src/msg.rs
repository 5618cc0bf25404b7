use std::path::PathBuf;

use crate::Job;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User clicked "Fetch New Jobs".
    FetchLatestClicked,
    /// User picked a CSV file for upload.
    FileSelected(PathBuf),
    /// User submitted the upload form.
    UploadSubmitted,
    /// User asked for a backend health probe.
    HealthCheckRequested,
    /// User dismissed the notice line.
    NoticeDismissed,
    /// Client settled the fetch call; errors arrive as display text.
    FetchFinished(Result<Vec<Job>, String>),
    /// Client settled the upload call with the backend's message.
    UploadFinished(Result<String, String>),
    /// Client settled the health probe.
    HealthChecked(Result<(), String>),
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
