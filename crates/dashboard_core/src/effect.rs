use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Issue `GET /api/fetch-latest?force=true` against the backend.
    FetchLatest,
    /// Upload the file at `path` via `POST /api/upload-csv`.
    UploadCsv { path: PathBuf },
    /// Probe `GET /api/health`.
    CheckHealth,
}
