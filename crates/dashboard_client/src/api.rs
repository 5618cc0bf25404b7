use std::path::Path;

use dashboard_logging::dash_debug;
use reqwest::multipart;
use serde::Deserialize;

use crate::{BackendConfig, ClientError, FailureKind, JobRecord};

#[derive(Debug, Default, Deserialize)]
struct FetchLatestBody {
    // A missing `jobs` key means "no jobs", not a malformed body.
    #[serde(default)]
    jobs: Vec<JobRecord>,
}

/// The backend's HTTP surface, behind a trait so the app and tests can
/// substitute implementations.
#[async_trait::async_trait]
pub trait BackendApi: Send + Sync {
    /// `GET /api/fetch-latest?force=true` — returns the current job list.
    async fn fetch_latest(&self) -> Result<Vec<JobRecord>, ClientError>;
    /// `POST /api/upload-csv` — uploads the file at `path` as multipart
    /// field `file`; returns the backend's message.
    async fn upload_csv(&self, path: &Path) -> Result<String, ClientError>;
    /// `GET /api/health` — succeeds on any 2xx response.
    async fn health(&self) -> Result<(), ClientError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestBackend {
    config: BackendConfig,
    client: reqwest::Client,
}

impl ReqwestBackend {
    pub fn new(config: BackendConfig) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()
            .map_err(|err| ClientError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { config, client })
    }

    fn endpoint(&self, path: &str) -> Result<reqwest::Url, ClientError> {
        self.config
            .base_url
            .join(path)
            .map_err(|err| ClientError::new(FailureKind::InvalidUrl, err.to_string()))
    }
}

#[async_trait::async_trait]
impl BackendApi for ReqwestBackend {
    async fn fetch_latest(&self) -> Result<Vec<JobRecord>, ClientError> {
        let url = self.endpoint("/api/fetch-latest")?;
        let response = self
            .client
            .get(url)
            .query(&[("force", "true")])
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        dash_debug!("fetch-latest responded with {}", status);
        if !status.is_success() {
            return Err(ClientError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let text = response.text().await.map_err(map_reqwest_error)?;
        let body: FetchLatestBody = serde_json::from_str(&text)
            .map_err(|err| ClientError::new(FailureKind::MalformedBody, err.to_string()))?;
        Ok(body.jobs)
    }

    async fn upload_csv(&self, path: &Path) -> Result<String, ClientError> {
        let url = self.endpoint("/api/upload-csv")?;
        let bytes = tokio::fs::read(path).await.map_err(|err| {
            ClientError::new(FailureKind::FileRead, format!("{}: {err}", path.display()))
        })?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload.csv".to_string());
        dash_debug!("uploading {} ({} bytes)", file_name, bytes.len());

        let part = multipart::Part::bytes(bytes)
            .file_name(file_name)
            .mime_str("text/csv")
            .map_err(|err| ClientError::new(FailureKind::Network, err.to_string()))?;
        let form = multipart::Form::new().part("file", part);

        let response = self
            .client
            .post(url)
            .multipart(form)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let text = response.text().await.map_err(map_reqwest_error)?;
        let value: serde_json::Value = serde_json::from_str(&text)
            .map_err(|err| ClientError::new(FailureKind::MalformedBody, err.to_string()))?;
        // The backend answers `{"message": ...}`; anything else is shown
        // verbatim as serialized JSON.
        Ok(match value.get("message").and_then(|message| message.as_str()) {
            Some(message) => message.to_string(),
            None => value.to_string(),
        })
    }

    async fn health(&self) -> Result<(), ClientError> {
        let url = self.endpoint("/api/health")?;
        let response = self.client.get(url).send().await.map_err(map_reqwest_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }
        Ok(())
    }
}

fn map_reqwest_error(err: reqwest::Error) -> ClientError {
    if err.is_timeout() {
        return ClientError::new(FailureKind::Timeout, err.to_string());
    }
    ClientError::new(FailureKind::Network, err.to_string())
}
