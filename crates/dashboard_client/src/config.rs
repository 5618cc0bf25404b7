use std::time::Duration;

use url::Url;

/// Environment variable naming the backend base URL.
pub const BACKEND_URL_VAR: &str = "DASHBOARD_BACKEND_URL";

/// Backend endpoint configuration. The base URL is required; there is no
/// placeholder fallback, a missing value is a startup failure.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub base_url: Url,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} is not set; point it at the backend, e.g. {var}=https://jobs.example.com")]
    MissingBackendUrl { var: &'static str },
    #[error("invalid backend URL {value:?}: {source}")]
    InvalidBackendUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },
}

impl BackendConfig {
    /// Reads the backend base URL from `DASHBOARD_BACKEND_URL`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_var(BACKEND_URL_VAR)
    }

    pub fn from_env_var(var: &'static str) -> Result<Self, ConfigError> {
        match std::env::var(var) {
            Ok(value) if !value.trim().is_empty() => Self::from_base_url(&value),
            _ => Err(ConfigError::MissingBackendUrl { var }),
        }
    }

    pub fn from_base_url(value: &str) -> Result<Self, ConfigError> {
        let base_url = Url::parse(value.trim()).map_err(|source| ConfigError::InvalidBackendUrl {
            value: value.to_string(),
            source,
        })?;
        Ok(Self {
            base_url,
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        })
    }
}
