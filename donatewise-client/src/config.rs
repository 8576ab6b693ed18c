//! Client configuration

use std::path::PathBuf;

use crate::{ClientError, ClientResult};

pub const ENV_API_URL: &str = "DONATEWISE_API_URL";
pub const ENV_TIMEOUT_SECS: &str = "DONATEWISE_TIMEOUT_SECS";
pub const ENV_TOKEN_PATH: &str = "DONATEWISE_TOKEN_PATH";

const DEFAULT_BASE_URL: &str = "http://localhost:8080";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client configuration for connecting to the backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:8080"); `/api` is appended
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout: u64,

    /// File the bearer token is persisted to; `None` keeps it in memory only
    pub token_path: Option<PathBuf>,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT_SECS,
            token_path: None,
        }
    }

    /// Read configuration from the environment, loading `.env` first.
    ///
    /// Unset variables fall back to defaults; malformed ones are errors.
    pub fn from_env() -> ClientResult<Self> {
        if let Err(e) = dotenv::dotenv() {
            tracing::debug!(error = %e, "no .env file loaded");
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ClientConfig::from_env`] over an arbitrary lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> ClientResult<Self> {
        let base_url = lookup(ENV_API_URL)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ClientError::Config(format!(
                "{} must be an http(s) URL, got {:?}",
                ENV_API_URL, base_url
            )));
        }

        let mut config = Self::new(base_url);
        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                ClientError::Config(format!("{} must be a number of seconds, got {:?}", ENV_TIMEOUT_SECS, raw))
            })?;
            config = config.with_timeout(secs);
        }
        if let Some(path) = lookup(ENV_TOKEN_PATH).filter(|v| !v.trim().is_empty()) {
            config = config.with_token_path(path);
        }
        Ok(config)
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Persist the token to `path`
    pub fn with_token_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.token_path = Some(path.into());
        self
    }

    /// Root of the REST API
    pub fn api_url(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        if base.ends_with("/api") {
            base.to_string()
        } else {
            format!("{}/api", base)
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
