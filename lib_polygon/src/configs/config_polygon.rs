//! # Polygon Client Configuration
//!
//! Settings are layered: built-in defaults, then an optional JSON file
//! (camelCase keys), then environment variables and command line flags.
//! A `.env` file in the working directory is loaded before the environment
//! is read.

use clap::Parser;
use serde::Deserialize;
use std::ffi::OsString;
use std::fmt;
use std::fs;
use std::path::PathBuf;
use thiserror::Error;
use tracing::info;

/// Config file read when `--config-path` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "polygon.conf";

/// Errors raised while assembling a [`PolygonConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Cli(#[from] clap::Error),

    #[error("no API key configured (set POLYGON_API_KEY, --api-key or apiKey in the config file)")]
    MissingApiKey,
}

#[derive(Parser, Deserialize, Clone, Default, PartialEq, Eq)]
#[command(about = "Polygon stock market REST client", version)]
#[serde(rename_all = "camelCase")]
pub struct PolygonConfig {
    #[arg(long, env = "POLYGON_API_KEY", help = "API key sent as a bearer token.")]
    pub api_key: Option<String>,

    #[arg(long, env = "POLYGON_CONFIG_PATH", help = "Path to the JSON configuration file.")]
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    #[arg(long, env = "POLYGON_BASE_URL", help = "Base URL of the REST API.")]
    pub base_url: Option<String>,

    #[arg(long, env = "POLYGON_MAX_RETRIES", help = "Retries for transient HTTP failures.")]
    pub max_retries: Option<u32>,

    #[arg(long, env = "POLYGON_TIMEOUT_SECS", help = "Per-request timeout in seconds.")]
    pub timeout_secs: Option<u64>,

    #[arg(long, env = "POLYGON_LOG_DIR", help = "Directory for log files.")]
    pub log_dir: Option<PathBuf>,

    #[arg(long, env = "POLYGON_LOG_LEVEL", help = "Logging level (trace, debug, info, warn, error, fatal).")]
    pub log_level: Option<String>,
}

impl PolygonConfig {
    /// Built-in defaults. No API key.
    pub fn defaults() -> Self {
        Self {
            base_url: Some("https://api.polygon.io/".to_string()),
            max_retries: Some(3),
            timeout_secs: Some(30),
            log_level: Some("info".to_string()),
            ..Default::default()
        }
    }

    // 'other' overrides 'self' for Some values
    fn merge(self, other: PolygonConfig) -> PolygonConfig {
        PolygonConfig {
            api_key: other.api_key.or(self.api_key),
            config_path: other.config_path.or(self.config_path),
            base_url: other.base_url.or(self.base_url),
            max_retries: other.max_retries.or(self.max_retries),
            timeout_secs: other.timeout_secs.or(self.timeout_secs),
            log_dir: other.log_dir.or(self.log_dir),
            log_level: other.log_level.or(self.log_level),
        }
    }

    /// The API key; only `None` on configs that were not produced by the loaders.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }
}

// Keeps the API key out of logs.
impl fmt::Debug for PolygonConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PolygonConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("config_path", &self.config_path)
            .field("base_url", &self.base_url)
            .field("max_retries", &self.max_retries)
            .field("timeout_secs", &self.timeout_secs)
            .field("log_dir", &self.log_dir)
            .field("log_level", &self.log_level)
            .finish()
    }
}

impl fmt::Display for PolygonConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PolygonConfig
    Base URL: {},
    Max retries: {},
    Timeout (s): {},
    Log dir: {},
    Log level: {}
",
            self.base_url.as_deref().unwrap_or("-"),
            self.max_retries.map_or_else(|| "-".to_string(), |v| v.to_string()),
            self.timeout_secs.map_or_else(|| "-".to_string(), |v| v.to_string()),
            self.log_dir.as_ref().map_or_else(|| "-".to_string(), |p| p.display().to_string()),
            self.log_level.as_deref().unwrap_or("-"),
        )
    }
}

/// Loads `.env`, then builds the config from the process arguments.
pub fn load_config() -> Result<PolygonConfig, ConfigError> {
    // A missing .env file is normal.
    let _ = dotenvy::dotenv();
    load_config_from(std::env::args_os())
}

/// Builds the config from an explicit argument list (first item is the program name).
pub fn load_config_from<I, T>(args: I) -> Result<PolygonConfig, ConfigError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    // clap already folds environment variables into the parsed values.
    let cli = PolygonConfig::try_parse_from(args)?;

    let config_file_path = cli
        .config_path
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

    let mut current = PolygonConfig::defaults();

    if config_file_path.exists() {
        let raw = fs::read_to_string(&config_file_path).map_err(|source| ConfigError::Io {
            path: config_file_path.clone(),
            source,
        })?;
        let file_config: PolygonConfig = serde_json::from_str(&raw).map_err(|source| ConfigError::Json {
            path: config_file_path.clone(),
            source,
        })?;
        current = current.merge(file_config);
    } else {
        info!(path = %config_file_path.display(), "config file not found, using defaults and environment");
    }

    current = current.merge(cli);

    let has_key = current.api_key.as_deref().is_some_and(|key| !key.trim().is_empty());
    if has_key {
        Ok(current)
    } else {
        Err(ConfigError::MissingApiKey)
    }
}

#[cfg(feature = "retrieve")]
mod client_from_config {
    use super::PolygonConfig;
    use crate::markets::polygon::apicall::{ApiCallPolygon, RequestError};
    use crate::retrieve::ky_http::{ApiClient, ClientPolicy};
    use std::sync::Arc;
    use std::time::Duration;

    impl PolygonConfig {
        /// Retry and timeout settings, falling back to the client defaults.
        pub fn client_policy(&self) -> ClientPolicy {
            let default = ClientPolicy::default();
            ClientPolicy {
                max_retries: self.max_retries.unwrap_or(default.max_retries),
                timeout: self.timeout_secs.map(Duration::from_secs).unwrap_or(default.timeout),
            }
        }
    }

    impl ApiCallPolygon {
        /// Builds the façade on top of a reqwest [`ApiClient`] configured from `config`.
        pub fn from_config(config: &PolygonConfig) -> Result<Self, RequestError> {
            let defaults = PolygonConfig::defaults();
            let base_url = config
                .base_url
                .as_deref()
                .or(defaults.base_url.as_deref())
                .unwrap_or("https://api.polygon.io/");
            let client = ApiClient::with_policy(base_url, config.api_key.clone(), config.client_policy())?;
            Ok(ApiCallPolygon::new(Arc::new(client)))
        }
    }
}
