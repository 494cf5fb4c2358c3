//! Environment configuration, read once at startup.

use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;
use std::path::PathBuf;
use ucsb_api_core::default_log_level;

pub const BIND_VAR: &str = "UCSB_API_BIND";
pub const DB_PATH_VAR: &str = "UCSB_API_DB_PATH";
pub const CREDENTIALS_VAR: &str = "UCSB_API_CREDENTIALS";
pub const LOG_LEVEL_VAR: &str = "UCSB_API_LOG_LEVEL";
pub const LOG_DIR_VAR: &str = "UCSB_API_LOG_DIR";

pub const DEFAULT_BIND: &str = "127.0.0.1:8080";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// `None` runs against an in-memory database.
    pub db_path: Option<PathBuf>,
    /// `None` starts with an empty credential table.
    pub credentials_path: Option<PathBuf>,
    pub log_level: String,
    /// `None` logs to stderr.
    pub log_dir: Option<String>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    InvalidBindAddr { value: String, reason: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidBindAddr { value, reason } => {
                write!(f, "invalid {BIND_VAR} `{value}`: {reason}")
            }
        }
    }
}

impl Error for ConfigError {}

impl ServerConfig {
    /// Reads configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup.
    ///
    /// Blank values count as unset. Level and log directory are validated by
    /// `init_logging`, not here.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let bind_raw = read(BIND_VAR).unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind_addr = bind_raw
            .parse::<SocketAddr>()
            .map_err(|err| ConfigError::InvalidBindAddr {
                value: bind_raw.clone(),
                reason: err.to_string(),
            })?;

        Ok(Self {
            bind_addr,
            db_path: read(DB_PATH_VAR).map(PathBuf::from),
            credentials_path: read(CREDENTIALS_VAR).map(PathBuf::from),
            log_level: read(LOG_LEVEL_VAR).unwrap_or_else(|| default_log_level().to_string()),
            log_dir: read(LOG_DIR_VAR),
        })
    }

    /// Logs the effective configuration. Call after logging is up.
    pub fn log_summary(&self) {
        info!(
            "event=config_loaded module=server status=ok bind={} db={} credentials={} log_level={}",
            self.bind_addr,
            self.db_path
                .as_ref()
                .map(|path| path.display().to_string())
                .unwrap_or_else(|| "memory".to_string()),
            self.credentials_path
                .as_ref()
                .map(|path| path.display().to_string())
                .unwrap_or_else(|| "none".to_string()),
            self.log_level
        );
    }
}
