//! Daemon configuration
//!
//! Layered with the `config` crate, later sources overriding earlier ones:
//! built-in defaults, then an optional TOML file (`taskboard.toml`, or the
//! path in `TASKBOARD_CONFIG`), then `TASKBOARD_*` environment variables.

use ::config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;
use std::time::Duration;

pub const CONFIG_PATH_ENV: &str = "TASKBOARD_CONFIG";
const DEFAULT_CONFIG_FILE: &str = "taskboard.toml";
const ENV_PREFIX: &str = "TASKBOARD";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DaemonConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub host: String,
    pub port: u16,
    pub log_format: LogFormat,
    /// 0 disables the timeout
    pub request_timeout_secs: u64,
}

impl DaemonConfig {
    /// Load from the default file location and the process environment
    pub fn load() -> Result<Self, ConfigError> {
        let path =
            std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
        Self::from_sources(Some(&path), Environment::with_prefix(ENV_PREFIX))
    }

    pub fn from_sources(file: Option<&str>, env: Environment) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .set_default("database_url", "sqlite://taskboard.db")?
            .set_default("max_connections", 10)?
            .set_default("host", "127.0.0.1")?
            .set_default("port", 3001)?
            .set_default("log_format", "pretty")?
            .set_default("request_timeout_secs", 30)?;

        if let Some(path) = file {
            let expanded = shellexpand::tilde(path).into_owned();
            builder = builder.add_source(File::new(&expanded, FileFormat::Toml).required(false));
        }

        builder
            .add_source(env.try_parsing(true))
            .build()?
            .try_deserialize()
    }

    /// Database URL with a leading `~` in the file path expanded
    pub fn expanded_database_url(&self) -> String {
        match self.database_url.strip_prefix("sqlite://") {
            Some(path) => format!("sqlite://{}", shellexpand::tilde(path)),
            None => self.database_url.clone(),
        }
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        (self.request_timeout_secs > 0).then(|| Duration::from_secs(self.request_timeout_secs))
    }
}
