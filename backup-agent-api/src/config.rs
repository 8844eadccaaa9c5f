//! Configuration management for the backup agent API.
//!
//! Loads configuration from an optional TOML file, then applies environment
//! variable overrides. The result is immutable and handed to the router.

use crate::utils::errors::{AgentError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub agent: AgentConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// HTTP listening port
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Static dashboard served at `/`
    #[serde(default = "default_dashboard")]
    pub dashboard: PathBuf,

    /// Status document written by the backup script
    #[serde(default = "default_status_file")]
    pub status_file: PathBuf,

    /// Backup log; also the output sink for triggered runs
    #[serde(default = "default_log_file")]
    pub log_file: PathBuf,

    /// Executable launched by `POST /backup`
    #[serde(default = "default_backup_script")]
    pub backup_script: PathBuf,

    /// Source of system uptime (`/proc/uptime` format)
    #[serde(default = "default_uptime_source")]
    pub uptime_source: PathBuf,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Backup repository identifier reported in the default status
    #[serde(default)]
    pub repository: Option<String>,

    /// Hostname override; the system host name is used when unset
    #[serde(default)]
    pub hostname: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

// Default values
const DEFAULT_LOG_DIR: &str = "/logs";
const STATUS_FILE_NAME: &str = "status.json";
const LOG_FILE_NAME: &str = "backup.log";

fn default_port() -> u16 {
    8080
}

fn default_dashboard() -> PathBuf {
    PathBuf::from("/usr/local/share/dashboard.html")
}

fn default_status_file() -> PathBuf {
    Path::new(DEFAULT_LOG_DIR).join(STATUS_FILE_NAME)
}

fn default_log_file() -> PathBuf {
    Path::new(DEFAULT_LOG_DIR).join(LOG_FILE_NAME)
}

fn default_backup_script() -> PathBuf {
    PathBuf::from("/usr/local/bin/backup")
}

fn default_uptime_source() -> PathBuf {
    PathBuf::from("/proc/uptime")
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { port: default_port() }
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            dashboard: default_dashboard(),
            status_file: default_status_file(),
            log_file: default_log_file(),
            backup_script: default_backup_script(),
            uptime_source: default_uptime_source(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// File (or defaults) with overrides from the process environment and `.env`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let _ = dotenvy::dotenv();
        let base = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        base.with_env_overrides(|key| std::env::var(key).ok())
    }

    /// Apply environment overrides using `lookup` to read variables.
    ///
    /// Empty values count as unset.
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(port) = var("API_PORT") {
            self.api.port = port
                .trim()
                .parse()
                .map_err(|_| AgentError::Config(format!("invalid API_PORT: {port:?}")))?;
        }
        if let Some(repository) = var("PBS_REPOSITORY") {
            self.agent.repository = Some(repository);
        }
        if let Some(hostname) = var("BACKUP_HOSTNAME") {
            self.agent.hostname = Some(hostname);
        }
        if let Some(dir) = var("LOG_DIR") {
            let dir = PathBuf::from(dir);
            self.paths.status_file = dir.join(STATUS_FILE_NAME);
            self.paths.log_file = dir.join(LOG_FILE_NAME);
        }
        if let Some(dashboard) = var("DASHBOARD_PATH") {
            self.paths.dashboard = PathBuf::from(dashboard);
        }
        if let Some(script) = var("BACKUP_SCRIPT") {
            self.paths.backup_script = PathBuf::from(script);
        }
        if let Some(level) = var("LOG_LEVEL") {
            self.log.level = level;
        }

        Ok(self)
    }

    /// Repository identifier as reported to clients.
    pub fn repository_label(&self) -> &str {
        self.agent.repository.as_deref().unwrap_or("not configured")
    }
}
