//! Unified Application Configuration
//!
//! Centralized configuration for the whole application: server binding,
//! remote client endpoints, event bus sizing and the rating listener's
//! failure behavior. Loaded from a YAML file, inline YAML, or environment
//! variables.

use jobhub_ports::ListenerFailureMode;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Unified application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Remote client configuration
    #[serde(default)]
    pub clients: ClientsConfig,

    /// Event bus configuration
    #[serde(default)]
    pub event_bus: EventBusConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment and file
    pub fn load() -> Result<Self> {
        let config = match (
            std::env::var("JOBHUB_CONFIG_PATH").ok(),
            std::env::var("JOBHUB_CONFIG_YAML").ok(),
        ) {
            (Some(path), None) => {
                let path = PathBuf::from(path);
                if !path.exists() {
                    return Err(ConfigError::FileNotFound(path));
                }
                let content = std::fs::read_to_string(&path).map_err(ConfigError::FileRead)?;
                serde_yaml::from_str(&content).map_err(ConfigError::ParseYaml)?
            }
            (None, Some(yaml)) => serde_yaml::from_str(&yaml).map_err(ConfigError::ParseYaml)?,
            _ => Self::from_env()?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            server: ServerConfig::from_env()?,
            clients: ClientsConfig::from_env()?,
            event_bus: EventBusConfig::from_env()?,
            logging: LoggingConfig::from_env(),
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.clients.validate()?;
        self.event_bus.validate()?;
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            clients: ClientsConfig::default(),
            event_bus: EventBusConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Port the REST surface binds to
    #[serde(default = "default_port")]
    pub port: u16,
}

impl ServerConfig {
    fn from_env() -> Result<Self> {
        let port = match std::env::var("JOBHUB_PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid(format!("JOBHUB_PORT is not a port: {raw}")))?,
            Err(_) => default_port(),
        };
        Ok(Self { port })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
        }
    }
}

fn default_port() -> u16 {
    8080
}

/// How the cross-domain clients are wired
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClientMode {
    /// Read the in-process stores directly (monolithic deployment)
    Local,
    /// Call the other services over REST using the base URLs below
    Http,
}

/// Remote client configuration
///
/// Base URLs and the timeout are only consulted in `Http` mode; the
/// monolithic deployment uses the in-process clients instead.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClientsConfig {
    #[serde(default = "default_client_mode")]
    pub mode: ClientMode,

    #[serde(default = "default_company_url")]
    pub company_base_url: String,

    #[serde(default = "default_review_url")]
    pub review_base_url: String,

    /// Bounded per-request timeout in milliseconds
    #[serde(default = "default_client_timeout_ms")]
    pub timeout_ms: u64,
}

impl ClientsConfig {
    fn from_env() -> Result<Self> {
        let mode = match std::env::var("JOBHUB_CLIENT_MODE").as_deref() {
            Ok("local") => ClientMode::Local,
            Ok("http") => ClientMode::Http,
            Ok(other) => {
                return Err(ConfigError::Invalid(format!(
                    "JOBHUB_CLIENT_MODE must be 'local' or 'http', got: {other}"
                )));
            }
            Err(_) => default_client_mode(),
        };

        let timeout_ms = match std::env::var("JOBHUB_CLIENT_TIMEOUT_MS") {
            Ok(raw) => raw.parse::<u64>().map_err(|_| {
                ConfigError::Invalid(format!("JOBHUB_CLIENT_TIMEOUT_MS is not a number: {raw}"))
            })?,
            Err(_) => default_client_timeout_ms(),
        };

        Ok(Self {
            mode,
            company_base_url: std::env::var("JOBHUB_COMPANY_URL")
                .unwrap_or_else(|_| default_company_url()),
            review_base_url: std::env::var("JOBHUB_REVIEW_URL")
                .unwrap_or_else(|_| default_review_url()),
            timeout_ms,
        })
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    fn validate(&self) -> Result<()> {
        for url in [&self.company_base_url, &self.review_base_url] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ConfigError::Invalid(format!("not an HTTP base URL: {url}")));
            }
        }
        if self.timeout_ms == 0 {
            return Err(ConfigError::Invalid(
                "client timeout must be non-zero".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for ClientsConfig {
    fn default() -> Self {
        Self {
            mode: default_client_mode(),
            company_base_url: default_company_url(),
            review_base_url: default_review_url(),
            timeout_ms: default_client_timeout_ms(),
        }
    }
}

fn default_client_mode() -> ClientMode {
    ClientMode::Local
}

fn default_company_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_review_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_client_timeout_ms() -> u64 {
    5_000
}

/// Event bus configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EventBusConfig {
    #[serde(default = "default_bus_capacity")]
    pub capacity: usize,

    #[serde(default = "default_failure_mode")]
    pub on_failure: ListenerFailureMode,
}

impl EventBusConfig {
    fn from_env() -> Result<Self> {
        let capacity = match std::env::var("JOBHUB_BUS_CAPACITY") {
            Ok(raw) => raw.parse::<usize>().map_err(|_| {
                ConfigError::Invalid(format!("JOBHUB_BUS_CAPACITY is not a number: {raw}"))
            })?,
            Err(_) => default_bus_capacity(),
        };

        let on_failure = match std::env::var("JOBHUB_BUS_ON_FAILURE").as_deref() {
            Ok("drop") => ListenerFailureMode::Drop,
            Ok("requeue") => ListenerFailureMode::Requeue,
            Ok(other) => {
                return Err(ConfigError::Invalid(format!(
                    "JOBHUB_BUS_ON_FAILURE must be 'drop' or 'requeue', got: {other}"
                )));
            }
            Err(_) => default_failure_mode(),
        };

        Ok(Self {
            capacity,
            on_failure,
        })
    }

    fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(ConfigError::Invalid(
                "event bus capacity must be non-zero".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for EventBusConfig {
    fn default() -> Self {
        Self {
            capacity: default_bus_capacity(),
            on_failure: default_failure_mode(),
        }
    }
}

fn default_bus_capacity() -> usize {
    10_000
}

fn default_failure_mode() -> ListenerFailureMode {
    ListenerFailureMode::Drop
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Filter directive for tracing-subscriber (e.g. "info" or "jobhub=debug")
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl LoggingConfig {
    fn from_env() -> Self {
        Self {
            level: std::env::var("JOBHUB_LOG").unwrap_or_else(|_| default_log_level()),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Configuration error
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("failed to read config file: {0}")]
    FileRead(#[source] std::io::Error),

    #[error("failed to parse YAML config: {0}")]
    ParseYaml(#[source] serde_yaml::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}
