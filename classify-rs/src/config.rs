//! Configuration for classify-rs

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;

use crate::error::{ClassifierError, Result};

/// Main service configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Server configuration
    pub server: ServerConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Listen address (e.g., "0.0.0.0:8000")
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Filter directives, overridden by RUST_LOG
    #[serde(default = "default_level")]
    pub level: String,
    /// Output format: "pretty" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_listen_addr() -> String {
    "0.0.0.0:8000".to_string()
}

fn default_level() -> String {
    "classify_rs=info,tower_http=info".to_string()
}

fn default_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ClassifierError::Config(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| ClassifierError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Create a default development configuration
    pub fn development() -> Self {
        Self {
            server: ServerConfig {
                listen_addr: default_listen_addr(),
            },
            logging: LoggingConfig::default(),
        }
    }

    /// Parsed listen address
    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.server.listen_addr.parse().map_err(|e| {
            ClassifierError::Config(format!(
                "Invalid listen_addr '{}': {}",
                self.server.listen_addr, e
            ))
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.listen_addr()?;

        match self.logging.format.as_str() {
            "pretty" | "json" => Ok(()),
            other => Err(ClassifierError::Config(format!(
                "Unknown log format '{}', expected \"pretty\" or \"json\"",
                other
            ))),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::development()
    }
}
