//! Configuration for the signup service.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

/// Service configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Account and error-log storage
    #[serde(default)]
    pub storage: StorageConfig,

    /// Password hashing
    #[serde(default)]
    pub hashing: HashingConfig,

    /// Logging configuration
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Server listen address
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Persist to disk (if false, everything is in-memory only)
    #[serde(default = "default_true")]
    pub persist: bool,

    /// Path to the accounts JSON file
    #[serde(default = "default_accounts_path")]
    pub accounts_path: PathBuf,

    /// Path to the error log (JSON Lines)
    #[serde(default = "default_error_log_path")]
    pub error_log_path: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HashingConfig {
    /// bcrypt work factor
    #[serde(default = "default_cost")]
    pub cost: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            port: default_port(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            persist: true,
            accounts_path: default_accounts_path(),
            error_log_path: default_error_log_path(),
        }
    }
}

impl Default for HashingConfig {
    fn default() -> Self {
        Self {
            cost: default_cost(),
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

fn default_listen_addr() -> String {
    "0.0.0.0".into()
}

fn default_port() -> u16 {
    5050
}

fn default_true() -> bool {
    true
}

fn default_accounts_path() -> PathBuf {
    PathBuf::from("/data/accounts.json")
}

fn default_error_log_path() -> PathBuf {
    PathBuf::from("/data/errors.jsonl")
}

fn default_cost() -> u32 {
    bcrypt::DEFAULT_COST
}

fn default_log_level() -> String {
    "info".into()
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();
        Self::from_source(config::Environment::default().separator("__"))
    }

    /// Build configuration from a single source.
    pub fn from_source<S>(source: S) -> Result<Self>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let config = config::Config::builder()
            .add_source(source)
            .build()
            .context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }
}
