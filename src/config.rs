//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before any command
//! runs. A `.env` file in the working directory is honored (loaded by
//! `main.rs` through `dotenvy`).
//!
//! ## Variables
//!
//! - `SHORTLY_DATA_DIR` - Directory holding the history (default: platform data dir + `/shortly`)
//! - `SHORTLY_STORAGE_KEY` - Name of the history slot (default: `shortened-urls`)
//! - `SHORTLY_LATENCY_MS` - Simulated shortening latency (default: `800`, `0` disables)
//! - `RUST_LOG` - Log level (default: `warn`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Default name of the durable history slot.
pub const DEFAULT_STORAGE_KEY: &str = "shortened-urls";

const DEFAULT_LATENCY_MS: u64 = 800;
const MAX_LATENCY_MS: u64 = 60_000;

/// CLI configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    pub storage_key: String,
    pub latency_ms: u64,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `SHORTLY_LATENCY_MS` is set but not a number.
    pub fn from_env() -> Result<Self> {
        let data_dir = env::var("SHORTLY_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_data_dir());

        let storage_key =
            env::var("SHORTLY_STORAGE_KEY").unwrap_or_else(|_| DEFAULT_STORAGE_KEY.to_string());

        let latency_ms = match env::var("SHORTLY_LATENCY_MS") {
            Ok(v) => v
                .parse()
                .with_context(|| format!("SHORTLY_LATENCY_MS must be a number, got '{v}'"))?,
            Err(_) => DEFAULT_LATENCY_MS,
        };

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            data_dir,
            storage_key,
            latency_ms,
            log_level,
            log_format,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `storage_key` is empty or contains characters other than `[A-Za-z0-9._-]`
    /// - `latency_ms` exceeds 60000
    /// - `log_format` is not `text` or `json`
    pub fn validate(&self) -> Result<()> {
        if self.storage_key.is_empty() {
            anyhow::bail!("SHORTLY_STORAGE_KEY must not be empty");
        }

        if !self
            .storage_key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
        {
            anyhow::bail!(
                "SHORTLY_STORAGE_KEY may only contain letters, digits, '.', '_' and '-', got '{}'",
                self.storage_key
            );
        }

        if self.latency_ms > MAX_LATENCY_MS {
            anyhow::bail!(
                "SHORTLY_LATENCY_MS is too large (max: {}), got {}",
                MAX_LATENCY_MS,
                self.latency_ms
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        Ok(())
    }

    /// Simulated latency as a [`Duration`].
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Data dir: {}", self.data_dir.display());
        tracing::info!("  Storage key: {}", self.storage_key);
        tracing::info!("  Latency: {} ms", self.latency_ms);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join("shortly"))
        .unwrap_or_else(|| PathBuf::from(".shortly"))
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable cannot be parsed or validation fails.
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
