//! Configuration Loader - File Loading and Validation
//!
//! Handles loading `datastore.toml`, validating all parameters,
//! and providing clear error messages for misconfiguration.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use super::AppConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Load and validate configuration from a TOML file.
///
/// # Errors
/// Returns detailed error if:
/// - File doesn't exist or can't be read
/// - TOML parsing fails
/// - Validation rules are violated
pub fn load_config(path: impl AsRef<Path>) -> Result<AppConfig> {
  let path = path.as_ref();

  let content = std::fs::read_to_string(path)
    .with_context(|| format!("Failed to read config file: {}", path.display()))?;

  let config = parse_config(&content)
    .with_context(|| format!("Invalid config file: {}", path.display()))?;

  info!(
    store_path = %config.datastore.store_path.display(),
    minutes_until_backup = config.datastore.minutes_until_backup,
    enforce_identity = config.datastore.enforce_identity,
    "Configuration loaded successfully"
  );

  Ok(config)
}

/// Parse and validate configuration from TOML text.
pub fn parse_config(content: &str) -> Result<AppConfig> {
  let config: AppConfig = toml::from_str(content).context("Failed to parse TOML")?;
  validate_config(&config)?;
  Ok(config)
}

fn validate_config(config: &AppConfig) -> Result<()> {
  anyhow::ensure!(
    !config.datastore.store_path.as_os_str().is_empty(),
    "datastore.store_path must not be empty"
  );

  anyhow::ensure!(
    LOG_LEVELS.contains(&config.logging.level.to_ascii_lowercase().as_str()),
    "logging.level must be one of {LOG_LEVELS:?}, got {:?}",
    config.logging.level
  );

  Ok(())
}
