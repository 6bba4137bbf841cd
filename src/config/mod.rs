//! Configuration Module - TOML-based Datastore Configuration
//!
//! Loads and validates configuration from `datastore.toml`. The
//! repository itself only needs a `StoreConfig`; embedders can build one
//! directly without touching TOML at all.

pub mod loader;

use std::path::PathBuf;

use chrono::Duration;
use serde::Deserialize;

/// Top-level configuration for the console harness.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
  /// Logging setup.
  #[serde(default)]
  pub logging: LoggingConfig,
  /// Repository behaviour.
  #[serde(default)]
  pub datastore: StoreConfig,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
  /// Log level (trace, debug, info, warn, error). `RUST_LOG` wins if set.
  #[serde(default = "default_log_level")]
  pub level: String,
  /// Emit JSON lines instead of human-readable output.
  #[serde(default)]
  pub json: bool,
}

impl Default for LoggingConfig {
  fn default() -> Self {
    Self {
      level: default_log_level(),
      json: false,
    }
  }
}

/// Repository configuration.
///
/// One `StoreConfig` can back several repositories; each derives its own
/// file names from its logical name.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
  /// Directory holding store files and backups.
  #[serde(default = "default_store_path")]
  pub store_path: PathBuf,
  /// Minutes since the last store write before the next write also takes a
  /// backup. Zero or negative disables backups.
  #[serde(default)]
  pub minutes_until_backup: i64,
  /// When true, `create` rejects any record that already carries an id.
  /// When false, such records are stored with the id they carry.
  #[serde(default)]
  pub enforce_identity: bool,
}

impl StoreConfig {
  /// Backups disabled, enforcement off.
  pub fn new(store_path: impl Into<PathBuf>) -> Self {
    Self {
      store_path: store_path.into(),
      minutes_until_backup: 0,
      enforce_identity: false,
    }
  }

  #[must_use]
  pub fn with_backup_minutes(mut self, minutes: i64) -> Self {
    self.minutes_until_backup = minutes;
    self
  }

  #[must_use]
  pub fn with_enforce_identity(mut self, enforce: bool) -> Self {
    self.enforce_identity = enforce;
    self
  }

  /// Staleness threshold, or `None` when backups are disabled.
  pub fn backup_interval(&self) -> Option<Duration> {
    (self.minutes_until_backup > 0).then(|| Duration::minutes(self.minutes_until_backup))
  }
}

impl Default for StoreConfig {
  fn default() -> Self {
    Self::new(default_store_path())
  }
}

// Default value functions for serde

fn default_log_level() -> String {
  "info".to_string()
}

fn default_store_path() -> PathBuf {
  PathBuf::from("data")
}
