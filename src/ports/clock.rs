//! Clock Port - Wall-clock Time Source
//!
//! Backup staleness compares the store file's last-modified time with
//! "now". Taking "now" from a trait lets tests move time forward instead
//! of sleeping for the configured interval.

use chrono::{DateTime, Local};

/// Source of the current local time.
pub trait Clock {
  /// Current local time.
  fn now(&self) -> DateTime<Local>;
}

/// Clock backed by the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
  fn now(&self) -> DateTime<Local> {
    Local::now()
  }
}
