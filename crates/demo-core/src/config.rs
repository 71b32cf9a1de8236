//! Demo data configuration.
//!
//! Configuration can be loaded from a YAML file:
//!
//! ```yaml
//! seed: 12345
//! timezone: America/Los_Angeles
//! now: 2026-10-19T15:00:00Z
//! ```
//!
//! Every field is optional. Leaving `now` unset resolves the clock to the
//! current time on each run.

use crate::clock::Clock;
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Seed used by the dashboards' demo mode.
pub const DEFAULT_SEED: u64 = 12345;

/// Error type for configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Error reading config file
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// Timezone name not present in the tz database
    #[error("Unknown timezone: {0}")]
    InvalidTimezone(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Seed for the Lehmer generator
    pub seed: u64,

    /// IANA timezone name used to resolve calendar days
    pub timezone: String,

    /// Pinned reference time; `None` means the current time
    pub now: Option<DateTime<Utc>>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            timezone: "UTC".to_string(),
            now: None,
        }
    }
}

impl DemoConfig {
    /// Parse a configuration from YAML text.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.parse_timezone()?;
        Ok(config)
    }

    /// Load a configuration from a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = timezone.into();
        self
    }

    pub fn with_now(mut self, now: DateTime<Utc>) -> Self {
        self.now = Some(now);
        self
    }

    pub fn parse_timezone(&self) -> Result<Tz, ConfigError> {
        self.timezone
            .parse::<Tz>()
            .map_err(|_| ConfigError::InvalidTimezone(self.timezone.clone()))
    }

    /// Resolve the clock for one generation run.
    pub fn clock(&self) -> Result<Clock, ConfigError> {
        let timezone = self.parse_timezone()?;
        Ok(Clock::new(self.now.unwrap_or_else(Utc::now), timezone))
    }
}
