//! Run configuration.
//!
//! Values come from three layers, lowest precedence first:
//!
//! 1. Built-in defaults (15 values in `1..=50`, 500 ms per step)
//! 2. A TOML file passed with `--config`
//! 3. Command-line flags
//!
//! ```toml
//! size = 20
//! min = 1
//! max = 99
//! speed_ms = 250
//! seed = 42
//! allow_cancel = true
//! ```

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::sort::{RandomArrayGenerator, DEFAULT_RANGE, DEFAULT_SIZE};

/// Default pause between steps.
pub const DEFAULT_SPEED_MS: u64 = 500;

/// Bounds and increment of the interactive speed control.
pub const SPEED_MIN_MS: u64 = 50;
pub const SPEED_MAX_MS: u64 = 2000;
pub const SPEED_STEP_MS: u64 = 50;

// =============================================================================
// RunConfig
// =============================================================================

/// Pacing settings read by the animation controller on every pause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunConfig {
    /// Pause after each step. Changes apply from the next pause on.
    pub delay: Duration,
    /// Whether `cancel()` may end a run early.
    pub allow_cancel: bool,
}

impl RunConfig {
    /// Default settings with a custom delay.
    pub fn with_delay_ms(ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(ms),
            ..Self::default()
        }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(DEFAULT_SPEED_MS),
            allow_cancel: false,
        }
    }
}

// =============================================================================
// AppConfig
// =============================================================================

/// Everything needed to build a controller.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub size: usize,
    pub min: u32,
    pub max: u32,
    pub speed_ms: u64,
    pub seed: Option<u64>,
    pub allow_cancel: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            min: *DEFAULT_RANGE.start(),
            max: *DEFAULT_RANGE.end(),
            speed_ms: DEFAULT_SPEED_MS,
            seed: None,
            allow_cancel: false,
        }
    }
}

impl AppConfig {
    /// Load a TOML file; keys it omits keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse TOML text; keys it omits keep their defaults.
    pub fn from_toml(text: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Reject settings the generator or the pacing loop cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(Error::InvalidConfig("size must be at least 1".into()));
        }
        if self.min > self.max {
            return Err(Error::InvalidConfig(format!(
                "min ({}) is greater than max ({})",
                self.min, self.max
            )));
        }
        if self.speed_ms == 0 {
            return Err(Error::InvalidConfig("speed_ms must be positive".into()));
        }
        Ok(())
    }

    /// Pacing settings for the controller.
    pub fn run_config(&self) -> RunConfig {
        RunConfig {
            delay: Duration::from_millis(self.speed_ms),
            allow_cancel: self.allow_cancel,
        }
    }

    /// Generator for the configured size and range, seeded if a seed is set.
    pub fn generator(&self) -> RandomArrayGenerator {
        let range = self.min..=self.max;
        match self.seed {
            Some(seed) => RandomArrayGenerator::seeded(self.size, range, seed),
            None => RandomArrayGenerator::new(self.size, range),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
