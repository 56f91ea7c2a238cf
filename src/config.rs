//! Runtime configuration loaded from an optional TOML file.
//!
//! Every field has a default, so an empty file (or no file) is valid.
//! Command-line flags are applied on top by the binary before validation.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::application::Speed;
use crate::domain::{presets, Grid, LifeRule, DEFAULT_BIRTH_PROBABILITY};

/// Grid size of the non-interactive watch mode
pub const WATCH_WIDTH: usize = 200;
pub const WATCH_HEIGHT: usize = 50;

/// Tick interval used when none is configured
pub const INTERACTIVE_INTERVAL_US: u64 = 100_000;
pub const WATCH_INTERVAL_US: u64 = 3_000_000;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct GridConfig {
    /// Fixed width; derived from the terminal when unset
    pub width: Option<usize>,
    /// Fixed height; derived from the terminal when unset
    pub height: Option<usize>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SeedConfig {
    pub birth_probability: f64,
    /// Seed for reproducible boards; random when unset
    pub rng_seed: Option<u64>,
    /// Preset placed on an empty board instead of random seeding
    pub pattern: Option<String>,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            birth_probability: DEFAULT_BIRTH_PROBABILITY,
            rng_seed: None,
            pattern: None,
        }
    }
}

/// Tick interval settings, in microseconds
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct SpeedConfig {
    /// Starting interval; the run mode picks one when unset
    pub interval_us: Option<u64>,
    pub min_interval_us: u64,
    pub max_interval_us: u64,
    pub step_us: u64,
}

impl Default for SpeedConfig {
    fn default() -> Self {
        Self {
            interval_us: None,
            min_interval_us: 10_000,
            max_interval_us: 5_000_000,
            step_us: 10_000,
        }
    }
}

impl SpeedConfig {
    /// Speed settings, starting at `default_interval_us` unless an
    /// interval is configured
    pub fn to_speed(&self, default_interval_us: u64) -> Speed {
        Speed::new(
            Duration::from_micros(self.interval_us.unwrap_or(default_interval_us)),
            Duration::from_micros(self.min_interval_us),
            Duration::from_micros(self.max_interval_us),
            Duration::from_micros(self.step_us),
        )
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub grid: GridConfig,
    pub seed: SeedConfig,
    pub speed: SpeedConfig,
    pub rule: LifeRule,
}

impl AppConfig {
    /// Read and parse a TOML file. Validation is a separate step.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid.width == Some(0) || self.grid.height == Some(0) {
            return Err(ConfigError::InvalidDimensions);
        }
        if let (Some(width), Some(height)) = (self.grid.width, self.grid.height) {
            if Grid::cell_count(width, height).is_none() {
                return Err(ConfigError::InvalidDimensions);
            }
        }
        let p = self.seed.birth_probability;
        if !(0.0..=1.0).contains(&p) {
            return Err(ConfigError::InvalidProbability(p));
        }
        let speed = &self.speed;
        if speed.min_interval_us == 0 || speed.min_interval_us > speed.max_interval_us {
            return Err(ConfigError::InvalidSpeed(format!(
                "min {}us must be positive and not above max {}us",
                speed.min_interval_us, speed.max_interval_us
            )));
        }
        if speed.step_us == 0 {
            return Err(ConfigError::InvalidSpeed("step must be positive".into()));
        }
        if let Some(interval) = speed.interval_us {
            if !(speed.min_interval_us..=speed.max_interval_us).contains(&interval) {
                return Err(ConfigError::InvalidSpeed(format!(
                    "interval {}us outside {}..={}us",
                    interval, speed.min_interval_us, speed.max_interval_us
                )));
            }
        }
        if !self.rule.is_valid() {
            return Err(ConfigError::InvalidRule(self.rule));
        }
        if let Some(name) = &self.seed.pattern {
            if presets::by_name(name).is_none() {
                return Err(ConfigError::UnknownPattern(name.clone()));
            }
        }
        Ok(())
    }
}

/// Configuration loading and validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Grid width and height must be non-zero and their product must fit in memory")]
    InvalidDimensions,
    #[error("Birth probability must be within 0..=1 (got {0})")]
    InvalidProbability(f64),
    #[error("Invalid speed settings: {0}")]
    InvalidSpeed(String),
    #[error("Invalid rule thresholds {0:?}")]
    InvalidRule(LifeRule),
    #[error("Unknown pattern '{0}'")]
    UnknownPattern(String),
}
