//! # Configuration
//!
//! Optional YAML settings for the calculator window. Every field has a default, so a
//! missing file (or missing keys) gives the stock calculator: `$`, a 1.00 starting
//! hourly rate, a 0-10 slider in quarter steps.
//!
//! ## Location:
//! `tip-calculator.yaml` in the platform config directory. There is no environment
//! override.

use directories::ProjectDirs;
use log::info;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Display and slider settings for the calculator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TipCalculatorConfig {
    pub currency_symbol: String,
    /// Hourly rate the form starts at and returns to on reset
    pub default_hourly_rate: f64,
    pub max_hourly_rate: f64,
    pub hourly_rate_step: f64,
    /// Height cap for the history list before it scrolls
    pub history_max_height: f32,
}

impl Default for TipCalculatorConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "$".to_string(),
            default_hourly_rate: 1.0,
            max_hourly_rate: 10.0,
            hourly_rate_step: 0.25,
            history_max_height: 200.0,
        }
    }
}

impl TipCalculatorConfig {
    pub const FILE_NAME: &'static str = "tip-calculator.yaml";

    /// Slider values stay inside `0..=RATE_CEILING`
    pub const RATE_CEILING: f64 = 10.0;
    /// Every rate the slider can produce is a multiple of this
    pub const RATE_GRID: f64 = 0.25;

    /// Config file path in the platform config dir
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "TipCalculator", "TipCalculator")
            .map(|dirs| dirs.config_dir().join(Self::FILE_NAME))
    }

    /// Load and validate the config at `path`. A missing or empty file yields the defaults.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            info!("📄 No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        if contents.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Self = serde_yaml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;

        info!("📄 Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.currency_symbol.trim().is_empty() {
            return Err(ConfigError::Invalid("currency_symbol must not be empty".to_string()));
        }
        if self.max_hourly_rate.is_nan()
            || self.max_hourly_rate <= 0.0
            || self.max_hourly_rate > Self::RATE_CEILING
        {
            return Err(ConfigError::Invalid(format!(
                "max_hourly_rate must be in (0, {}], got {}",
                Self::RATE_CEILING,
                self.max_hourly_rate
            )));
        }
        if self.hourly_rate_step.is_nan()
            || self.hourly_rate_step < Self::RATE_GRID
            || !on_rate_grid(self.hourly_rate_step)
        {
            return Err(ConfigError::Invalid(format!(
                "hourly_rate_step must be a positive multiple of {}, got {}",
                Self::RATE_GRID,
                self.hourly_rate_step
            )));
        }
        if !(0.0..=self.max_hourly_rate).contains(&self.default_hourly_rate)
            || !on_rate_grid(self.default_hourly_rate)
        {
            return Err(ConfigError::Invalid(format!(
                "default_hourly_rate must be a multiple of {} between 0 and {}, got {}",
                Self::RATE_GRID,
                self.max_hourly_rate,
                self.default_hourly_rate
            )));
        }
        if self.history_max_height.is_nan() || self.history_max_height <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "history_max_height must be positive, got {}",
                self.history_max_height
            )));
        }
        Ok(())
    }
}

fn on_rate_grid(value: f64) -> bool {
    let steps = value / TipCalculatorConfig::RATE_GRID;
    (steps - steps.round()).abs() < 1e-9
}
