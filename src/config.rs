//! # Configuration Module
//!
//! Handles loading and validating configuration from TOML files.

use serde::de::Error;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::{PtzTeleopError, Result};
use crate::input::frame::AXIS_COUNT;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub axes: AxesConfig,

    #[serde(default)]
    pub focus: FocusConfig,

    #[serde(default)]
    pub rate: RateConfig,
}

/// Per-axis scaling and noise thresholds
#[derive(Debug, Deserialize, Clone)]
pub struct AxesConfig {
    /// Scale factors applied to thresholded axes, one per axis in device
    /// order: forward/zoom, left, up/save-go, pan, tilt, twist/focus.
    #[serde(default = "default_sensitivities")]
    pub sensitivities: Vec<f64>,

    /// Deadband thresholds, one per axis, same order.
    #[serde(default = "default_deadbands")]
    pub deadbands: Vec<f64>,
}

/// Focus behavior configuration
#[derive(Debug, Deserialize, Clone)]
pub struct FocusConfig {
    /// Allow the twist axis and button 0 to drive focus manually.
    #[serde(default = "default_allow_manual")]
    pub allow_manual: bool,
}

/// Control loop rate configuration
#[derive(Debug, Deserialize, Clone)]
pub struct RateConfig {
    /// Control loop ticks per second.
    #[serde(default = "default_tick_hz")]
    pub tick_hz: u32,
}

impl Default for AxesConfig {
    fn default() -> Self {
        Self {
            sensitivities: default_sensitivities(),
            deadbands: default_deadbands(),
        }
    }
}

impl Default for FocusConfig {
    fn default() -> Self {
        Self {
            allow_manual: default_allow_manual(),
        }
    }
}

impl Default for RateConfig {
    fn default() -> Self {
        Self {
            tick_hz: default_tick_hz(),
        }
    }
}

// Default value functions
fn default_sensitivities() -> Vec<f64> {
    vec![120.0, -60.0, 40.0, 60.0, -40.0, 30.0]
}
fn default_deadbands() -> Vec<f64> {
    vec![0.2, 0.2, 0.2, 0.2, 0.2, 0.4]
}
fn default_allow_manual() -> bool {
    false
}
fn default_tick_hz() -> u32 {
    5
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration file
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File cannot be read
    /// - TOML parsing fails
    /// - Validation fails
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use ptz_teleop::config::Config;
    ///
    /// let config = Config::load("config/default.toml")?;
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns error if any configuration value is out of valid range
    fn validate(&self) -> Result<()> {
        if self.axes.sensitivities.len() != AXIS_COUNT {
            return Err(PtzTeleopError::Config(toml::de::Error::custom(format!(
                "sensitivities must have exactly {} entries, got {}",
                AXIS_COUNT,
                self.axes.sensitivities.len()
            ))));
        }

        if self.axes.deadbands.len() != AXIS_COUNT {
            return Err(PtzTeleopError::Config(toml::de::Error::custom(format!(
                "deadbands must have exactly {} entries, got {}",
                AXIS_COUNT,
                self.axes.deadbands.len()
            ))));
        }

        for &sensitivity in &self.axes.sensitivities {
            if !sensitivity.is_finite() {
                return Err(PtzTeleopError::Config(toml::de::Error::custom(
                    "sensitivities must be finite",
                )));
            }
        }

        for &deadband in &self.axes.deadbands {
            if !(0.0..1.0).contains(&deadband) {
                return Err(PtzTeleopError::Config(toml::de::Error::custom(
                    "deadbands must be at least 0.0 and below 1.0",
                )));
            }
        }

        if self.rate.tick_hz == 0 || self.rate.tick_hz > 100 {
            return Err(PtzTeleopError::Config(toml::de::Error::custom(
                "tick_hz must be between 1 and 100",
            )));
        }

        Ok(())
    }
}
