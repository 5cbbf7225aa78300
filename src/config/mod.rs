//! Configuration file support.
//!
//! Handles loading and validating user settings from the configuration file
//! located at `~/.config/paintinput/config.toml`. If no config file exists,
//! sensible defaults are used automatically.

pub mod types;

// Re-export commonly used types at module level
pub use types::GestureConfig;

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// All fields have sensible defaults and will use those if not specified in
/// the config file.
///
/// # Example TOML
/// ```toml
/// [gesture]
/// tap_window_ms = 150
/// dot_threshold_px = 3.0
/// finger_painting = true
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Gesture disambiguation tuning
    #[serde(default)]
    pub gesture: GestureConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning
    /// is logged.
    ///
    /// Validated ranges:
    /// - `tap_window_ms`: 16 - 1000
    /// - `dot_threshold_px`: 0.0 - 20.0
    fn validate_and_clamp(&mut self) {
        if !(16..=1000).contains(&self.gesture.tap_window_ms) {
            log::warn!(
                "Invalid tap_window_ms {}, clamping to 16-1000 range",
                self.gesture.tap_window_ms
            );
            self.gesture.tap_window_ms = self.gesture.tap_window_ms.clamp(16, 1000);
        }

        if !(0.0..=20.0).contains(&self.gesture.dot_threshold_px) {
            log::warn!(
                "Invalid dot_threshold_px {:.1}, clamping to 0.0-20.0 range",
                self.gesture.dot_threshold_px
            );
            self.gesture.dot_threshold_px = self.gesture.dot_threshold_px.clamp(0.0, 20.0);
        }
    }

    /// Loads configuration from the default path, falling back to defaults
    /// if no file exists.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            Some(path) => {
                debug!("No config file at {}, using defaults", path.display());
                Ok(Self::default())
            }
            None => {
                debug!("Could not determine config directory, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Loads and validates configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let mut config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        config.validate_and_clamp();
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// `~/.config/paintinput/config.toml`, if the platform has a config dir.
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("paintinput").join("config.toml"))
    }
}
