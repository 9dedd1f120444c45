//! # Configuration
//!
//! Playback and rendering settings, read from YAML. Every key is optional:
//!
//! ```yaml
//! window-seconds: 0.3   # how long a hit stays lit
//! frame-rate: 60        # live view refresh rate
//! start-view: graphic   # graphic | score
//! cell-label: token     # token | abbreviation
//! ```

use crate::error::DrumTabError;
use crate::grid::CellLabel;
use crate::playback::DEFAULT_WINDOW;
use crate::view::ViewMode;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_FRAME_RATE: u32 = 60;
pub const MAX_FRAME_RATE: u32 = 240;

/// Raw config for YAML deserialization
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct RawConfig {
    window_seconds: Option<f64>,
    frame_rate: Option<u32>,
    start_view: Option<ViewMode>,
    cell_label: Option<CellLabel>,
}

/// Validated configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub window_seconds: f64,
    pub frame_rate: u32,
    pub start_view: ViewMode,
    pub cell_label: CellLabel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_seconds: DEFAULT_WINDOW,
            frame_rate: DEFAULT_FRAME_RATE,
            start_view: ViewMode::default(),
            cell_label: CellLabel::default(),
        }
    }
}

impl Config {
    pub fn from_yaml(content: &str) -> Result<Self, DrumTabError> {
        // An empty document deserializes as unit, not as an empty map
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let raw: RawConfig =
            serde_yaml::from_str(content).map_err(|e| DrumTabError::Config(e.to_string()))?;
        Self::from_raw(raw)
    }

    pub fn load(path: &Path) -> Result<Self, DrumTabError> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_yaml(&content)?;
        log::debug!("loaded config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// Time between live view frames
    pub fn frame_interval(&self) -> Duration {
        Duration::from_nanos(1_000_000_000 / u64::from(self.frame_rate))
    }

    fn from_raw(raw: RawConfig) -> Result<Self, DrumTabError> {
        let defaults = Self::default();

        let window_seconds = raw.window_seconds.unwrap_or(defaults.window_seconds);
        if !(window_seconds.is_finite() && window_seconds > 0.0) {
            return Err(DrumTabError::Config(format!(
                "window-seconds must be a positive number, got {}",
                window_seconds
            )));
        }

        let frame_rate = raw.frame_rate.unwrap_or(defaults.frame_rate);
        if !(1..=MAX_FRAME_RATE).contains(&frame_rate) {
            return Err(DrumTabError::Config(format!(
                "frame-rate must be between 1 and {}, got {}",
                MAX_FRAME_RATE, frame_rate
            )));
        }

        Ok(Self {
            window_seconds,
            frame_rate,
            start_view: raw.start_view.unwrap_or(defaults.start_view),
            cell_label: raw.cell_label.unwrap_or(defaults.cell_label),
        })
    }
}
