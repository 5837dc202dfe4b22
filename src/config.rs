//! Gesture configuration.
//!
//! Every field is optional in serialized form and falls back to the values in
//! [`crate::constants`]. Configurations are validated on load so the state
//! machine can rely on `0 < min_zoom <= max_zoom` and a non-negative slop.

use crate::constants::{DEFAULT_TOUCH_SLOP, MAX_ZOOM, MIN_ZOOM};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading or validating a configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Zoom limits are non-finite, non-positive, or inverted
    #[error("Invalid zoom range: min {min}, max {max}")]
    InvalidZoomRange { min: f32, max: f32 },

    /// Touch slop is negative or non-finite
    #[error("Invalid touch slop: {0}")]
    InvalidTouchSlop(f32),
}

/// Result type alias for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Tunables for [`crate::gesture::ZoomGesture`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomConfig {
    /// Unzoomed scale; content is centered and cannot be panned here
    pub min_zoom: f32,
    /// Upper bound for the pinch scale
    pub max_zoom: f32,
    /// Finger travel before a touch counts as a drag
    pub touch_slop: f32,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
            touch_slop: DEFAULT_TOUCH_SLOP,
        }
    }
}

impl ZoomConfig {
    pub fn with_zoom_range(mut self, min_zoom: f32, max_zoom: f32) -> Self {
        self.min_zoom = min_zoom;
        self.max_zoom = max_zoom;
        self
    }

    pub fn with_touch_slop(mut self, touch_slop: f32) -> Self {
        self.touch_slop = touch_slop;
        self
    }

    pub fn validate(&self) -> ConfigResult<()> {
        let range_ok = self.min_zoom.is_finite()
            && self.max_zoom.is_finite()
            && self.min_zoom > 0.0
            && self.max_zoom >= self.min_zoom;
        if !range_ok {
            return Err(ConfigError::InvalidZoomRange {
                min: self.min_zoom,
                max: self.max_zoom,
            });
        }
        if !self.touch_slop.is_finite() || self.touch_slop < 0.0 {
            return Err(ConfigError::InvalidTouchSlop(self.touch_slop));
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let config: ZoomConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file
    pub fn from_path(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&contents)?;
        tracing::info!(
            path = %path.display(),
            min_zoom = config.min_zoom,
            max_zoom = config.max_zoom,
            touch_slop = config.touch_slop,
            "Loaded zoom config"
        );
        Ok(config)
    }
}
