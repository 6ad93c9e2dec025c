//! Construction-time configuration for a picker dialog.

use serde::{Deserialize, Serialize};

use crate::error::{PickerError, PickerResult};
use crate::slider::SliderStyle;

/// Color a dialog starts with when no trigger has seeded it yet.
pub const DEFAULT_INITIAL_COLOR: &str = "#ff0000";

/// Options a dialog is built from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// Initial color as `#rrggbb`
    pub initial_color: String,
    /// Cosmetics shared by the three sliders
    pub slider_style: SliderStyle,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            initial_color: DEFAULT_INITIAL_COLOR.to_string(),
            slider_style: SliderStyle::default(),
        }
    }
}

impl PickerConfig {
    /// Config with a custom initial color.
    pub fn with_initial_color(color: impl Into<String>) -> Self {
        Self {
            initial_color: color.into(),
            ..Default::default()
        }
    }

    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> PickerResult<Self> {
        serde_json::from_str(json).map_err(|e| PickerError::Config(e.to_string()))
    }

    pub fn to_json(&self) -> PickerResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| PickerError::Config(e.to_string()))
    }
}
