//! Dialog lifecycle and slider value types.

use std::fmt;

use uuid::Uuid;

use crate::color::Hsv;
use crate::slider::SLIDER_RANGE;

/// Lifecycle state of a dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogState {
    #[default]
    Closed,
    Open,
}

/// Unique identity of a dialog instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DialogId(Uuid);

impl DialogId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for DialogId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DialogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which of the three sliders an event is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SliderKind {
    Hue,
    Saturation,
    Value,
}

impl SliderKind {
    pub const ALL: [SliderKind; 3] = [SliderKind::Hue, SliderKind::Saturation, SliderKind::Value];

    pub fn label(&self) -> &'static str {
        match self {
            SliderKind::Hue => "Hue",
            SliderKind::Saturation => "Saturation",
            SliderKind::Value => "Value",
        }
    }
}

/// The three slider positions, each in `[0, SLIDER_RANGE]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderValues {
    pub hue: f64,
    pub saturation: f64,
    pub value: f64,
}

impl SliderValues {
    /// Scale a normalized HSV color into slider positions.
    pub fn from_hsv(hsv: Hsv) -> Self {
        Self {
            hue: hsv.h * SLIDER_RANGE,
            saturation: hsv.s * SLIDER_RANGE,
            value: hsv.v * SLIDER_RANGE,
        }
    }

    /// Normalize slider positions back into HSV.
    pub fn to_hsv(self) -> Hsv {
        Hsv::new(
            self.hue / SLIDER_RANGE,
            self.saturation / SLIDER_RANGE,
            self.value / SLIDER_RANGE,
        )
    }

    pub fn get(&self, kind: SliderKind) -> f64 {
        match kind {
            SliderKind::Hue => self.hue,
            SliderKind::Saturation => self.saturation,
            SliderKind::Value => self.value,
        }
    }
}
