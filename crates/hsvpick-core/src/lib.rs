//! hsvpick core library
//!
//! Platform-agnostic color math, gradient slider model and the HSV picker
//! dialog state machine. Rendering lives in `hsvpick-widgets`.

pub mod color;
pub mod config;
pub mod dialog;
pub mod error;
pub mod slider;

pub use color::{
    hex_to_hsv, hex_to_rgb, hsv_to_hex, hsv_to_rgb, hue_color, rgb_to_hex, rgb_to_hsv, Hsv, Rgb,
};
pub use config::{PickerConfig, DEFAULT_INITIAL_COLOR};
pub use dialog::{
    ColorPickerDialog, DialogId, DialogState, ModalHost, SliderKind, SliderValues, Trigger,
    HUE_STOPS,
};
pub use error::{PickerError, PickerResult};
pub use slider::{GradientSlider, SliderStyle, TrackShadow, SLIDER_RANGE};
