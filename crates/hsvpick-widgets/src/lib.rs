//! egui views for the hsvpick color picker.
//!
//! - **Track**: gradient slider track with a draggable thumb
//! - **Swatch**: preview swatch and the `ColorButton` trigger
//! - **Buttons**: rounded text buttons for the control row
//! - **Modal**: the picker dialog shown in an `egui::Modal`

pub mod buttons;
pub mod modal;
pub mod swatch;
pub mod track;

pub use buttons::RoundedButton;
pub use modal::{PickerAction, PickerModal};
pub use swatch::{to_color32, ColorButton, PreviewSwatch};
pub use track::{gradient_mesh, GradientTrack};

/// Standard sizing constants used across widgets.
pub mod sizing {
    /// Width of the dialog content
    pub const DIALOG_WIDTH: f32 = 400.0;
    /// Height of the dialog content
    pub const DIALOG_HEIGHT: f32 = 200.0;
    /// Height of the preview swatch and control row buttons
    pub const CONTROL_HEIGHT: f32 = 30.0;
    /// Gap between items in the control row
    pub const CONTROL_SPACING: f32 = 12.0;
    /// Button and swatch corner radius
    pub const CORNER_RADIUS: u8 = 6;
    /// Dialog corner radius
    pub const PANEL_RADIUS: u8 = 10;
    /// Trigger button size
    pub const TRIGGER: f32 = 36.0;
}

/// Standard colors used across widgets.
pub mod theme {
    use egui::Color32;

    /// Text color (dark gray)
    pub const TEXT: Color32 = Color32::from_rgb(60, 60, 60);
    /// Border color
    pub const BORDER: Color32 = Color32::from_rgb(220, 220, 220);
    /// Accent for the confirm button
    pub const ACCENT: Color32 = Color32::from_rgb(59, 130, 246);
    /// Button background
    pub const BUTTON_BG: Color32 = Color32::from_rgb(245, 245, 248);
    /// Hover background
    pub const HOVER_BG: Color32 = Color32::from_rgb(235, 235, 240);
    /// Panel background
    pub const PANEL_BG: Color32 = Color32::from_rgba_premultiplied(250, 250, 252, 250);
    /// Fill for triggers without a color
    pub const EMPTY: Color32 = Color32::from_gray(200);
}
