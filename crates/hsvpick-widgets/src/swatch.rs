//! Preview swatch and the color trigger button.

use std::cell::RefCell;
use std::rc::Rc;

use egui::{vec2, Color32, CornerRadius, CursorIcon, Pos2, Rect, Sense, Stroke, StrokeKind, Ui, Vec2};
use hsvpick_core::{hex_to_rgb, ColorPickerDialog, PickerResult, Rgb, Trigger};

use crate::{sizing, theme};

/// Convert a core color to egui.
pub fn to_color32(color: Rgb) -> Color32 {
    Color32::from_rgb(color.r, color.g, color.b)
}

/// Fill for a stored hex color; gray when unset or unparseable.
fn fill_for(color: Option<&str>) -> Color32 {
    color
        .and_then(|hex| hex_to_rgb(hex).ok())
        .map(to_color32)
        .unwrap_or(theme::EMPTY)
}

/// A rounded swatch showing the dialog's preview color.
pub struct PreviewSwatch {
    color: Rgb,
    height: f32,
}

impl PreviewSwatch {
    pub fn new(color: Rgb) -> Self {
        Self {
            color,
            height: sizing::CONTROL_HEIGHT,
        }
    }

    /// Show the swatch, filling the given width.
    pub fn show(self, ui: &mut Ui, width: f32) -> Rect {
        let (rect, response) = ui.allocate_exact_size(vec2(width, self.height), Sense::hover());

        if ui.is_rect_visible(rect) {
            let radius = CornerRadius::same(sizing::CORNER_RADIUS);
            ui.painter().rect_filled(
                rect.translate(vec2(0.0, 2.0)),
                radius,
                Color32::from_black_alpha(40),
            );
            ui.painter().rect_filled(rect, radius, to_color32(self.color));
        }

        response.on_hover_text(self.color.to_hex());
        rect
    }
}

/// A button whose fill is the color it owns.
///
/// This is the trigger the dialog opens against and commits into. Hosts keep
/// it in an `Rc<RefCell<_>>` so the dialog can hold it while open.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorButton {
    color: Option<String>,
    tooltip: String,
    size: Vec2,
}

impl ColorButton {
    /// Create a button with a color.
    pub fn new(color: impl Into<String>) -> Self {
        Self {
            color: Some(color.into()),
            tooltip: String::new(),
            size: vec2(sizing::TRIGGER, sizing::TRIGGER),
        }
    }

    /// Create a button that has no color yet.
    pub fn empty() -> Self {
        Self {
            color: None,
            tooltip: String::new(),
            size: vec2(sizing::TRIGGER, sizing::TRIGGER),
        }
    }

    /// Set the hover text.
    pub fn tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = tooltip.into();
        self
    }

    /// Set the size.
    pub fn size(mut self, size: Vec2) -> Self {
        self.size = size;
        self
    }

    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    /// Wrap in a shared handle.
    pub fn shared(self) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(self))
    }

    /// Show the button and return true if clicked.
    pub fn show(&self, ui: &mut Ui) -> bool {
        let (rect, response) = ui.allocate_exact_size(self.size, Sense::click());

        if ui.is_rect_visible(rect) {
            let radius = CornerRadius::same(sizing::CORNER_RADIUS);
            ui.painter().rect_filled(
                rect.translate(vec2(0.0, 1.0)),
                radius,
                Color32::from_black_alpha(30),
            );
            ui.painter().rect_filled(rect, radius, fill_for(self.color()));

            let border = if response.hovered() {
                theme::ACCENT
            } else {
                theme::BORDER
            };
            ui.painter()
                .rect_stroke(rect, radius, Stroke::new(1.0, border), StrokeKind::Inside);

            if self.color.is_none() {
                // Diagonal marks the unset state
                ui.painter().line_segment(
                    [
                        Pos2::new(rect.left() + 6.0, rect.bottom() - 6.0),
                        Pos2::new(rect.right() - 6.0, rect.top() + 6.0),
                    ],
                    Stroke::new(2.0, Color32::from_rgb(239, 68, 68)),
                );
            }
        }

        let clicked = response.clicked();
        let response = response.on_hover_cursor(CursorIcon::PointingHand);
        if !self.tooltip.is_empty() {
            response.on_hover_text(self.tooltip.as_str());
        }
        clicked
    }

    /// Show a shared button and open `dialog` for it when clicked.
    ///
    /// Returns true if the dialog was opened this frame.
    pub fn show_with_dialog(
        button: &Rc<RefCell<Self>>,
        ui: &mut Ui,
        dialog: &mut ColorPickerDialog<Rc<RefCell<Self>>>,
    ) -> PickerResult<bool> {
        let clicked = button.borrow().show(ui);
        if clicked && !dialog.is_open() {
            dialog.open_for(Rc::clone(button))?;
            return Ok(true);
        }
        Ok(false)
    }
}

impl Trigger for ColorButton {
    fn current_color(&self) -> Option<String> {
        self.color.clone()
    }

    fn set_current_color(&mut self, hex: &str) {
        self.color = Some(hex.to_string());
    }
}
