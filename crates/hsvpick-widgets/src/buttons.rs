//! Rounded text buttons for the dialog's control row.

use egui::{vec2, Color32, CornerRadius, CursorIcon, Pos2, Sense, Stroke, StrokeKind, Ui};

use crate::{sizing, theme};

/// A raised, rounded button with a text label.
pub struct RoundedButton<'a> {
    label: &'a str,
    width: f32,
    primary: bool,
}

impl<'a> RoundedButton<'a> {
    /// Create a new button.
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            width: 80.0,
            primary: false,
        }
    }

    /// Set the button width.
    pub fn width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    /// Draw with the accent fill.
    pub fn primary(mut self) -> Self {
        self.primary = true;
        self
    }

    /// Show the button and return true if clicked.
    pub fn show(self, ui: &mut Ui) -> bool {
        let size = vec2(self.width, sizing::CONTROL_HEIGHT);
        let (rect, response) = ui.allocate_exact_size(size, Sense::click());

        if ui.is_rect_visible(rect) {
            let radius = CornerRadius::same(sizing::CORNER_RADIUS);
            let (bg_color, text_color) = match (self.primary, response.hovered()) {
                (true, false) => (theme::ACCENT, Color32::WHITE),
                (true, true) => (theme::ACCENT.gamma_multiply(0.85), Color32::WHITE),
                (false, false) => (theme::BUTTON_BG, theme::TEXT),
                (false, true) => (theme::HOVER_BG, theme::TEXT),
            };

            // Elevation
            ui.painter().rect_filled(
                rect.translate(vec2(0.0, 1.0)),
                radius,
                Color32::from_black_alpha(20),
            );
            ui.painter().rect_filled(rect, radius, bg_color);
            if !self.primary {
                ui.painter().rect_stroke(
                    rect,
                    radius,
                    Stroke::new(1.0, theme::BORDER),
                    StrokeKind::Inside,
                );
            }

            ui.painter().text(
                Pos2::new(rect.center().x, rect.center().y),
                egui::Align2::CENTER_CENTER,
                self.label,
                egui::FontId::proportional(13.0),
                text_color,
            );
        }

        let clicked = response.clicked();
        response.on_hover_cursor(CursorIcon::PointingHand);
        clicked
    }
}
