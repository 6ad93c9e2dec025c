//! The picker dialog shown as an `egui::Modal`.
//!
//! Layout follows the classic selector: a control row (Cancel, preview
//! swatch, Select) above the hue, saturation and value tracks. Pointer input
//! is collected while drawing and applied to the dialog after the frame's
//! UI closure returns, so drawing only ever sees a consistent dialog state.

use egui::{vec2, Color32, CornerRadius, Frame, Id, Margin, Stroke};
use hsvpick_core::{ColorPickerDialog, SliderKind, Trigger};

use crate::buttons::RoundedButton;
use crate::swatch::PreviewSwatch;
use crate::track::GradientTrack;
use crate::{sizing, theme};

const BUTTON_WIDTH: f32 = 80.0;

/// What happened to the dialog during a frame.
#[derive(Debug, Clone, PartialEq)]
pub enum PickerAction {
    /// Nothing, or the dialog is closed
    None,
    /// A slider moved and the preview was recomputed
    Changed,
    /// Select was pressed; holds the color if it was written to the trigger
    Committed(Option<String>),
    /// Cancel was pressed or the modal was dismissed
    Cancelled,
}

enum UiEvent {
    Drag(SliderKind, f64),
    Select,
    Cancel,
}

/// Frame of the dialog body.
pub fn dialog_frame() -> Frame {
    Frame::new()
        .fill(theme::PANEL_BG)
        .corner_radius(CornerRadius::same(sizing::PANEL_RADIUS))
        .stroke(Stroke::new(1.0, theme::BORDER))
        .shadow(egui::epaint::Shadow {
            spread: 0,
            blur: 10,
            offset: [0, 4],
            color: Color32::from_black_alpha(30),
        })
        .inner_margin(Margin {
            left: 10,
            right: 10,
            top: 10,
            bottom: 0,
        })
}

/// Shows a [`ColorPickerDialog`] while it is open.
pub struct PickerModal<'a, T: Trigger> {
    dialog: &'a mut ColorPickerDialog<T>,
}

impl<'a, T: Trigger> PickerModal<'a, T> {
    pub fn new(dialog: &'a mut ColorPickerDialog<T>) -> Self {
        Self { dialog }
    }

    /// Egui id of the modal area; unique per dialog.
    pub fn modal_id(dialog: &ColorPickerDialog<T>) -> Id {
        Id::new(("hsvpick_dialog", dialog.id().as_uuid()))
    }

    /// Draw the dialog and apply this frame's input to it.
    pub fn show(self, ctx: &egui::Context) -> PickerAction {
        if !self.dialog.is_open() {
            return PickerAction::None;
        }

        let dialog = &*self.dialog;
        let mut event = None;
        let modal = egui::Modal::new(Self::modal_id(dialog))
            .frame(dialog_frame())
            .show(ctx, |ui| {
                ui.set_width(sizing::DIALOG_WIDTH);
                ui.set_min_height(sizing::DIALOG_HEIGHT);
                ui.spacing_mut().item_spacing = vec2(sizing::CONTROL_SPACING, 8.0);

                ui.horizontal(|ui| {
                    if RoundedButton::new("Cancel").width(BUTTON_WIDTH).show(ui) {
                        event = Some(UiEvent::Cancel);
                    }
                    let swatch_width =
                        (ui.available_width() - BUTTON_WIDTH - sizing::CONTROL_SPACING).max(0.0);
                    PreviewSwatch::new(dialog.preview()).show(ui, swatch_width);
                    if RoundedButton::new("Select")
                        .width(BUTTON_WIDTH)
                        .primary()
                        .show(ui)
                    {
                        event = Some(UiEvent::Select);
                    }
                });

                for kind in SliderKind::ALL {
                    let track = GradientTrack::new(dialog.slider(kind)).label(kind.label());
                    if let Some(value) = track.show(ui) {
                        event = Some(UiEvent::Drag(kind, value));
                    }
                }
            });

        if event.is_none() && modal.should_close() {
            event = Some(UiEvent::Cancel);
        }

        let result = match event {
            None => return PickerAction::None,
            Some(UiEvent::Drag(kind, value)) => {
                self.dialog.drag(kind, value).map(|()| PickerAction::Changed)
            }
            Some(UiEvent::Select) => self.dialog.commit().map(PickerAction::Committed),
            Some(UiEvent::Cancel) => self.dialog.cancel().map(|()| PickerAction::Cancelled),
        };

        result.unwrap_or_else(|e| {
            log::warn!("color picker: {}", e);
            PickerAction::None
        })
    }
}
