//! The picker dialog and its open/change/commit lifecycle.

use std::fmt;

use crate::color::{hex_to_rgb, hsv_to_rgb, hue_color, rgb_to_hsv, Rgb};
use crate::config::PickerConfig;
use crate::error::{PickerError, PickerResult};
use crate::slider::{GradientSlider, SLIDER_RANGE};

use super::state::{DialogId, DialogState, SliderKind, SliderValues};
use super::trigger::{ModalHost, Trigger};

/// Rainbow painted on the hue slider.
pub const HUE_STOPS: [Rgb; 7] = [
    Rgb::new(0xff, 0x00, 0x00),
    Rgb::new(0xff, 0xff, 0x00),
    Rgb::new(0x00, 0xff, 0x00),
    Rgb::new(0x00, 0xff, 0xff),
    Rgb::new(0x00, 0x00, 0xff),
    Rgb::new(0xff, 0x00, 0xff),
    Rgb::new(0xff, 0x00, 0x00),
];

type ColorSelected = Box<dyn FnMut(&str)>;

/// An HSV color picker dialog.
///
/// `T` is the trigger handle the dialog holds while open. Hosts that keep
/// drawing the trigger themselves typically use `Rc<RefCell<_>>`.
pub struct ColorPickerDialog<T: Trigger> {
    id: DialogId,
    state: DialogState,
    hue: GradientSlider,
    saturation: GradientSlider,
    value: GradientSlider,
    preview: Rgb,
    /// Trigger that opened the dialog; only set while open.
    trigger: Option<T>,
    host: Option<Box<dyn ModalHost>>,
    on_color_selected: Option<ColorSelected>,
}

impl<T: Trigger> ColorPickerDialog<T> {
    /// Build a closed dialog seeded with the configured initial color.
    pub fn new(config: PickerConfig) -> PickerResult<Self> {
        let initial = hex_to_rgb(&config.initial_color)?;
        let style = config.slider_style;

        let mut dialog = Self {
            id: DialogId::new(),
            state: DialogState::Closed,
            hue: GradientSlider::new(HUE_STOPS.to_vec(), 0.0)?.style(style),
            saturation: GradientSlider::new(vec![Rgb::WHITE, Rgb::RED], SLIDER_RANGE)?
                .style(style),
            value: GradientSlider::new(vec![Rgb::BLACK, Rgb::RED], SLIDER_RANGE)?.style(style),
            preview: Rgb::RED,
            trigger: None,
            host: None,
            on_color_selected: None,
        };
        dialog.seed(initial);
        Ok(dialog)
    }

    /// Register the callback that receives committed colors.
    pub fn on_color_selected<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&str) + 'static,
    {
        self.on_color_selected = Some(Box::new(callback));
        self
    }

    /// Attach a host that is told when the modal should be shown or hidden.
    pub fn with_host(mut self, host: Box<dyn ModalHost>) -> Self {
        self.host = Some(host);
        self
    }

    pub fn id(&self) -> DialogId {
        self.id
    }

    pub fn state(&self) -> DialogState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == DialogState::Open
    }

    /// Current preview color.
    pub fn preview(&self) -> Rgb {
        self.preview
    }

    pub fn preview_hex(&self) -> String {
        self.preview.to_hex()
    }

    pub fn values(&self) -> SliderValues {
        SliderValues {
            hue: self.hue.value(),
            saturation: self.saturation.value(),
            value: self.value.value(),
        }
    }

    pub fn hue_slider(&self) -> &GradientSlider {
        &self.hue
    }

    pub fn saturation_slider(&self) -> &GradientSlider {
        &self.saturation
    }

    pub fn value_slider(&self) -> &GradientSlider {
        &self.value
    }

    pub fn slider(&self, kind: SliderKind) -> &GradientSlider {
        match kind {
            SliderKind::Hue => &self.hue,
            SliderKind::Saturation => &self.saturation,
            SliderKind::Value => &self.value,
        }
    }

    fn slider_mut(&mut self, kind: SliderKind) -> &mut GradientSlider {
        match kind {
            SliderKind::Hue => &mut self.hue,
            SliderKind::Saturation => &mut self.saturation,
            SliderKind::Value => &mut self.value,
        }
    }

    /// The trigger the dialog is currently open for.
    pub fn active_trigger(&self) -> Option<&T> {
        self.trigger.as_ref()
    }

    /// Open the dialog for `trigger`, seeding the sliders from its color.
    ///
    /// A trigger without a color leaves the previous slider state in place.
    /// A malformed color is rejected before anything changes.
    pub fn open_for(&mut self, trigger: T) -> PickerResult<()> {
        self.require(DialogState::Closed, "open")?;

        let seed = match trigger.current_color() {
            Some(hex) if !hex.trim().is_empty() => Some(hex_to_rgb(hex.trim())?),
            _ => None,
        };

        match seed {
            Some(color) => self.seed(color),
            None => log::debug!("dialog {}: trigger has no color, keeping {}", self.id, self.preview),
        }

        self.trigger = Some(trigger);
        self.state = DialogState::Open;
        if let Some(host) = self.host.as_mut() {
            host.show_modal(self.id);
        }
        log::debug!("dialog {} opened with {}", self.id, self.preview);
        Ok(())
    }

    /// Resync gradients and preview after any slider moved.
    pub fn on_slider_change(&mut self) -> PickerResult<()> {
        self.require(DialogState::Open, "handle slider change")?;
        self.sync_hue_stops();
        self.preview = hsv_to_rgb(self.values().to_hsv());
        log::debug!("dialog {}: preview {}", self.id, self.preview);
        Ok(())
    }

    /// Move one slider as the user would, then resync.
    pub fn drag(&mut self, kind: SliderKind, value: f64) -> PickerResult<()> {
        self.require(DialogState::Open, "drag a slider")?;
        self.slider_mut(kind).drag_to(value);
        self.on_slider_change()
    }

    /// Close without touching the trigger.
    pub fn cancel(&mut self) -> PickerResult<()> {
        self.require(DialogState::Open, "cancel")?;
        log::debug!("dialog {} cancelled", self.id);
        self.close();
        Ok(())
    }

    /// Write the preview color to the trigger if it changed, then close.
    ///
    /// Returns the committed color, or `None` when the trigger already had it.
    pub fn commit(&mut self) -> PickerResult<Option<String>> {
        self.require(DialogState::Open, "commit")?;

        let hex = self.preview.to_hex();
        let mut committed = None;
        if let Some(trigger) = self.trigger.as_mut() {
            let unchanged = trigger
                .current_color()
                .and_then(|current| hex_to_rgb(current.trim()).ok())
                .is_some_and(|current| current == self.preview);

            if !unchanged {
                trigger.set_current_color(&hex);
                if let Some(callback) = self.on_color_selected.as_mut() {
                    callback(&hex);
                }
                log::info!("dialog {} committed {}", self.id, hex);
                committed = Some(hex);
            }
        }

        self.close();
        Ok(committed)
    }

    fn close(&mut self) {
        self.trigger = None;
        self.state = DialogState::Closed;
        if let Some(host) = self.host.as_mut() {
            host.hide_modal(self.id);
        }
    }

    /// Push a color into all three sliders and the preview.
    fn seed(&mut self, color: Rgb) {
        let values = SliderValues::from_hsv(rgb_to_hsv(color));
        self.hue.set_value(values.hue);
        self.saturation.set_value(values.saturation);
        self.value.set_value(values.value);
        self.sync_hue_stops();
        self.preview = color;
    }

    fn sync_hue_stops(&mut self) {
        let color = hue_color(self.hue.normalized());
        self.saturation.set_last_stop(color);
        self.value.set_last_stop(color);
    }

    fn require(&self, expected: DialogState, operation: &'static str) -> PickerResult<()> {
        if self.state != expected {
            return Err(PickerError::InvalidState {
                operation,
                state: self.state,
            });
        }
        Ok(())
    }
}

impl<T: Trigger> fmt::Debug for ColorPickerDialog<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColorPickerDialog")
            .field("id", &self.id)
            .field("state", &self.state)
            .field("values", &self.values())
            .field("preview", &self.preview)
            .field("has_trigger", &self.trigger.is_some())
            .finish()
    }
}
