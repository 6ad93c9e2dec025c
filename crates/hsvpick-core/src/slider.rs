//! Slider model whose track is a linear gradient over mutable color stops.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::error::{PickerError, PickerResult};

/// Domain of every slider value.
pub const SLIDER_RANGE: f64 = 1024.0;

/// Track shadow drawn under a slider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackShadow {
    pub blur: f32,
    pub spread: f32,
    pub offset: [f32; 2],
    pub color: Rgb,
}

impl Default for TrackShadow {
    fn default() -> Self {
        Self {
            blur: 2.0,
            spread: 0.0,
            offset: [0.0, 2.0],
            color: Rgb::new(0x9f, 0x9f, 0x9f),
        }
    }
}

/// Cosmetic parameters of a slider. The model never reads these; they are
/// passed through to whatever paints the track.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderStyle {
    /// Height of the gradient track
    pub track_height: f32,
    /// Corner radius of the track
    pub corner_radius: f32,
    /// Horizontal inset of the track inside the slider
    pub margin: f32,
    /// Thumb fill as RGBA
    pub thumb_color: [u8; 4],
    /// Thumb radius
    pub thumb_radius: f32,
    pub shadow: Option<TrackShadow>,
}

impl Default for SliderStyle {
    fn default() -> Self {
        Self {
            track_height: 28.0,
            corner_radius: 14.0,
            margin: 9.0,
            thumb_color: [0xff, 0xff, 0xff, 0xaa],
            thumb_radius: 10.0,
            shadow: Some(TrackShadow::default()),
        }
    }
}

type ChangeCallback = Box<dyn FnMut(f64)>;

/// A slider with a gradient track.
///
/// Values live in `[0, SLIDER_RANGE]`. Programmatic updates go through
/// [`set_value`](Self::set_value) and never notify; user interaction goes
/// through [`drag_to`](Self::drag_to) and notifies the on-change callback.
///
/// The callback is an observer hook for code that uses a slider on its own.
/// Sliders owned by a [`ColorPickerDialog`](crate::ColorPickerDialog) are
/// resynced by the dialog itself through
/// [`ColorPickerDialog::drag`](crate::ColorPickerDialog::drag).
pub struct GradientSlider {
    stops: Vec<Rgb>,
    value: f64,
    /// Bumped whenever the stops change; lets callers that cache painted
    /// tracks detect stop changes.
    revision: u64,
    style: SliderStyle,
    on_change: Option<ChangeCallback>,
}

impl GradientSlider {
    /// Create a slider. Fails with `InvalidGradient` for fewer than 2 stops.
    pub fn new(stops: Vec<Rgb>, value: f64) -> PickerResult<Self> {
        validate_stops(&stops)?;
        Ok(Self {
            stops,
            value: clamp_value(value),
            revision: 0,
            style: SliderStyle::default(),
            on_change: None,
        })
    }

    /// Register an observer for user interaction.
    pub fn on_change<F>(mut self, callback: F) -> Self
    where
        F: FnMut(f64) + 'static,
    {
        self.on_change = Some(Box::new(callback));
        self
    }

    /// Set the cosmetic style.
    pub fn style(mut self, style: SliderStyle) -> Self {
        self.style = style;
        self
    }

    pub fn slider_style(&self) -> &SliderStyle {
        &self.style
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Value scaled into `[0, 1]`.
    pub fn normalized(&self) -> f64 {
        self.value / SLIDER_RANGE
    }

    pub fn stops(&self) -> &[Rgb] {
        &self.stops
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Set the value without notifying.
    pub fn set_value(&mut self, value: f64) {
        self.value = clamp_value(value);
    }

    /// Set the value as the result of user interaction.
    ///
    /// Returns true if the value changed. The callback runs either way, since
    /// a drag that lands on the same value is still an interaction.
    pub fn drag_to(&mut self, value: f64) -> bool {
        let value = clamp_value(value);
        let changed = value != self.value;
        self.value = value;
        if let Some(callback) = self.on_change.as_mut() {
            callback(value);
        }
        changed
    }

    /// Replace the gradient stops, keeping the value.
    pub fn set_gradient_stops(&mut self, stops: Vec<Rgb>) -> PickerResult<()> {
        validate_stops(&stops)?;
        self.stops = stops;
        self.revision += 1;
        Ok(())
    }

    /// Rewrite the final stop in place.
    pub fn set_last_stop(&mut self, color: Rgb) {
        // Construction guarantees at least 2 stops.
        if let Some(last) = self.stops.last_mut() {
            if *last != color {
                *last = color;
                self.revision += 1;
            }
        }
    }

    /// Color of the track at `t` in `[0, 1]`, stops evenly spaced.
    pub fn color_at(&self, t: f64) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let segments = (self.stops.len() - 1) as f64;
        let position = t * segments;
        let index = (position.floor() as usize).min(self.stops.len() - 2);
        let local = position - index as f64;
        lerp_rgb(self.stops[index], self.stops[index + 1], local)
    }
}

impl fmt::Debug for GradientSlider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GradientSlider")
            .field("stops", &self.stops)
            .field("value", &self.value)
            .field("revision", &self.revision)
            .field("style", &self.style)
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}

fn validate_stops(stops: &[Rgb]) -> PickerResult<()> {
    if stops.len() < 2 {
        return Err(PickerError::InvalidGradient { stops: stops.len() });
    }
    Ok(())
}

fn clamp_value(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, SLIDER_RANGE)
    }
}

fn lerp_rgb(a: Rgb, b: Rgb, t: f64) -> Rgb {
    let channel = |x: u8, y: u8| (x as f64 + (y as f64 - x as f64) * t).round() as u8;
    Rgb::new(channel(a.r, b.r), channel(a.g, b.g), channel(a.b, b.b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn two_stop() -> GradientSlider {
        GradientSlider::new(vec![Rgb::WHITE, Rgb::RED], SLIDER_RANGE).unwrap()
    }

    #[test]
    fn test_rejects_short_gradients() {
        assert_eq!(
            GradientSlider::new(vec![Rgb::RED], 0.0).unwrap_err(),
            PickerError::InvalidGradient { stops: 1 }
        );
        assert!(GradientSlider::new(Vec::new(), 0.0).is_err());

        let mut slider = two_stop();
        assert!(slider.set_gradient_stops(vec![Rgb::BLACK]).is_err());
        assert_eq!(slider.stops(), &[Rgb::WHITE, Rgb::RED]);
    }

    #[test]
    fn test_value_is_clamped() {
        let mut slider = two_stop();
        slider.set_value(2000.0);
        assert_eq!(slider.value(), SLIDER_RANGE);
        slider.set_value(-3.0);
        assert_eq!(slider.value(), 0.0);
        slider.set_value(f64::NAN);
        assert_eq!(slider.value(), 0.0);
    }

    #[test]
    fn test_set_value_does_not_notify() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = calls.clone();
        let mut slider = two_stop().on_change(move |v| sink.borrow_mut().push(v));

        slider.set_value(100.0);
        assert!(calls.borrow().is_empty());

        assert!(slider.drag_to(512.0));
        assert!(!slider.drag_to(512.0));
        assert_eq!(*calls.borrow(), vec![512.0, 512.0]);
        assert!((slider.normalized() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_stops_change_keeps_value() {
        let mut slider = two_stop();
        slider.set_value(300.0);
        let before = slider.revision();

        slider
            .set_gradient_stops(vec![Rgb::BLACK, Rgb::new(0, 0, 255), Rgb::WHITE])
            .unwrap();
        assert_eq!(slider.value(), 300.0);
        assert_eq!(slider.stops().len(), 3);
        assert!(slider.revision() > before);

        let before = slider.revision();
        slider.set_last_stop(Rgb::RED);
        assert_eq!(slider.stops().last(), Some(&Rgb::RED));
        assert_eq!(slider.revision(), before + 1);

        // Same color again is not a repaint
        slider.set_last_stop(Rgb::RED);
        assert_eq!(slider.revision(), before + 1);
    }

    #[test]
    fn test_color_at_interpolates() {
        let slider = GradientSlider::new(vec![Rgb::BLACK, Rgb::WHITE], 0.0).unwrap();
        assert_eq!(slider.color_at(0.0), Rgb::BLACK);
        assert_eq!(slider.color_at(1.0), Rgb::WHITE);
        assert_eq!(slider.color_at(0.5), Rgb::new(128, 128, 128));

        let rainbow = GradientSlider::new(
            vec![Rgb::RED, Rgb::new(0, 255, 0), Rgb::new(0, 0, 255)],
            0.0,
        )
        .unwrap();
        assert_eq!(rainbow.color_at(0.5), Rgb::new(0, 255, 0));
        assert_eq!(rainbow.color_at(2.0), Rgb::new(0, 0, 255));
    }

    #[test]
    fn test_style_defaults_from_json() {
        let style: SliderStyle = serde_json::from_str(r#"{"track_height": 20.0}"#).unwrap();
        assert_eq!(style.track_height, 20.0);
        assert_eq!(style.corner_radius, 14.0);
        assert_eq!(style.thumb_color, [0xff, 0xff, 0xff, 0xaa]);
    }
}
