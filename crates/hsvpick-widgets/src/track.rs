//! Gradient slider track with a draggable thumb.

use egui::{pos2, vec2, Color32, CornerRadius, CursorIcon, Mesh, Rect, Sense, Stroke, Ui};
use hsvpick_core::{GradientSlider, Rgb, SliderStyle, SLIDER_RANGE};

use crate::swatch::to_color32;

/// Build a mesh painting `stops` as a left-to-right linear gradient over `rect`.
///
/// Stops are evenly spaced; each contributes a top and bottom vertex.
pub fn gradient_mesh(rect: Rect, stops: &[Rgb]) -> Mesh {
    let mut mesh = Mesh::default();
    if stops.len() < 2 {
        return mesh;
    }

    let segments = (stops.len() - 1) as f32;
    for (i, stop) in stops.iter().enumerate() {
        let x = rect.left() + rect.width() * i as f32 / segments;
        let color = to_color32(*stop);
        mesh.colored_vertex(pos2(x, rect.top()), color);
        mesh.colored_vertex(pos2(x, rect.bottom()), color);
    }
    for i in 0..(stops.len() as u32 - 1) {
        let top_left = 2 * i;
        mesh.add_triangle(top_left, top_left + 1, top_left + 2);
        mesh.add_triangle(top_left + 1, top_left + 2, top_left + 3);
    }
    mesh
}

/// Paints a [`GradientSlider`] and turns pointer input into new values.
pub struct GradientTrack<'a> {
    slider: &'a GradientSlider,
    width: Option<f32>,
    label: &'a str,
}

impl<'a> GradientTrack<'a> {
    pub fn new(slider: &'a GradientSlider) -> Self {
        Self {
            slider,
            width: None,
            label: "",
        }
    }

    /// Fixed width; defaults to the available width.
    pub fn width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    /// Name shown in the hover text.
    pub fn label(mut self, label: &'a str) -> Self {
        self.label = label;
        self
    }

    /// Hover text: the label followed by the track color under the thumb.
    pub fn hover_text(&self) -> String {
        let hex = self.slider.color_at(self.slider.normalized()).to_hex();
        if self.label.is_empty() {
            hex
        } else {
            format!("{}  {}", self.label, hex)
        }
    }

    /// Track rect inside the allocated slider rect.
    fn track_rect(rect: Rect, style: &SliderStyle) -> Rect {
        let height = style.track_height.min(rect.height());
        Rect::from_center_size(
            rect.center(),
            vec2((rect.width() - 2.0 * style.margin).max(0.0), height),
        )
    }

    /// Rounding of the track ends.
    fn end_radius(track: Rect, style: &SliderStyle) -> f32 {
        style.corner_radius.clamp(0.0, track.height() / 2.0)
    }

    /// Part of the track the gradient and thumb travel over.
    fn travel_rect(track: Rect, style: &SliderStyle) -> Rect {
        let inset = Self::end_radius(track, style);
        Rect::from_min_max(
            pos2(track.left() + inset, track.top()),
            pos2((track.right() - inset).max(track.left() + inset), track.bottom()),
        )
    }

    /// Slider value for a pointer x inside `travel`.
    pub fn value_at(travel: Rect, x: f32) -> f64 {
        if travel.width() <= 0.0 {
            return 0.0;
        }
        let t = ((x - travel.left()) / travel.width()).clamp(0.0, 1.0);
        t as f64 * SLIDER_RANGE
    }

    /// Show the track. Returns the new value if the user moved the thumb.
    pub fn show(self, ui: &mut Ui) -> Option<f64> {
        let style = self.slider.slider_style();
        let width = self.width.unwrap_or_else(|| ui.available_width());
        let height = style.track_height.max(style.thumb_radius * 2.0) + 4.0;
        let (rect, response) = ui.allocate_exact_size(vec2(width, height), Sense::click_and_drag());

        let track = Self::track_rect(rect, style);
        let travel = Self::travel_rect(track, style);

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();
            let end_radius = Self::end_radius(track, style);
            let rounding = CornerRadius::same(end_radius.round() as u8);

            if let Some(shadow) = style.shadow {
                let shadow_rect = track
                    .translate(vec2(shadow.offset[0], shadow.offset[1]))
                    .expand(shadow.spread + shadow.blur / 2.0);
                let color = Color32::from_rgba_unmultiplied(
                    shadow.color.r,
                    shadow.color.g,
                    shadow.color.b,
                    90,
                );
                painter.rect_filled(shadow_rect, rounding, color);
            }

            let stops = self.slider.stops();
            if let (Some(first), Some(last)) = (stops.first(), stops.last()) {
                // Rounded ends in the edge colors, gradient body on top
                let cap = vec2(end_radius * 2.0, track.height());
                painter.rect_filled(
                    Rect::from_min_size(track.left_top(), cap),
                    rounding,
                    to_color32(*first),
                );
                painter.rect_filled(
                    Rect::from_min_size(pos2(track.right() - cap.x, track.top()), cap),
                    rounding,
                    to_color32(*last),
                );
            }
            painter.add(egui::Shape::mesh(gradient_mesh(travel, stops)));

            let [r, g, b, a] = style.thumb_color;
            let thumb_x = travel.left() + travel.width() * self.slider.normalized() as f32;
            painter.circle(
                pos2(thumb_x, track.center().y),
                style.thumb_radius,
                Color32::from_rgba_unmultiplied(r, g, b, a),
                Stroke::new(1.0, Color32::from_black_alpha(40)),
            );
        }

        let mut changed = None;
        if response.dragged() || response.clicked() {
            if let Some(pointer) = response.interact_pointer_pos() {
                changed = Some(Self::value_at(travel, pointer.x));
            }
        }
        response
            .on_hover_cursor(CursorIcon::Grab)
            .on_hover_text(self.hover_text());
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gradient_mesh_layout() {
        let rect = Rect::from_min_size(pos2(10.0, 0.0), vec2(60.0, 20.0));
        let stops = [Rgb::RED, Rgb::new(0, 255, 0), Rgb::new(0, 0, 255), Rgb::WHITE];
        let mesh = gradient_mesh(rect, &stops);

        assert_eq!(mesh.vertices.len(), 8);
        assert_eq!(mesh.indices.len(), 3 * 2 * 3);
        assert!((mesh.vertices[0].pos.x - 10.0).abs() < f32::EPSILON);
        assert!((mesh.vertices[2].pos.x - 30.0).abs() < f32::EPSILON);
        assert!((mesh.vertices[7].pos.x - 70.0).abs() < f32::EPSILON);
        assert_eq!(mesh.vertices[0].color, Color32::from_rgb(255, 0, 0));
        assert_eq!(mesh.vertices[7].color, Color32::WHITE);
    }

    #[test]
    fn test_gradient_mesh_needs_two_stops() {
        let rect = Rect::from_min_size(pos2(0.0, 0.0), vec2(10.0, 10.0));
        assert!(gradient_mesh(rect, &[Rgb::RED]).vertices.is_empty());
    }

    #[test]
    fn test_value_at_maps_travel_to_range() {
        let travel = Rect::from_min_size(pos2(20.0, 0.0), vec2(100.0, 28.0));
        assert_eq!(GradientTrack::value_at(travel, 20.0), 0.0);
        assert_eq!(GradientTrack::value_at(travel, 120.0), SLIDER_RANGE);
        assert!((GradientTrack::value_at(travel, 70.0) - SLIDER_RANGE / 2.0).abs() < 1e-3);
        assert_eq!(GradientTrack::value_at(travel, -50.0), 0.0);
        assert_eq!(GradientTrack::value_at(travel, 500.0), SLIDER_RANGE);

        let degenerate = Rect::from_min_size(pos2(0.0, 0.0), vec2(0.0, 28.0));
        assert_eq!(GradientTrack::value_at(degenerate, 5.0), 0.0);
    }

    #[test]
    fn test_travel_excludes_rounded_ends() {
        let style = SliderStyle::default();
        let rect = Rect::from_min_size(pos2(0.0, 0.0), vec2(400.0, 32.0));
        let track = GradientTrack::track_rect(rect, &style);
        assert!((track.left() - 9.0).abs() < 1e-4);
        assert!((track.height() - 28.0).abs() < 1e-4);

        let travel = GradientTrack::travel_rect(track, &style);
        assert!((travel.left() - 23.0).abs() < 1e-4);
        assert!((travel.right() - 377.0).abs() < 1e-4);
    }

    #[test]
    fn test_hover_text_names_thumb_color() {
        let slider = GradientSlider::new(vec![Rgb::BLACK, Rgb::WHITE], SLIDER_RANGE).unwrap();
        assert_eq!(GradientTrack::new(&slider).hover_text(), "#ffffff");
        assert_eq!(
            GradientTrack::new(&slider).label("Value").hover_text(),
            "Value  #ffffff"
        );

        let hue = GradientSlider::new(vec![Rgb::RED, Rgb::new(0, 0, 255)], 0.0).unwrap();
        assert_eq!(GradientTrack::new(&hue).label("Hue").hover_text(), "Hue  #ff0000");
    }

    #[test]
    fn test_show_without_input_reports_nothing() {
        let ctx = egui::Context::default();
        let slider = GradientSlider::new(vec![Rgb::WHITE, Rgb::RED], 512.0).unwrap();

        let mut result = Some(0.0);
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                result = GradientTrack::new(&slider).width(300.0).show(ui);
            });
        });
        assert_eq!(result, None);
    }
}
