//! Canvas input routing and rendering.
//!
//! Each frame: pointer and wheel input is routed through the viewport into
//! the editor, the viewport establishes the frame transform, graph content
//! is drawn on the persistent layer and hover/selection/preview emphasis on
//! a foreground overlay layer that is rebuilt from scratch every frame.

use eframe::egui;

use super::state::SketchApp;
use crate::types::Point;
use crate::ui::canvas::Viewport;

/// Number of polyline samples used to approximate emphasis rings.
const RING_SEGMENTS: usize = 48;

impl SketchApp {
    /// Renders the main canvas area and handles all pointer interaction.
    pub fn draw_canvas(&mut self, ui: &mut egui::Ui) {
        let (response, painter) =
            ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
        let rect = response.rect;

        self.route_input(ui, &response);

        self.viewport.reset_frame(&painter, rect, &self.style);
        self.draw_graph(&painter);

        // Transient overlay: a foreground layer painter rebuilt every frame
        let overlay_layer = egui::LayerId::new(egui::Order::Foreground, ui.id().with("overlay"));
        let overlay = ui.ctx().layer_painter(overlay_layer).with_clip_rect(rect);
        self.draw_overlay(&overlay);
    }

    /// Translates raw egui pointer/wheel state into viewport and editor
    /// transitions.
    fn route_input(&mut self, ui: &mut egui::Ui, response: &egui::Response) {
        let rect = response.rect;
        let pointer_pos = ui
            .input(|i| i.pointer.hover_pos())
            .or_else(|| response.interact_pointer_pos());

        // Pointer movement first, so presses below see current hover state
        if let Some(pos) = pointer_pos {
            let raw = Point::new(pos.x - rect.min.x, pos.y - rect.min.y);
            self.viewport.on_pointer_move(raw);
            let logical = self.viewport.screen_to_logical(raw, true);
            let hover_radius = self.style.hover_threshold * self.viewport.zoom();
            self.editor.on_pointer_move(logical, hover_radius);
        }

        let over_canvas = pointer_pos.is_some_and(|pos| rect.contains(pos));

        // Wheel zoom, anchored at the pointer. egui's scroll delta has the
        // opposite sign of a browser wheel delta.
        let scroll = ui.input(|i| i.raw_scroll_delta.y);
        if scroll != 0.0 && over_canvas {
            let direction = if scroll > 0.0 { -1.0 } else { 1.0 };
            self.viewport.change_zoom(direction, true, &self.style);
        }

        // Middle-button pan is the viewport's gesture
        if over_canvas && ui.input(|i| i.pointer.button_pressed(egui::PointerButton::Middle)) {
            if let Some(pos) = pointer_pos {
                let raw = Point::new(pos.x - rect.min.x, pos.y - rect.min.y);
                self.viewport.begin_pan(raw);
            }
        }
        if ui.input(|i| i.pointer.button_released(egui::PointerButton::Middle)) {
            self.viewport.end_pan();
        }

        // Primary/secondary buttons drive the editor state machine
        if over_canvas && ui.input(|i| i.pointer.primary_pressed()) {
            self.editor.on_primary_down();
        }
        if over_canvas && ui.input(|i| i.pointer.secondary_pressed()) {
            self.editor.on_secondary_down();
        }
        if ui.input(|i| i.pointer.primary_released() || i.pointer.secondary_released()) {
            self.editor.on_button_up();
        }
    }

    /// Persistent layer: all segments, then all points, with no emphasis.
    fn draw_graph(&self, painter: &egui::Painter) {
        let vp = &self.viewport;
        let style = &self.style;

        for seg in self.editor.graph.segments() {
            if let (Some(a), Some(b)) = (
                self.editor.graph.position(seg.a),
                self.editor.graph.position(seg.b),
            ) {
                painter.line_segment(
                    [vp.to_screen(a), vp.to_screen(b)],
                    egui::Stroke::new(vp.to_screen_len(style.segment_width), style.segment_color),
                );
            }
        }

        for point in self.editor.graph.points() {
            painter.circle_filled(
                vp.to_screen(point.pos),
                vp.to_screen_len(style.point_radius),
                style.point_color,
            );
        }
    }

    /// Overlay layer: hover ring, then segment preview, then selection ring.
    fn draw_overlay(&self, painter: &egui::Painter) {
        let vp = &self.viewport;
        let style = &self.style;

        if let Some(hovered) = self.editor.hovered() {
            if let Some(pos) = self.editor.graph.position(hovered) {
                draw_dashed_ring(
                    painter,
                    vp,
                    pos,
                    style.point_radius + style.hover_distance,
                    egui::Stroke::new(style.hover_width, style.hover_color),
                    style.hover_dash,
                );
            }
        }

        if let Some(selected) = self.editor.selected() {
            let Some(anchor) = self.editor.graph.position(selected) else {
                return;
            };

            // Dashed preview from the selection to the hovered point, or to
            // the pointer when nothing is hovered
            let target = self
                .editor
                .hovered()
                .and_then(|id| self.editor.graph.position(id))
                .unwrap_or(self.editor.mouse());
            let stroke =
                egui::Stroke::new(vp.to_screen_len(style.segment_width), style.preview_color);
            painter.extend(egui::Shape::dashed_line(
                &[vp.to_screen(anchor), vp.to_screen(target)],
                stroke,
                vp.to_screen_len(style.preview_dash[0]),
                vp.to_screen_len(style.preview_dash[1]),
            ));

            painter.circle_stroke(
                vp.to_screen(anchor),
                vp.to_screen_len(style.point_radius + style.selection_distance),
                egui::Stroke::new(style.selection_width, style.selection_color),
            );
        }
    }
}

/// Draws a dashed circle as a dashed closed polyline around `center`.
fn draw_dashed_ring(
    painter: &egui::Painter,
    vp: &Viewport,
    center: Point,
    logical_radius: f32,
    stroke: egui::Stroke,
    dash: [f32; 2],
) {
    let center = vp.to_screen(center);
    let radius = vp.to_screen_len(logical_radius);
    let mut ring: Vec<egui::Pos2> = (0..=RING_SEGMENTS)
        .map(|i| {
            let angle = i as f32 / RING_SEGMENTS as f32 * std::f32::consts::TAU;
            center + radius * egui::vec2(angle.cos(), angle.sin())
        })
        .collect();
    // Close the loop exactly
    ring[RING_SEGMENTS] = ring[0];
    painter.extend(egui::Shape::dashed_line(
        &ring,
        stroke,
        vp.to_screen_len(dash[0]),
        vp.to_screen_len(dash[1]),
    ));
}
