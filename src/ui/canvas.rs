//! Viewport: the screen ↔ logical coordinate transform and the pan/zoom/drag
//! engine.
//!
//! Raw pointer coordinates are pixels relative to the canvas surface. The
//! logical transform is `logical = raw * zoom - offset`; the offset is
//! maintained in zoom-scaled units, which is what keeps the zoom-anchoring
//! arithmetic in [`Viewport::change_zoom`] consistent.

use eframe::egui;

use crate::types::Point;
use crate::ui::state::EditorStyle;

/// An in-flight middle-button pan gesture, in logical coordinates.
///
/// The accumulated `offset` stays uncommitted until button-up.
#[derive(Debug, Clone, Copy, Default)]
pub struct DragState {
    /// Logical position where the gesture started.
    pub start: Point,
    /// Logical position of the most recent move.
    pub end: Point,
    /// Uncommitted pan delta, `end - start`.
    pub offset: Point,
    /// Whether a gesture is in progress.
    pub active: bool,
}

/// Maps raw pointer coordinates to logical drawing coordinates under the
/// current zoom and pan, and owns the pan-drag state.
#[derive(Debug, Clone)]
pub struct Viewport {
    zoom: f32,
    offset: Point,
    drag: DragState,
    mouse_raw: Point,
    canvas_rect: egui::Rect,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            offset: Point::new(0.0, 0.0),
            drag: DragState::default(),
            mouse_raw: Point::new(0.0, 0.0),
            canvas_rect: egui::Rect::from_min_size(egui::Pos2::ZERO, egui::Vec2::ZERO),
        }
    }
}

impl Viewport {
    /// Creates a viewport at zoom 1 with no pan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current zoom factor.
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Committed pan offset, in zoom-scaled units.
    pub fn offset(&self) -> Point {
        self.offset
    }

    /// The in-flight pan gesture record.
    pub fn drag(&self) -> DragState {
        self.drag
    }

    /// Last raw pointer position seen by [`Viewport::on_pointer_move`].
    pub fn mouse_raw(&self) -> Point {
        self.mouse_raw
    }

    /// Committed offset plus the uncommitted drag delta.
    pub fn total_offset(&self) -> Point {
        self.offset + self.drag.offset
    }

    /// Establishes this frame's drawing state: records the canvas rect and
    /// clears the surface with the background fill.
    ///
    /// Must run before any draw call of the frame; all drawing then maps
    /// logical coordinates through [`Viewport::to_screen`].
    pub fn reset_frame(&mut self, painter: &egui::Painter, rect: egui::Rect, style: &EditorStyle) {
        self.canvas_rect = rect;
        painter.rect_filled(rect, 0.0, style.background);
    }

    /// Converts a raw surface position to logical space.
    ///
    /// With `subtract_drag_offset` the uncommitted pan delta is removed as
    /// well, so hit-testing stays stable during an active pan.
    pub fn screen_to_logical(&self, raw: Point, subtract_drag_offset: bool) -> Point {
        let p = raw.scale(self.zoom) - self.offset;
        if subtract_drag_offset {
            p - self.drag.offset
        } else {
            p
        }
    }

    /// Converts a logical position to an absolute screen position on the
    /// current canvas.
    pub fn to_screen(&self, p: Point) -> egui::Pos2 {
        let raw = (p + self.total_offset()).scale(1.0 / self.zoom);
        self.canvas_rect.min + egui::vec2(raw.x, raw.y)
    }

    /// Converts a logical length to screen pixels.
    pub fn to_screen_len(&self, len: f32) -> f32 {
        len / self.zoom
    }

    /// Applies one zoom step in `direction` (+1 out, -1 in), clamped to the
    /// configured range.
    ///
    /// When `anchor_at_pointer` is set the logical point under the pointer
    /// is invariant across the change; otherwise the canvas center is the
    /// anchor, using the same offset adjustment.
    pub fn change_zoom(&mut self, direction: f32, anchor_at_pointer: bool, style: &EditorStyle) {
        let new_zoom = (self.zoom + direction * style.zoom_step).clamp(style.zoom_min, style.zoom_max);
        let anchor = if anchor_at_pointer {
            self.mouse_raw
        } else {
            let center = self.canvas_rect.size() / 2.0;
            Point::new(center.x, center.y)
        };
        self.offset = self.offset + anchor.scale(new_zoom - self.zoom);
        self.zoom = new_zoom;
    }

    /// Tracks the raw pointer and, during an active pan, recomputes the
    /// uncommitted drag delta.
    pub fn on_pointer_move(&mut self, raw: Point) {
        self.mouse_raw = raw;
        if self.drag.active {
            self.drag.end = self.screen_to_logical(raw, false);
            self.drag.offset = self.drag.end - self.drag.start;
        }
    }

    /// Starts a pan gesture at the given raw position (auxiliary button
    /// down).
    pub fn begin_pan(&mut self, raw: Point) {
        self.drag.start = self.screen_to_logical(raw, false);
        self.drag.active = true;
    }

    /// Commits the pan delta into the offset and resets the gesture record
    /// (auxiliary button up).
    pub fn end_pan(&mut self) {
        if self.drag.active {
            self.offset = self.offset + self.drag.offset;
            self.drag = DragState::default();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn styled() -> EditorStyle {
        EditorStyle::default()
    }

    fn sized_viewport() -> Viewport {
        let mut vp = Viewport::new();
        vp.canvas_rect = egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(800.0, 600.0));
        vp
    }

    #[test]
    fn test_screen_to_logical_at_identity() {
        let vp = sized_viewport();
        let p = vp.screen_to_logical(Point::new(100.0, 50.0), true);
        assert_eq!(p, Point::new(100.0, 50.0));
    }

    #[test]
    fn test_transform_roundtrip() {
        let mut vp = sized_viewport();
        vp.zoom = 2.5;
        vp.offset = Point::new(37.0, -12.0);

        let raw = Point::new(123.0, 456.0);
        let logical = vp.screen_to_logical(raw, false);
        let screen = vp.to_screen(logical);
        assert!((screen.x - raw.x).abs() < 1e-3);
        assert!((screen.y - raw.y).abs() < 1e-3);
    }

    #[test]
    fn test_zoom_anchored_at_pointer_is_invariant() {
        let style = styled();
        let mut vp = sized_viewport();
        vp.offset = Point::new(40.0, -20.0);
        vp.zoom = 1.3;
        vp.on_pointer_move(Point::new(250.0, 180.0));

        let before = vp.screen_to_logical(vp.mouse_raw(), false);
        vp.change_zoom(1.0, true, &style);
        let after = vp.screen_to_logical(vp.mouse_raw(), false);

        assert!((before.x - after.x).abs() < 1e-3);
        assert!((before.y - after.y).abs() < 1e-3);
    }

    #[test]
    fn test_zoom_anchored_at_center_is_invariant() {
        let style = styled();
        let mut vp = sized_viewport();
        let center = Point::new(400.0, 300.0);

        let before = vp.screen_to_logical(center, false);
        vp.change_zoom(1.0, false, &style);
        let after = vp.screen_to_logical(center, false);

        assert!((before.x - after.x).abs() < 1e-3);
        assert!((before.y - after.y).abs() < 1e-3);
    }

    #[test]
    fn test_zoom_clamps_to_configured_range() {
        let style = styled();
        let mut vp = sized_viewport();
        for _ in 0..200 {
            vp.change_zoom(1.0, true, &style);
        }
        assert_eq!(vp.zoom(), style.zoom_max);
        for _ in 0..200 {
            vp.change_zoom(-1.0, true, &style);
        }
        assert_eq!(vp.zoom(), style.zoom_min);
    }

    #[test]
    fn test_pan_commits_delta_and_resets_record() {
        let mut vp = sized_viewport();

        vp.begin_pan(Point::new(100.0, 100.0));
        assert!(vp.drag().active);
        vp.on_pointer_move(Point::new(160.0, 130.0));
        assert_eq!(vp.drag().offset, Point::new(60.0, 30.0));

        vp.end_pan();
        assert_eq!(vp.offset(), Point::new(60.0, 30.0));
        assert!(!vp.drag().active);
        assert_eq!(vp.drag().offset, Point::new(0.0, 0.0));
    }

    #[test]
    fn test_end_pan_without_gesture_is_noop() {
        let mut vp = sized_viewport();
        vp.end_pan();
        assert_eq!(vp.offset(), Point::new(0.0, 0.0));
    }

    #[test]
    fn test_hit_testing_stable_during_pan() {
        let mut vp = sized_viewport();
        vp.begin_pan(Point::new(0.0, 0.0));
        vp.on_pointer_move(Point::new(50.0, 0.0));

        // Subtracting the drag offset keeps the pre-pan logical frame
        let logical = vp.screen_to_logical(Point::new(50.0, 0.0), true);
        assert_eq!(logical, Point::new(0.0, 0.0));
    }
}
