//! Application state: the main app struct and the live style configuration.

use eframe::egui;

use crate::constants;
use crate::ui::canvas::Viewport;
use crate::ui::editor::GraphEditor;

/// Live configuration consumed by drawing and hit-testing.
///
/// The struct is passed by reference into every draw and hit-test call so
/// values are read fresh each frame, never cached by the core.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorStyle {
    /// Canvas background fill.
    pub background: egui::Color32,

    /// Point disc radius in logical units.
    pub point_radius: f32,
    /// Point fill color.
    pub point_color: egui::Color32,
    /// Segment stroke width in logical units.
    pub segment_width: f32,
    /// Segment stroke color.
    pub segment_color: egui::Color32,

    /// Selection ring stroke width in screen pixels.
    pub selection_width: f32,
    /// Selection ring color.
    pub selection_color: egui::Color32,
    /// Gap between point disc and selection ring, in logical units.
    pub selection_distance: f32,

    /// Hover hit-test radius in screen pixels (scaled by zoom when applied).
    pub hover_threshold: f32,
    /// Hover ring stroke width in screen pixels.
    pub hover_width: f32,
    /// Hover ring color.
    pub hover_color: egui::Color32,
    /// Gap between point disc and hover ring, in logical units.
    pub hover_distance: f32,
    /// Hover ring dash/gap lengths in logical units.
    pub hover_dash: [f32; 2],

    /// Segment preview color.
    pub preview_color: egui::Color32,
    /// Segment preview dash/gap lengths in logical units.
    pub preview_dash: [f32; 2],

    /// Zoom increment per step.
    pub zoom_step: f32,
    /// Smallest permitted zoom factor.
    pub zoom_min: f32,
    /// Largest permitted zoom factor.
    pub zoom_max: f32,
}

impl Default for EditorStyle {
    fn default() -> Self {
        Self {
            background: constants::CANVAS_BACKGROUND,
            point_radius: constants::POINT_RADIUS,
            point_color: constants::POINT_COLOR,
            segment_width: constants::SEGMENT_WIDTH,
            segment_color: constants::SEGMENT_COLOR,
            selection_width: constants::SELECTION_WIDTH,
            selection_color: constants::SELECTION_COLOR,
            selection_distance: constants::SELECTION_DISTANCE,
            hover_threshold: constants::HOVER_THRESHOLD,
            hover_width: constants::HOVER_WIDTH,
            hover_color: constants::HOVER_COLOR,
            hover_distance: constants::HOVER_DISTANCE,
            hover_dash: constants::HOVER_DASH,
            preview_color: constants::PREVIEW_COLOR,
            preview_dash: constants::PREVIEW_DASH,
            zoom_step: constants::ZOOM_STEP,
            zoom_min: constants::ZOOM_MIN,
            zoom_max: constants::ZOOM_MAX,
        }
    }
}

/// The main application: graph editor, viewport and live style.
///
/// Implements `eframe::App`; the update loop routes pointer input through
/// the viewport into the editor and then draws the frame.
#[derive(Debug, Default)]
pub struct SketchApp {
    /// Interaction state machine and the graph it edits.
    pub editor: GraphEditor,
    /// Coordinate transform and pan/zoom state.
    pub viewport: Viewport,
    /// Live style configuration, read fresh every frame.
    pub style: EditorStyle,
}

impl SketchApp {
    /// Creates the app with default style over an empty graph.
    pub fn new() -> Self {
        Self::default()
    }
}
