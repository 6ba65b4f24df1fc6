//! Shared application-wide constants.
//! Centralizes the default style values used across rendering and interaction.

use egui::Color32;

// Canvas
/// Default canvas background fill.
pub const CANVAS_BACKGROUND: Color32 = Color32::from_rgb(0x22, 0xaa, 0x55);

// Points and segments
/// Point disc radius in logical units.
pub const POINT_RADIUS: f32 = 8.0;
/// Point fill color.
pub const POINT_COLOR: Color32 = Color32::BLACK;
/// Segment stroke width in logical units.
pub const SEGMENT_WIDTH: f32 = 2.0;
/// Segment stroke color.
pub const SEGMENT_COLOR: Color32 = Color32::BLACK;

// Selection emphasis
/// Selection ring stroke width in screen pixels (zoom-invariant).
pub const SELECTION_WIDTH: f32 = 2.0;
/// Selection ring color.
pub const SELECTION_COLOR: Color32 = Color32::YELLOW;
/// Gap between the point disc and the selection ring, in logical units.
pub const SELECTION_DISTANCE: f32 = 3.0;

// Hover emphasis
/// Hit-test radius for hovering a point, in screen pixels.
pub const HOVER_THRESHOLD: f32 = 10.0;
/// Hover ring stroke width in screen pixels (zoom-invariant).
pub const HOVER_WIDTH: f32 = 2.0;
/// Hover ring color.
pub const HOVER_COLOR: Color32 = Color32::YELLOW;
/// Gap between the point disc and the hover ring, in logical units.
pub const HOVER_DISTANCE: f32 = 6.0;
/// Dash/gap lengths for the hover ring, in logical units.
pub const HOVER_DASH: [f32; 2] = [3.0, 3.0];

// Segment preview
/// Color of the dashed segment preview drawn from the selection.
pub const PREVIEW_COLOR: Color32 = Color32::YELLOW;
/// Dash/gap lengths for the segment preview, in logical units.
pub const PREVIEW_DASH: [f32; 2] = [3.0, 3.0];

// Zoom
/// Zoom increment applied per wheel notch or zoom button press.
pub const ZOOM_STEP: f32 = 0.1;
/// Smallest permitted zoom factor.
pub const ZOOM_MIN: f32 = 0.1;
/// Largest permitted zoom factor.
pub const ZOOM_MAX: f32 = 10.0;
