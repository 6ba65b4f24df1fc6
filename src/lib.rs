//! # Graph Sketch
//!
//! An interactive planar graph editor on a pannable, zoomable 2D canvas:
//! - Click empty canvas to place a point; clicking with a selection chains
//!   a segment to it
//! - Click a point and drag to reposition it (attached segments follow)
//! - Right-click to deselect, or to delete the hovered point
//! - Middle-drag to pan, scroll to zoom anchored at the pointer
//! - The graph persists between runs through a key-value store
//!
//! The core pieces are the [`ui::Viewport`] (screen ↔ logical transform and
//! pan/zoom state), the [`types::Graph`] (point/segment collections with
//! set semantics and cascading deletion), the [`ui::GraphEditor`]
//! (hover/select/drag state machine) and the [`persist`] codec.

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod constants;
pub mod geometry;
pub mod persist;
pub mod types;
pub mod ui;

pub use types::{Graph, GraphPoint, Point, PointId, Segment};
pub use ui::SketchApp;

/// Runs the graph sketching application with default settings.
///
/// Initializes the egui window, restores any previously persisted graph and
/// starts the main event loop.
pub fn run_app() -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "Graph Sketch",
        options,
        Box::new(|cc| {
            let mut app = SketchApp::new();
            if let Some(storage) = cc.storage {
                if let Some(json) = storage
                    .get_string(persist::GRAPH_STORAGE_KEY)
                    .filter(|s| !s.is_empty())
                {
                    app.editor.load_from_json(&json);
                }
            }
            Ok(Box::new(app))
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graph_default_is_empty() {
        let graph = Graph::new();
        assert!(graph.points().is_empty());
        assert!(graph.segments().is_empty());
    }

    #[test]
    fn test_app_starts_idle() {
        let app = SketchApp::new();
        assert!(app.editor.selected().is_none());
        assert!(app.editor.hovered().is_none());
        assert_eq!(app.viewport.zoom(), 1.0);
    }
}
