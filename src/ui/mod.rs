//! User interface components for the graph sketching tool.
//!
//! # Module Organization
//!
//! - `state` - The main application struct and the live style configuration
//! - `canvas` - Viewport: coordinate transform, pan, zoom and drag state
//! - `editor` - The hover/select/drag interaction state machine
//! - `rendering` - Input routing plus persistent-layer and overlay drawing

pub mod canvas;
pub mod editor;
mod rendering;
pub mod state;


pub use canvas::{DragState, Viewport};
pub use editor::{EditorState, GraphEditor};
pub use state::{EditorStyle, SketchApp};

use crate::persist::EframeStore;
use eframe::egui;

impl eframe::App for SketchApp {
    /// Persist the graph between restarts.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        self.editor.save(&mut EframeStore(storage));
    }

    /// Main update function called by egui for each frame.
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                self.toolbar(ui, frame);
            });
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                self.draw_canvas(ui);
            });
    }
}

impl SketchApp {
    /// Save/Load/Clear actions plus center-anchored zoom controls.
    fn toolbar(&mut self, ui: &mut egui::Ui, frame: &mut eframe::Frame) {
        if ui.button("Save").clicked() {
            if let Some(storage) = frame.storage_mut() {
                self.editor.save(&mut EframeStore(storage));
                log::info!("graph saved");
            }
        }
        if ui.button("Load").clicked() {
            if let Some(storage) = frame.storage_mut() {
                self.editor.load(&EframeStore(storage));
                log::info!("graph loaded");
            }
        }
        if ui.button("Clear").clicked() {
            self.editor.dispose();
        }

        ui.separator();

        if ui.button("-").clicked() {
            self.viewport.change_zoom(1.0, false, &self.style);
        }
        if ui.button("+").clicked() {
            self.viewport.change_zoom(-1.0, false, &self.style);
        }
        // The zoom factor scales screen to logical units, so smaller means
        // closer; display its reciprocal as the familiar magnification.
        ui.label(format!("zoom {:.0}%", 100.0 / self.viewport.zoom()));

        ui.separator();
        ui.label(format!(
            "{} points, {} segments",
            self.editor.graph.points().len(),
            self.editor.graph.segments().len()
        ));
    }
}
