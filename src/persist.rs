//! Graph persistence: the key-value store interface and the JSON codec.
//!
//! The graph is stored under a fixed key as plain coordinate pairs — each
//! segment carries its two endpoint coordinates, not ids — so the stored
//! shape is independent of the in-memory arena. Loading reconstructs points
//! first and then resolves each stored segment against them by coordinate
//! equality, restoring the id sharing that plain field copies would lose.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::{Graph, Point};
use crate::ui::GraphEditor;

/// Fixed key the serialized graph is stored under.
pub const GRAPH_STORAGE_KEY: &str = "graph";

/// Minimal synchronous key-value persistence interface over strings.
pub trait KeyValueStore {
    /// Reads the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;
    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: String);
    /// Removes the entry under `key`, if present.
    fn remove(&mut self, key: &str);
}

/// In-memory store used in tests and as a session-local fallback.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_owned(), value);
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// Adapter exposing `eframe::Storage` as a [`KeyValueStore`].
///
/// `eframe::Storage` has no removal operation, so an empty string stands in
/// for an absent key and reads filter it out.
pub struct EframeStore<'a>(pub &'a mut dyn eframe::Storage);

impl KeyValueStore for EframeStore<'_> {
    fn get(&self, key: &str) -> Option<String> {
        self.0.get_string(key).filter(|s| !s.is_empty())
    }

    fn set(&mut self, key: &str, value: String) {
        self.0.set_string(key, value);
    }

    fn remove(&mut self, key: &str) {
        self.0.set_string(key, String::new());
    }
}

/// Stored form of a single coordinate pair.
#[derive(Debug, Serialize, Deserialize)]
struct StoredPoint {
    x: f32,
    y: f32,
}

/// Stored form of a segment: its two endpoint coordinates.
#[derive(Debug, Serialize, Deserialize)]
struct StoredSegment {
    p1: StoredPoint,
    p2: StoredPoint,
}

/// Top-level stored graph shape.
#[derive(Debug, Serialize, Deserialize)]
struct StoredGraph {
    points: Vec<StoredPoint>,
    segments: Vec<StoredSegment>,
}

/// Serializes a graph to its stored JSON form.
pub fn encode(graph: &Graph) -> Result<String, serde_json::Error> {
    let stored = StoredGraph {
        points: graph
            .points()
            .iter()
            .map(|p| point_to_stored(p.pos))
            .collect(),
        segments: graph
            .segments()
            .iter()
            .filter_map(|s| {
                let p1 = graph.position(s.a)?;
                let p2 = graph.position(s.b)?;
                Some(StoredSegment {
                    p1: point_to_stored(p1),
                    p2: point_to_stored(p2),
                })
            })
            .collect(),
    };
    serde_json::to_string(&stored)
}

fn point_to_stored(p: Point) -> StoredPoint {
    StoredPoint { x: p.x, y: p.y }
}

/// Parses stored JSON and replaces the contents of `graph` with it.
///
/// On a parse error the graph is left untouched. Points are rebuilt first;
/// each stored segment is then resolved against them by coordinate equality
/// (first match wins — reattachment is ambiguous if two points share exact
/// coordinates). A segment whose endpoints cannot both be resolved is
/// dropped with a warning.
pub fn decode_into(json: &str, graph: &mut Graph) -> Result<(), serde_json::Error> {
    let stored: StoredGraph = serde_json::from_str(json)?;

    graph.dispose();
    for p in &stored.points {
        graph.add_point(Point::new(p.x, p.y));
    }
    for s in &stored.segments {
        let a = resolve(graph, Point::new(s.p1.x, s.p1.y));
        let b = resolve(graph, Point::new(s.p2.x, s.p2.y));
        match (a, b) {
            (Some(a), Some(b)) => {
                if !graph.try_add_segment(a, b) {
                    log::warn!(
                        "dropping stored segment ({},{})-({},{}): rejected by graph invariants",
                        s.p1.x, s.p1.y, s.p2.x, s.p2.y
                    );
                }
            }
            _ => {
                log::warn!(
                    "dropping stored segment ({},{})-({},{}): endpoint not found",
                    s.p1.x, s.p1.y, s.p2.x, s.p2.y
                );
            }
        }
    }
    Ok(())
}

fn resolve(graph: &Graph, pos: Point) -> Option<crate::types::PointId> {
    graph.points().iter().find(|p| p.pos == pos).map(|p| p.id)
}

impl GraphEditor {
    /// Persists the graph under [`GRAPH_STORAGE_KEY`].
    ///
    /// An empty graph removes the stored entry instead of writing one.
    pub fn save(&self, store: &mut dyn KeyValueStore) {
        if self.graph.points().is_empty() && self.graph.segments().is_empty() {
            store.remove(GRAPH_STORAGE_KEY);
            return;
        }
        match encode(&self.graph) {
            Ok(json) => store.set(GRAPH_STORAGE_KEY, json),
            Err(err) => log::error!("failed to serialize graph: {err}"),
        }
    }

    /// Restores the graph from [`GRAPH_STORAGE_KEY`], if present.
    ///
    /// An absent entry is a no-op. A malformed entry leaves the in-memory
    /// graph untouched and logs a warning. On success the interaction state
    /// resets, since previous hover/selection ids no longer exist.
    pub fn load(&mut self, store: &dyn KeyValueStore) {
        let Some(json) = store.get(GRAPH_STORAGE_KEY) else {
            return;
        };
        self.load_from_json(&json);
    }

    /// Same as [`GraphEditor::load`], but from an already-fetched JSON string.
    pub fn load_from_json(&mut self, json: &str) {
        match decode_into(json, &mut self.graph) {
            Ok(()) => self.reset_interaction(),
            Err(err) => log::warn!("failed to parse saved graph: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_editor() -> GraphEditor {
        let mut editor = GraphEditor::default();
        let a = editor.graph.add_point(Point::new(100.0, 100.0));
        let b = editor.graph.add_point(Point::new(200.0, 100.0));
        let c = editor.graph.add_point(Point::new(150.0, 50.0));
        editor.graph.try_add_segment(a, b);
        editor.graph.try_add_segment(b, c);
        editor
    }

    #[test]
    fn test_roundtrip_restores_values_and_identity() {
        let editor = sample_editor();
        let mut store = MemoryStore::default();
        editor.save(&mut store);

        let mut restored = GraphEditor::default();
        restored.load(&store);

        let graph = &restored.graph;
        assert_eq!(graph.points().len(), 3);
        assert_eq!(graph.segments().len(), 2);
        assert!(graph.contains_point(Point::new(100.0, 100.0)));
        assert!(graph.contains_point(Point::new(200.0, 100.0)));
        assert!(graph.contains_point(Point::new(150.0, 50.0)));

        // Each reconstructed segment references ids from the point
        // collection, not independent copies
        for seg in graph.segments() {
            assert!(graph.position(seg.a).is_some());
            assert!(graph.position(seg.b).is_some());
        }
    }

    #[test]
    fn test_stored_shape_is_coordinate_pairs() {
        let editor = sample_editor();
        let json = encode(&editor.graph).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["points"][0]["x"], 100.0);
        assert_eq!(value["points"][0]["y"], 100.0);
        assert_eq!(value["segments"][0]["p1"]["x"], 100.0);
        assert_eq!(value["segments"][0]["p2"]["x"], 200.0);
    }

    #[test]
    fn test_save_empty_graph_removes_entry() {
        let mut store = MemoryStore::default();
        store.set(GRAPH_STORAGE_KEY, "{\"points\":[],\"segments\":[]}".into());

        let editor = GraphEditor::default();
        editor.save(&mut store);
        assert!(store.get(GRAPH_STORAGE_KEY).is_none());

        // Idempotent on a store that no longer has the key
        editor.save(&mut store);
        assert!(store.get(GRAPH_STORAGE_KEY).is_none());
    }

    #[test]
    fn test_load_missing_entry_is_noop() {
        let mut editor = sample_editor();
        let store = MemoryStore::default();
        editor.load(&store);
        assert_eq!(editor.graph.points().len(), 3);
    }

    #[test]
    fn test_malformed_entry_leaves_graph_untouched() {
        let mut editor = sample_editor();
        let mut store = MemoryStore::default();
        store.set(GRAPH_STORAGE_KEY, "{not json".into());

        editor.load(&store);

        assert_eq!(editor.graph.points().len(), 3);
        assert_eq!(editor.graph.segments().len(), 2);
    }

    #[test]
    fn test_unresolvable_segment_endpoint_is_dropped() {
        let mut store = MemoryStore::default();
        store.set(
            GRAPH_STORAGE_KEY,
            concat!(
                "{\"points\":[{\"x\":1.0,\"y\":2.0}],",
                "\"segments\":[{\"p1\":{\"x\":1.0,\"y\":2.0},",
                "\"p2\":{\"x\":9.0,\"y\":9.0}}]}"
            )
            .into(),
        );

        let mut editor = GraphEditor::default();
        editor.load(&store);

        assert_eq!(editor.graph.points().len(), 1);
        assert!(editor.graph.segments().is_empty());
    }

    #[test]
    fn test_load_resets_interaction_state() {
        let mut editor = GraphEditor::default();
        let a = editor.graph.add_point(Point::new(0.0, 0.0));
        editor.select_point(a);
        assert!(editor.selected().is_some());

        let editor_with_data = sample_editor();
        let mut store = MemoryStore::default();
        editor_with_data.save(&mut store);

        editor.load(&store);
        assert!(editor.selected().is_none());
        assert!(editor.hovered().is_none());
    }

    #[test]
    fn test_eframe_store_blank_value_reads_as_absent() {
        struct FakeStorage(HashMap<String, String>);
        impl eframe::Storage for FakeStorage {
            fn get_string(&self, key: &str) -> Option<String> {
                self.0.get(key).cloned()
            }
            fn set_string(&mut self, key: &str, value: String) {
                self.0.insert(key.to_owned(), value);
            }
            fn flush(&mut self) {}
        }

        let mut backing = FakeStorage(HashMap::new());
        let mut store = EframeStore(&mut backing);
        store.set(GRAPH_STORAGE_KEY, "x".into());
        assert_eq!(store.get(GRAPH_STORAGE_KEY).as_deref(), Some("x"));
        store.remove(GRAPH_STORAGE_KEY);
        assert!(store.get(GRAPH_STORAGE_KEY).is_none());
    }

    #[test]
    fn test_segment_reference_removal_survives_roundtrip() {
        let mut store = MemoryStore::default();
        let editor = sample_editor();
        editor.save(&mut store);

        let mut restored = GraphEditor::default();
        restored.load(&store);

        // Removing a restored point cascades through restored segments
        let id = restored
            .graph
            .points()
            .iter()
            .find(|p| p.pos == Point::new(200.0, 100.0))
            .map(|p| p.id)
            .unwrap();
        restored.graph.remove_point(id);
        assert_eq!(restored.graph.points().len(), 2);
        assert!(restored.graph.segments().is_empty());
    }
}
