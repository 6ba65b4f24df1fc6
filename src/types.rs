//! Core data types for the graph sketching tool.
//!
//! This module defines the point/segment collections that make up the
//! editable graph, including the set-semantics mutation API and cascading
//! deletion.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a graph point.
///
/// Segments and the editor's hover/selection state refer to points by id,
/// so repositioning a point moves every segment attached to it.
pub type PointId = Uuid;

/// A 2D coordinate in logical drawing space.
///
/// Points are value-comparable by exact coordinate equality.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f32,
    /// Vertical coordinate.
    pub y: f32,
}

impl Point {
    /// Creates a point from its coordinates.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Converts to an egui screen-space position.
    pub fn to_pos2(self) -> egui::Pos2 {
        egui::pos2(self.x, self.y)
    }

    /// Creates a point from an egui position.
    pub fn from_pos2(pos: egui::Pos2) -> Self {
        Self::new(pos.x, pos.y)
    }
}

/// A point owned by the graph: a stable id plus its current position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GraphPoint {
    /// Identifier referenced by segments and editor state.
    pub id: PointId,
    /// Current position in logical space.
    pub pos: Point,
}

/// An undirected segment between two graph points.
///
/// Value-identity is the unordered endpoint pair; the two endpoints are
/// never the same point.
#[derive(Debug, Clone, Copy, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// One endpoint.
    pub a: PointId,
    /// The other endpoint.
    pub b: PointId,
}

impl Segment {
    /// Creates a segment between two point ids.
    pub fn new(a: PointId, b: PointId) -> Self {
        Self { a, b }
    }

    /// Whether `id` is one of this segment's endpoints.
    pub fn includes(&self, id: PointId) -> bool {
        self.a == id || self.b == id
    }
}

impl PartialEq for Segment {
    fn eq(&self, other: &Self) -> bool {
        other.includes(self.a) && other.includes(self.b)
    }
}

/// The canonical, mutable point/segment collection with set semantics.
///
/// Both collections preserve insertion order: nearest-point ties resolve to
/// the earliest point, and load-time endpoint resolution takes the first
/// coordinate match.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Graph {
    points: Vec<GraphPoint>,
    segments: Vec<Segment>,
}

impl Graph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// All points, in insertion order.
    pub fn points(&self) -> &[GraphPoint] {
        &self.points
    }

    /// All segments, in insertion order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// The current position of `id`, if it is a member.
    pub fn position(&self, id: PointId) -> Option<Point> {
        self.points.iter().find(|p| p.id == id).map(|p| p.pos)
    }

    /// Whether any point is value-equal to `pos`.
    pub fn contains_point(&self, pos: Point) -> bool {
        self.points.iter().any(|p| p.pos == pos)
    }

    /// Appends a point unconditionally and returns its id.
    pub fn add_point(&mut self, pos: Point) -> PointId {
        let id = Uuid::new_v4();
        self.points.push(GraphPoint { id, pos });
        id
    }

    /// Appends a point only if no existing point is value-equal to `pos`.
    ///
    /// Returns the new id, or `None` when a duplicate was rejected.
    pub fn try_add_point(&mut self, pos: Point) -> Option<PointId> {
        if self.contains_point(pos) {
            return None;
        }
        Some(self.add_point(pos))
    }

    /// Moves the point `id` to `pos`. Returns `false` if `id` is not a member.
    pub fn set_position(&mut self, id: PointId, pos: Point) -> bool {
        match self.points.iter_mut().find(|p| p.id == id) {
            Some(point) => {
                point.pos = pos;
                true
            }
            None => false,
        }
    }

    /// Removes a point and, first, every segment incident to it.
    ///
    /// Removing an id that is not a member is a no-op returning `false`.
    pub fn remove_point(&mut self, id: PointId) -> bool {
        if self.position(id).is_none() {
            return false;
        }
        for seg in self.segments_with_point(id) {
            self.remove_segment(seg);
        }
        self.points.retain(|p| p.id != id);
        true
    }

    /// Whether a segment with the same unordered endpoint pair exists.
    pub fn contains_segment(&self, seg: Segment) -> bool {
        self.segments.iter().any(|s| *s == seg)
    }

    /// Adds a segment between `a` and `b` unless it would violate an
    /// invariant.
    ///
    /// Rejected (returning `false`): self-loops, an equal segment already
    /// present, or an endpoint that is not a member of the point collection.
    pub fn try_add_segment(&mut self, a: PointId, b: PointId) -> bool {
        if a == b {
            return false;
        }
        if self.position(a).is_none() || self.position(b).is_none() {
            return false;
        }
        let seg = Segment::new(a, b);
        if self.contains_segment(seg) {
            return false;
        }
        self.segments.push(seg);
        true
    }

    /// Removes the segment with the same unordered endpoint pair, if present.
    pub fn remove_segment(&mut self, seg: Segment) -> bool {
        let len = self.segments.len();
        self.segments.retain(|s| *s != seg);
        self.segments.len() != len
    }

    /// All segments that have `id` as an endpoint.
    pub fn segments_with_point(&self, id: PointId) -> Vec<Segment> {
        self.segments
            .iter()
            .copied()
            .filter(|s| s.includes(id))
            .collect()
    }

    /// Empties both collections in place; the graph instance itself lives on.
    pub fn dispose(&mut self) {
        self.points.clear();
        self.segments.clear();
    }
}
