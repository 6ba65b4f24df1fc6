//! Pure 2D vector math and nearest-neighbor search over graph points.

use std::ops::{Add, Sub};

use crate::types::{GraphPoint, Point, PointId};

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Point {
    /// Returns this point scaled by `factor`, leaving `self` untouched.
    pub fn scale(self, factor: f32) -> Point {
        Point::new(self.x * factor, self.y * factor)
    }
}

/// Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f32 {
    (a.x - b.x).hypot(a.y - b.y)
}

/// Finds the candidate nearest to `target` that lies strictly within
/// `threshold`.
///
/// Candidates are scanned in order and only a strictly smaller distance
/// replaces the current best, so ties keep the earliest candidate. Pass
/// `f32::INFINITY` to search without a cutoff.
pub fn nearest_point(target: Point, candidates: &[GraphPoint], threshold: f32) -> Option<PointId> {
    let mut min_dist = f32::INFINITY;
    let mut nearest = None;
    for candidate in candidates {
        let dist = distance(target, candidate.pos);
        if dist < min_dist && dist < threshold {
            min_dist = dist;
            nearest = Some(candidate.id);
        }
    }
    nearest
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Graph;

    #[test]
    fn test_vector_ops_are_pure() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(3.0, 5.0);

        assert_eq!(a + b, Point::new(4.0, 7.0));
        assert_eq!(b - a, Point::new(2.0, 3.0));
        assert_eq!(a.scale(2.0), Point::new(2.0, 4.0));
        // Operands are Copy and unchanged
        assert_eq!(a, Point::new(1.0, 2.0));
        assert_eq!(b, Point::new(3.0, 5.0));
    }

    #[test]
    fn test_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(distance(a, b), 5.0);
        assert_eq!(distance(a, a), 0.0);
    }

    #[test]
    fn test_nearest_point_respects_threshold() {
        let mut graph = Graph::new();
        let id = graph.add_point(Point::new(6.0, 0.0));
        let target = Point::new(0.0, 0.0);

        // Nearest candidate sits at distance 6
        assert_eq!(nearest_point(target, graph.points(), 5.0), None);
        assert_eq!(nearest_point(target, graph.points(), 7.0), Some(id));
    }

    #[test]
    fn test_nearest_point_threshold_is_strict() {
        let mut graph = Graph::new();
        graph.add_point(Point::new(5.0, 0.0));
        assert_eq!(nearest_point(Point::new(0.0, 0.0), graph.points(), 5.0), None);
    }

    #[test]
    fn test_nearest_point_tie_keeps_earliest() {
        let mut graph = Graph::new();
        let first = graph.add_point(Point::new(1.0, 0.0));
        let _second = graph.add_point(Point::new(-1.0, 0.0));

        let found = nearest_point(Point::new(0.0, 0.0), graph.points(), f32::INFINITY);
        assert_eq!(found, Some(first));
    }

    #[test]
    fn test_nearest_point_empty_candidates() {
        let graph = Graph::new();
        assert_eq!(nearest_point(Point::new(0.0, 0.0), graph.points(), f32::INFINITY), None);
    }
}
