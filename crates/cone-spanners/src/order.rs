//! Direction-induced total orders over points and small vector helpers.
//!
//! A direction `d` orders the plane by signed distance to the line through
//! the origin with direction `d` (equivalently, by the coordinate along `d`
//! rotated 90° counter-clockwise). Ties are broken lexicographically by
//! `(x, y)` and finally by vertex index, so the order is total and injective
//! even for coincident input points. The scan structures rely on that
//! injectivity: no two entries ever compare equal.

use std::cmp::Ordering;

use crate::graph::VertexId;
use crate::scan_tree::Comparator;
use crate::Vec2;

/// z-component of the cross product of `a` and `b`.
#[inline]
pub fn cross(a: Vec2, b: Vec2) -> f64 {
    a.x * b.y - a.y * b.x
}

/// `d` rotated counter-clockwise by `angle` radians.
#[inline]
pub fn rotate(d: Vec2, angle: f64) -> Vec2 {
    let (s, c) = angle.sin_cos();
    Vec2::new(c * d.x - s * d.y, s * d.x + c * d.y)
}

/// `d` rotated clockwise by 90°.
#[inline]
pub fn rotate_cw90(d: Vec2) -> Vec2 {
    Vec2::new(d.y, -d.x)
}

/// Unit vector with the orientation of `d`, or `None` for zero/non-finite input.
#[inline]
pub fn unitize(d: Vec2) -> Option<Vec2> {
    let norm = d.norm();
    if !norm.is_finite() || norm <= 0.0 {
        return None;
    }
    Some(d / norm)
}

/// Whether `a` and `b` point the same way (parallel and equally oriented).
#[inline]
pub fn same_orientation(a: Vec2, b: Vec2) -> bool {
    cross(a, b) == 0.0 && a.dot(&b) > 0.0
}

/// A graph vertex snapshotted for one cone's sweep: position plus id.
///
/// Sweeps compare these instead of looking positions up through the graph, so
/// the graph stays free for edge insertion while a scan structure is alive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SweepEntry {
    pub pos: Vec2,
    pub vertex: VertexId,
}

/// Total order induced by a direction (counterpart of CGAL's
/// `Less_by_direction_2`).
#[derive(Clone, Copy, Debug)]
pub struct DirectionOrder {
    d: Vec2,
}

impl DirectionOrder {
    pub fn new(d: Vec2) -> Self {
        Self { d }
    }

    /// Compare two positions: signed distance to the base line first, then
    /// lexicographic `(x, y)`.
    pub fn cmp_points(&self, p: Vec2, q: Vec2) -> Ordering {
        cross(self.d, p)
            .total_cmp(&cross(self.d, q))
            .then_with(|| p.x.total_cmp(&q.x))
            .then_with(|| p.y.total_cmp(&q.y))
    }

    /// Compare two sweep entries; falls back to the vertex index so the order
    /// is injective even for coincident points.
    pub fn cmp_entries(&self, a: &SweepEntry, b: &SweepEntry) -> Ordering {
        self.cmp_points(a.pos, b.pos)
            .then_with(|| a.vertex.cmp(&b.vertex))
    }
}

impl Comparator<SweepEntry> for DirectionOrder {
    #[inline]
    fn cmp(&self, a: &SweepEntry, b: &SweepEntry) -> Ordering {
        self.cmp_entries(a, b)
    }
}
