//! Theta-graph construction (Narasimhan & Smid, ch. 4).
//!
//! Within each cone every point connects to the inserted point that is
//! nearest measured along the cone's interior bisector, found by the
//! augmented tree's `minimum_above` query. One sort plus n tree operations
//! per cone gives O(n log n) total construction, which is optimal.

use crate::cones::interior_bisector;
use crate::graph::{SpannerGraph, VertexId};
use crate::order::{rotate_cw90, DirectionOrder, SweepEntry};
use crate::scan_tree::PlaneScanTree;
use crate::Vec2;

use super::{build_rays, construct_spanner, rays_from, ConeScan, SpannerError};

/// Scan structure for one Theta cone: entries keyed by the cw-boundary order,
/// ranked by the bisector-projection order.
pub(crate) struct TreeScan {
    tree: PlaneScanTree<SweepEntry, SweepEntry, DirectionOrder, DirectionOrder>,
}

impl TreeScan {
    pub(crate) fn new(cw: Vec2, ccw: Vec2) -> Self {
        let order_d2 = DirectionOrder::new(cw);
        // Ordering by the direction 90° clockwise of the bisector compares
        // projections along the bisector itself.
        let order_mid = DirectionOrder::new(rotate_cw90(interior_bisector(cw, ccw)));
        Self {
            tree: PlaneScanTree::new(order_d2, order_mid),
        }
    }
}

impl ConeScan for TreeScan {
    fn insert(&mut self, p: SweepEntry) {
        self.tree.insert(p, p);
    }

    fn successor(&self, p: &SweepEntry) -> Option<VertexId> {
        self.tree.minimum_above(p).map(|r| r.vertex)
    }
}

/// Constructs Theta graphs for a fixed set of cone boundary rays.
#[derive(Clone, Debug)]
pub struct ThetaGraphBuilder {
    rays: Vec<Vec2>,
}

impl ThetaGraphBuilder {
    /// `k` cones with the initial ray on the positive x-axis.
    pub fn new(k: u32) -> Result<Self, SpannerError> {
        Self::with_initial_direction(k, Vec2::new(1.0, 0.0))
    }

    /// `k` cones with the initial ray along `initial_direction`.
    pub fn with_initial_direction(k: u32, initial_direction: Vec2) -> Result<Self, SpannerError> {
        Ok(Self {
            rays: build_rays(k, initial_direction)?,
        })
    }

    /// Explicit boundary rays (for irregular cone layouts); the rays must be
    /// in counter-clockwise angular order.
    pub fn from_rays(rays: Vec<Vec2>) -> Result<Self, SpannerError> {
        Ok(Self {
            rays: rays_from(rays)?,
        })
    }

    pub fn number_of_cones(&self) -> usize {
        self.rays.len()
    }

    /// The boundary rays, with the initial direction first.
    pub fn directions(&self) -> &[Vec2] {
        &self.rays
    }

    /// Appends the points as vertices (in input order) and adds the Theta
    /// edges of every cone.
    ///
    /// On error the graph keeps the vertices and the edges of the cones
    /// processed so far. Calling this twice on one graph concatenates vertex
    /// sets; that is the caller's responsibility.
    pub fn construct<I>(&self, points: I, g: &mut SpannerGraph) -> Result<(), SpannerError>
    where
        I: IntoIterator<Item = Vec2>,
    {
        construct_spanner(&self.rays, points, g, |cw, ccw| TreeScan::new(cw, ccw))
    }
}
