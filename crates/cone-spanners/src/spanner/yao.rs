//! Yao-graph construction.
//!
//! Same sweep as the Theta variant, but each point connects to the true
//! Euclidean-nearest inserted point in its cone. The per-cone structure is a
//! plain ordered set keyed by the cw-boundary order; the nearest neighbor is
//! found by a linear scan over the entries after the query point, O(n) per
//! point. That quadratic worst case is inherent to the Yao definition, which
//! asks for the nearest point rather than the next point in order.

use std::collections::BTreeSet;
use std::ops::Bound;

use crate::graph::{SpannerGraph, VertexId};
use crate::order::{cross, SweepEntry};
use crate::Vec2;

use super::{build_rays, construct_spanner, rays_from, ConeScan, SpannerError};

/// Set element carrying its sort key: coordinate along the cw-induced order,
/// then lexicographic position, then vertex index (same total order as
/// `DirectionOrder`, expressed through `Ord` so `BTreeSet` can hold it).
#[derive(Clone, Copy, Debug)]
struct YaoEntry {
    along: f64,
    x: f64,
    y: f64,
    vertex: VertexId,
}

impl YaoEntry {
    fn new(cw: Vec2, p: &SweepEntry) -> Self {
        Self {
            along: cross(cw, p.pos),
            x: p.pos.x,
            y: p.pos.y,
            vertex: p.vertex,
        }
    }

    #[inline]
    fn pos(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

impl PartialEq for YaoEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl Eq for YaoEntry {}

impl PartialOrd for YaoEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for YaoEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.along
            .total_cmp(&other.along)
            .then_with(|| self.x.total_cmp(&other.x))
            .then_with(|| self.y.total_cmp(&other.y))
            .then_with(|| self.vertex.cmp(&other.vertex))
    }
}

/// Scan structure for one Yao cone.
pub(crate) struct LinearScan {
    cw: Vec2,
    set: BTreeSet<YaoEntry>,
}

impl LinearScan {
    pub(crate) fn new(cw: Vec2) -> Self {
        Self {
            cw,
            set: BTreeSet::new(),
        }
    }
}

impl ConeScan for LinearScan {
    fn insert(&mut self, p: SweepEntry) {
        self.set.insert(YaoEntry::new(self.cw, &p));
    }

    fn successor(&self, p: &SweepEntry) -> Option<VertexId> {
        let probe = YaoEntry::new(self.cw, p);
        let mut nearest: Option<(f64, VertexId)> = None;
        for cand in self.set.range((Bound::Excluded(probe), Bound::Unbounded)) {
            let d2 = (cand.pos() - p.pos).norm_squared();
            // Strict comparison: on exact distance ties the first entry in
            // key order wins, like std::min_element in the original.
            if nearest.map_or(true, |(best, _)| d2 < best) {
                nearest = Some((d2, cand.vertex));
            }
        }
        nearest.map(|(_, v)| v)
    }
}

/// Constructs Yao graphs for a fixed set of cone boundary rays.
#[derive(Clone, Debug)]
pub struct YaoGraphBuilder {
    rays: Vec<Vec2>,
}

impl YaoGraphBuilder {
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

    /// Explicit boundary rays in counter-clockwise angular order.
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

    /// Appends the points as vertices (in input order) and adds the Yao
    /// edges of every cone. Same partial-result behavior on error as the
    /// Theta builder.
    pub fn construct<I>(&self, points: I, g: &mut SpannerGraph) -> Result<(), SpannerError>
    where
        I: IntoIterator<Item = Vec2>,
    {
        construct_spanner(&self.rays, points, g, |cw, _ccw| LinearScan::new(cw))
    }
}
