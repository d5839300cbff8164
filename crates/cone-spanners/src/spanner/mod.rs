//! Spanner constructors: the shared cone sweep and its error taxonomy.
//!
//! Purpose
//! - Orchestrate the full construction: add one graph vertex per input point,
//!   then build edges cone by cone. Theta and Yao share the sweep skeleton
//!   (sort by the ccw boundary order, scan while maintaining a structure
//!   keyed by the cw boundary order) and differ only in the scan structure,
//!   so the skeleton lives here once, parameterized by [`ConeScan`].
//!
//! Why this design
//! - Each cone gets a freshly built scan structure that is dropped when the
//!   cone completes; cones run strictly sequentially because each reads the
//!   edge set earlier cones produced (deduplication).
//! - Errors propagate synchronously. After a [`SpannerError::DegenerateCone`]
//!   the graph keeps the vertices and the edges of the cones already
//!   processed; no partial cone is ever visible because the failing cone is
//!   rejected before its sweep starts.

use std::fmt;

use crate::cones::cone_rays;
use crate::graph::{SpannerGraph, VertexId};
use crate::order::{same_orientation, unitize, DirectionOrder, SweepEntry};
use crate::Vec2;

mod theta;
mod yao;

pub use theta::ThetaGraphBuilder;
pub use yao::YaoGraphBuilder;


/// Errors surfaced by the spanner constructors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SpannerError {
    /// Fewer than two cones were requested.
    TooFewCones { k: u32 },
    /// A cone's clockwise and counter-clockwise boundaries coincide.
    DegenerateCone { cone: usize },
}

impl fmt::Display for SpannerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpannerError::TooFewCones { k } => {
                write!(f, "the number of cones must be at least 2 (got {k})")
            }
            SpannerError::DegenerateCone { cone } => {
                write!(
                    f,
                    "cone {cone}: the cw and ccw boundary directions coincide"
                )
            }
        }
    }
}

impl std::error::Error for SpannerError {}

/// Per-cone scan structure capability: the Theta tree and the Yao ordered
/// set both take the points in sweep order and answer "which inserted point
/// follows `p` in this cone".
pub(crate) trait ConeScan {
    fn insert(&mut self, p: SweepEntry);
    fn successor(&self, p: &SweepEntry) -> Option<VertexId>;
}

/// One cone's sweep: sort every vertex by the ccw-boundary order, insert each
/// into the scan structure, and connect it to its successor unless that edge
/// already exists.
pub(crate) fn sweep_cone<S: ConeScan>(g: &mut SpannerGraph, ccw: Vec2, mut scan: S) {
    let d1 = DirectionOrder::new(ccw);
    let mut order: Vec<SweepEntry> = g
        .vertices()
        .map(|v| SweepEntry {
            pos: g.point(v),
            vertex: v,
        })
        .collect();
    order.sort_by(|a, b| d1.cmp_entries(a, b));
    for p in order {
        scan.insert(p);
        if let Some(r) = scan.successor(&p) {
            g.add_edge_if_absent(p.vertex, r);
        }
    }
}

/// Full construction shared by both builders: vertices first, then one sweep
/// per cone `(rays[i], rays[(i + 1) % k])`.
pub(crate) fn construct_spanner<I, S, F>(
    rays: &[Vec2],
    points: I,
    g: &mut SpannerGraph,
    make_scan: F,
) -> Result<(), SpannerError>
where
    I: IntoIterator<Item = Vec2>,
    S: ConeScan,
    F: Fn(Vec2, Vec2) -> S,
{
    for p in points {
        g.add_vertex(p);
    }
    let k = rays.len();
    for i in 0..k {
        let cw = rays[i];
        let ccw = rays[(i + 1) % k];
        if same_orientation(cw, ccw) {
            return Err(SpannerError::DegenerateCone { cone: i });
        }
        sweep_cone(g, ccw, make_scan(cw, ccw));
    }
    Ok(())
}

/// Ray set from a cone count and an initial direction.
pub(crate) fn build_rays(k: u32, initial_direction: Vec2) -> Result<Vec<Vec2>, SpannerError> {
    if k < 2 {
        return Err(SpannerError::TooFewCones { k });
    }
    Ok(cone_rays(k, initial_direction))
}

/// Explicit ray set (unitized). Angular ordering is the caller's
/// precondition; degenerate consecutive pairs surface during construction.
pub(crate) fn rays_from(rays: Vec<Vec2>) -> Result<Vec<Vec2>, SpannerError> {
    if rays.len() < 2 {
        return Err(SpannerError::TooFewCones {
            k: rays.len() as u32,
        });
    }
    Ok(rays
        .into_iter()
        .map(|r| unitize(r).unwrap_or_else(|| Vec2::new(1.0, 0.0)))
        .collect())
}
