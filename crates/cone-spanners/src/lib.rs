//! Cone-based geometric spanners (Theta and Yao graphs) in the plane.
//!
//! Purpose
//! - Partition the directions around each point into `k` angular cones and
//!   connect every point to one well-chosen neighbor per cone: the nearest
//!   point measured along the cone bisector (Theta) or the Euclidean-nearest
//!   point in the cone (Yao). The result is a sparse graph approximating
//!   complete-graph distances within a bounded stretch factor.
//!
//! Why this design
//! - Both constructions share one plane-sweep skeleton (sort by one boundary
//!   direction, scan while maintaining a per-cone structure keyed by the other
//!   boundary); they differ only in the scan structure, so the sweep is
//!   parameterized over that capability instead of being written twice.
//! - The Theta sweep uses an augmented balanced search tree
//!   ([`scan_tree::PlaneScanTree`]) for O(n log n) total construction, per
//!   Narasimhan and Smid, *Geometric Spanner Networks*, ch. 4.
//!
//! Entry points: [`spanner::ThetaGraphBuilder`] and
//! [`spanner::YaoGraphBuilder`], both writing into a [`graph::SpannerGraph`].

pub mod cones;
pub mod graph;
pub mod order;
pub mod points;
pub mod scan_tree;
pub mod spanner;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector2;

/// 2D vector/point type used throughout the crate.
pub type Vec2 = Vector2<f64>;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::graph::{SpannerGraph, VertexId};
    pub use crate::spanner::{SpannerError, ThetaGraphBuilder, YaoGraphBuilder};
    pub use crate::Vec2;
}
