//! Cone boundary rays and interior bisectors.
//!
//! Counterpart of CGAL's `Compute_cone_boundaries_2` for the inexact-kernel
//! path: ray `i` is the initial direction rotated counter-clockwise by
//! `2πi / k`. Exact root-of-unity constructions are a kernel concern and out
//! of scope here.

use std::f64::consts::TAU;

use crate::order::{cross, rotate, unitize};
use crate::Vec2;

/// The `k` unit rays partitioning the plane into cones, starting at
/// `initial_direction` and proceeding counter-clockwise.
///
/// Callers validate `k >= 2` (the builders report it as a configuration
/// error). A zero or non-finite initial direction falls back to the positive
/// x-axis.
pub fn cone_rays(k: u32, initial_direction: Vec2) -> Vec<Vec2> {
    debug_assert!(k >= 2);
    let base = unitize(initial_direction).unwrap_or_else(|| Vec2::new(1.0, 0.0));
    let step = TAU / f64::from(k);
    (0..k).map(|i| rotate(base, step * f64::from(i))).collect()
}

/// Counter-clockwise angle from `from` to `to`, in `[0, 2π)`.
pub fn ccw_angle(from: Vec2, to: Vec2) -> f64 {
    let a = cross(from, to).atan2(from.dot(&to));
    if a < 0.0 {
        a + TAU
    } else {
        a
    }
}

/// Interior bisector of the cone swept counter-clockwise from `cw` to `ccw`.
///
/// Rotating `cw` by half the ccw angle keeps this well defined for cones of
/// any width, including the half-plane cones produced by `k = 2` where a
/// line-bisector construction degenerates.
pub fn interior_bisector(cw: Vec2, ccw: Vec2) -> Vec2 {
    rotate(cw, 0.5 * ccw_angle(cw, ccw))
}
