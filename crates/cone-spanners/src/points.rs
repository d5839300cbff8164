//! Reproducible point sets for tests, benches and examples.
//!
//! Seeded draws only: the same `(n, seed)` always yields the same set, so
//! benchmarks and determinism tests can regenerate their inputs.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::Vec2;

/// `n` points drawn uniformly from the square `[-half_extent, half_extent]²`.
pub fn sample_square(n: usize, half_extent: f64, seed: u64) -> Vec<Vec2> {
    let h = half_extent.abs().max(f64::MIN_POSITIVE);
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| Vec2::new(rng.gen_range(-h..=h), rng.gen_range(-h..=h)))
        .collect()
}

/// Regular `rows × cols` grid with the given spacing, row-major from the
/// origin.
pub fn grid(rows: usize, cols: usize, spacing: f64) -> Vec<Vec2> {
    let mut pts = Vec::with_capacity(rows * cols);
    for r in 0..rows {
        for c in 0..cols {
            pts.push(Vec2::new(c as f64 * spacing, r as f64 * spacing));
        }
    }
    pts
}
