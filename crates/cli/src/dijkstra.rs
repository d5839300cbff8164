use std::cmp::Ordering;
use std::collections::BinaryHeap;

use cone_spanners::graph::{SpannerGraph, VertexId};

/// Heap entry ordered so the smallest tentative distance pops first.
/// Distances are finite and non-negative, so `total_cmp` is a total order
/// that agrees with the usual one.
#[derive(Clone, Copy, Debug)]
struct QueueEntry {
    dist: f64,
    vertex: VertexId,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueEntry {}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed on distance for a min-heap.
        other
            .dist
            .total_cmp(&self.dist)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

/// Single-source shortest path distances over the graph, with edges weighted
/// by Euclidean length. Unreachable vertices get `f64::INFINITY`.
pub fn shortest_paths(g: &SpannerGraph, source: VertexId) -> Vec<f64> {
    let mut dist = vec![f64::INFINITY; g.num_vertices()];
    let mut heap = BinaryHeap::new();
    dist[source.0] = 0.0;
    heap.push(QueueEntry {
        dist: 0.0,
        vertex: source,
    });
    while let Some(QueueEntry { dist: d, vertex: u }) = heap.pop() {
        if d > dist[u.0] {
            continue;
        }
        let pu = g.point(u);
        for w in g.neighbors(u) {
            let nd = d + (g.point(w) - pu).norm();
            if nd < dist[w.0] {
                dist[w.0] = nd;
                heap.push(QueueEntry { dist: nd, vertex: w });
            }
        }
    }
    dist
}
