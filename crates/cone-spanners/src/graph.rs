//! Vertex/edge container the spanner constructors write into.
//!
//! Plain `Vec`-backed storage: vertex positions, an undirected edge list, and
//! per-vertex adjacency lists of edge indices. Vertex ids are insertion
//! indices and nothing is ever removed, which is exactly what the sweep
//! relies on (vertex index == input order index).

use crate::Vec2;

/// Identifier of a graph vertex (its insertion index).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub usize);

/// Undirected graph with one 2D point per vertex.
#[derive(Clone, Debug, Default)]
pub struct SpannerGraph {
    points: Vec<Vec2>,
    edges: Vec<(VertexId, VertexId)>,
    adj: Vec<Vec<usize>>, // edge indices incident to each vertex
}

impl SpannerGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a vertex and returns its id.
    pub fn add_vertex(&mut self, p: Vec2) -> VertexId {
        let id = VertexId(self.points.len());
        self.points.push(p);
        self.adj.push(Vec::new());
        id
    }

    /// Position of vertex `v`.
    #[inline]
    pub fn point(&self, v: VertexId) -> Vec2 {
        self.points[v.0]
    }

    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Whether the undirected edge `{u, v}` is present.
    pub fn has_edge(&self, u: VertexId, v: VertexId) -> bool {
        // Scan the shorter adjacency list.
        let (probe, other) = if self.adj[u.0].len() <= self.adj[v.0].len() {
            (u, v)
        } else {
            (v, u)
        };
        self.adj[probe.0].iter().any(|&e| {
            let (a, b) = self.edges[e];
            a == other || b == other
        })
    }

    /// Adds `{u, v}` unless it already exists; returns whether it was added.
    pub fn add_edge_if_absent(&mut self, u: VertexId, v: VertexId) -> bool {
        debug_assert!(u != v, "self-loops are never proposed by the sweep");
        if self.has_edge(u, v) {
            return false;
        }
        let e = self.edges.len();
        self.edges.push((u, v));
        self.adj[u.0].push(e);
        self.adj[v.0].push(e);
        true
    }

    pub fn vertices(&self) -> impl Iterator<Item = VertexId> {
        (0..self.points.len()).map(VertexId)
    }

    /// Undirected edges in insertion order.
    pub fn edges(&self) -> &[(VertexId, VertexId)] {
        &self.edges
    }

    pub fn neighbors(&self, v: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.adj[v.0].iter().map(move |&e| {
            let (a, b) = self.edges[e];
            if a == v {
                b
            } else {
                a
            }
        })
    }

    #[inline]
    pub fn degree(&self, v: VertexId) -> usize {
        self.adj[v.0].len()
    }
}
