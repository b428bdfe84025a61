use std::collections::btree_set::Range;
use std::collections::BTreeSet;

use super::{Edge, Graph, VertexId};
use crate::error::Result;

/// Undirected graph over dense vertex ids.
///
/// Invariants:
/// - `(u, v)` is stored iff `(v, u)` is stored; self-loops are never stored.
/// - `vertex_count` is the largest id ever referenced plus one. It is an upper
///   bound on the real vertex count when ids are sparse and does not shrink on
///   `remove_vertex`.
#[derive(Clone, Debug, Default)]
pub struct UndirectedGraph {
    vertices: usize,
    edges: BTreeSet<Edge>,
}

impl UndirectedGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a list of undirected pairs.
    pub fn from_edges<I: IntoIterator<Item = Edge>>(edges: I) -> Self {
        let mut g = Self::new();
        for e in edges {
            g.insert_edge(e);
        }
        g
    }

    /// Each undirected edge once, as `(min, max)`.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.edges.iter().copied().filter(|(u, v)| u < v)
    }

    /// Stored edges leaving `vertex`. Logarithmic to locate.
    #[inline]
    fn outgoing(&self, vertex: VertexId) -> Range<'_, Edge> {
        self.edges.range((vertex, VertexId::MIN)..=(vertex, VertexId::MAX))
    }

    #[inline]
    fn touch(&mut self, vertex: VertexId) {
        self.vertices = self.vertices.max(vertex + 1);
    }
}

impl Graph for UndirectedGraph {
    #[inline]
    fn vertex_count(&self) -> usize {
        self.vertices
    }

    /// Constant time: both directions are stored, so halve.
    #[inline]
    fn edge_count(&self) -> usize {
        self.edges.len() / 2
    }

    fn insert_vertex(&mut self, vertex: VertexId) {
        self.touch(vertex);
    }

    #[inline]
    fn contains_vertex(&self, vertex: VertexId) -> bool {
        vertex < self.vertices
    }

    fn remove_vertex(&mut self, vertex: VertexId) {
        let targets: Vec<VertexId> = self.outgoing(vertex).map(|&(_, v)| v).collect();
        for v in targets {
            self.remove_edge((vertex, v));
        }
    }

    fn insert_edge(&mut self, (u, v): Edge) -> bool {
        if u == v {
            tracing::debug!(vertex = u, "ignoring self-loop");
            return false;
        }
        self.touch(u);
        self.touch(v);
        let fresh = self.edges.insert((u, v));
        self.edges.insert((v, u));
        fresh
    }

    #[inline]
    fn contains_edge(&self, edge: Edge) -> bool {
        self.edges.contains(&edge)
    }

    fn remove_edge(&mut self, (u, v): Edge) -> bool {
        let removed = self.edges.remove(&(u, v));
        self.edges.remove(&(v, u));
        removed
    }

    /// Never fails: an unknown vertex simply has no edges.
    fn degree(&self, vertex: VertexId) -> Result<usize> {
        Ok(self.outgoing(vertex).count())
    }

    /// Never fails: an unknown vertex simply has no neighbors.
    fn adjacents(&self, vertex: VertexId) -> Result<Vec<VertexId>> {
        Ok(self.outgoing(vertex).map(|&(_, v)| v).collect())
    }
}
