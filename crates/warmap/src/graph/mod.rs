//! Adjacency graph between map regions.
//!
//! Purpose
//! - A small capability trait (`Graph`) over dense vertex ids, plus the
//!   undirected implementation the map pipeline uses for neighbor relations.
//!
//! Representation (`UndirectedGraph`)
//! - One ordered edge set storing every edge in both directions, so "all edges
//!   leaving v" is a single range query.
//! - No explicit vertex set: `vertex_count` is the largest id seen plus one.

mod undirected;

pub use undirected::UndirectedGraph;

use crate::error::Result;

/// Vertex identifier; small, dense, non-negative.
pub type VertexId = usize;

/// Edge as an ordered `(source, target)` pair.
pub type Edge = (VertexId, VertexId);

/// Graph capabilities shared by directed and undirected representations.
pub trait Graph {
    fn vertex_count(&self) -> usize;

    fn edge_count(&self) -> usize;

    /// `(vertex_count, edge_count)`.
    fn size(&self) -> (usize, usize) {
        (self.vertex_count(), self.edge_count())
    }

    fn is_empty(&self) -> bool {
        self.vertex_count() == 0 && self.edge_count() == 0
    }

    fn insert_vertex(&mut self, vertex: VertexId);

    fn contains_vertex(&self, vertex: VertexId) -> bool;

    /// Remove a vertex and every edge touching it.
    fn remove_vertex(&mut self, vertex: VertexId);

    /// Returns true if the edge was not present before.
    fn insert_edge(&mut self, edge: Edge) -> bool;

    fn contains_edge(&self, edge: Edge) -> bool;

    /// Returns true if the edge was present.
    fn remove_edge(&mut self, edge: Edge) -> bool;

    /// Number of outgoing edges of `vertex`.
    ///
    /// # Errors
    ///
    /// `MapError::VertexNotFound` where the representation tracks vertices.
    fn degree(&self, vertex: VertexId) -> Result<usize>;

    /// Targets of the outgoing edges of `vertex`, in ascending order.
    ///
    /// # Errors
    ///
    /// `MapError::VertexNotFound` where the representation tracks vertices.
    fn adjacents(&self, vertex: VertexId) -> Result<Vec<VertexId>>;
}

#[cfg(test)]
mod tests;
