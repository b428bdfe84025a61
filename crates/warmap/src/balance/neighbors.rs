use std::cmp::Ordering;

use super::types::Territory;
use crate::geometry::{Coord, Point};
use crate::graph::{Graph, UndirectedGraph, VertexId};

/// Builds the adjacency graph from shared boundary segments.
///
/// Two territories are neighbors iff some ring of one (outer or hole) and some
/// ring of the other contain the same segment, in either direction. Exact
/// coordinate equality is required; touching at a single point is not
/// adjacency.
#[derive(Clone, Copy, Debug, Default)]
pub struct NeighborCalculator;

impl NeighborCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Insert one edge per neighboring pair into `graph`, and every
    /// territory id as a vertex. Returns the number of new edges.
    pub fn create_neighbors<T: Coord, G: Graph>(&self, territories: &[Territory<T>], graph: &mut G) -> usize {
        let mut keyed: Vec<(Point<T>, Point<T>, VertexId)> = Vec::new();
        for territory in territories {
            graph.insert_vertex(territory.id);
            for seg in territory.geometry.segments() {
                if seg.is_degenerate() {
                    continue;
                }
                let (left, right) = seg.normalized();
                keyed.push((left, right, territory.id));
            }
        }
        keyed.sort_by(|a, b| cmp_key(a, b).then(a.2.cmp(&b.2)));

        let mut inserted = 0;
        let mut start = 0;
        while start < keyed.len() {
            let mut end = start + 1;
            while end < keyed.len() && cmp_key(&keyed[start], &keyed[end]) == Ordering::Equal {
                end += 1;
            }
            let run = &keyed[start..end];
            for (i, a) in run.iter().enumerate() {
                for b in &run[i + 1..] {
                    if a.2 != b.2 && graph.insert_edge((a.2, b.2)) {
                        inserted += 1;
                    }
                }
            }
            start = end;
        }
        tracing::debug!(territories = territories.len(), edges = inserted, "neighbors created");
        inserted
    }
}

fn cmp_key<T: Coord>(a: &(Point<T>, Point<T>, VertexId), b: &(Point<T>, Point<T>, VertexId)) -> Ordering {
    a.0.cmp_xy(&b.0).then_with(|| a.1.cmp_xy(&b.1))
}

/// Fresh undirected adjacency graph of `territories`.
pub fn adjacency_from_shared_segments<T: Coord>(territories: &[Territory<T>]) -> UndirectedGraph {
    let mut graph = UndirectedGraph::new();
    NeighborCalculator::new().create_neighbors(territories, &mut graph);
    graph
}
