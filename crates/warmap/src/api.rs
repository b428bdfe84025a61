//! Curated surface for the CLI and experiments (UNSTABLE).
//!
//! Breaking changes are allowed; prefer these re-exports for consistency
//! across callers.

// Geometry
pub use crate::geometry::rand::{
    draw_star_polygon, draw_star_ring, ReplayToken as StarReplay, StarCfg, VertexCount,
};
pub use crate::geometry::{signed_distance, Circle, Coord, Point, Polygon, Rectangle, Ring, Segment};
// Label engine
pub use crate::label::{
    centroid_cell, label_with_defaults, polylabel, polylabel_with_cfg, ring_centroid, Label,
    LabelCfg,
};
// Boundary validation
pub use crate::sweep::{is_simple_ring, is_valid_polygon, shamos_hoey};
// Graph and balancing
pub use crate::balance::{
    adjacency_from_shared_segments, ArmyCalculator, ArmyCfg, Bonus, CenterCalculator,
    NeighborCalculator, SuperBonus, Territory,
};
pub use crate::graph::{Edge, Graph, UndirectedGraph, VertexId};
