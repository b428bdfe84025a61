//! Map-building core: region geometry, label placement, boundary validation,
//! adjacency, and army balancing.
//!
//! Modules (leaf first)
//! - `geometry`: generic 2D value types and boundary distance.
//! - `label`: pole of inaccessibility (best-first cell search).
//! - `sweep`: Shamos–Hoey self-intersection check.
//! - `graph`: adjacency graph capability trait and undirected implementation.
//! - `balance`: territory/bonus records and the calculators that fill them.
//!
//! API Policy
//! - The crate serves the workspace CLI; there is no stable public API.
//!   `api` and `prelude` are the curated import surfaces.

pub mod api;
pub mod balance;
pub mod error;
pub mod geometry;
pub mod graph;
pub mod label;
pub mod sweep;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{MapError, Result};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::balance::{
        adjacency_from_shared_segments, ArmyCalculator, ArmyCfg, Bonus, CenterCalculator,
        NeighborCalculator, SuperBonus, Territory,
    };
    pub use crate::error::{MapError, Result};
    pub use crate::geometry::{Circle, Coord, Point, Polygon, Rectangle, Ring, Segment};
    pub use crate::graph::{Graph, UndirectedGraph, VertexId};
    pub use crate::label::{polylabel, Label, LabelCfg};
    pub use crate::sweep::shamos_hoey;
}
