//! 2D geometry primitives for map regions.
//!
//! Purpose
//! - Passive value types (`Point`, `Segment`, `Rectangle`, `Ring`, `Polygon`, `Circle`)
//!   generic over the coordinate domain (`Coord`: `i32`, `i64`, `f32`, `f64`).
//! - Boundary distance helpers used by the label engine.
//! - A seeded sampler for simple rings (tests, benchmarks).
//!
//! Conventions
//! - Rings are implicitly closed and hold at least 3 points.
//! - Counter-clockwise rings have positive signed area.
//! - Distances are always computed in `f64`; exact predicates live on `Coord`.

mod coord;
pub mod rand;
mod types;
mod util;

pub use coord::Coord;
pub use types::{Circle, Point, Polygon, Rectangle, Ring, Segment};
pub use util::{point_to_segment_dist_sq, signed_distance};

impl<T: Coord> Ring<T> {
    /// True if no two non-adjacent edges cross (sweep-line check).
    pub fn is_simple(&self) -> bool {
        crate::sweep::is_simple_ring(self)
    }
}

impl<T: Coord> Polygon<T> {
    /// True if no boundary segments of any ring cross each other.
    pub fn is_valid(&self) -> bool {
        crate::sweep::is_valid_polygon(self)
    }

    /// Signed distance from `p` to the boundary (positive inside).
    pub fn signed_distance(&self, p: Point<f64>) -> f64 {
        signed_distance(p.to_vector(), self)
    }
}

#[cfg(test)]
mod tests;
