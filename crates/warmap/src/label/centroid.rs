use super::types::Cell;
use crate::geometry::{Coord, Point, Polygon, Ring};

/// Area-weighted centroid of `ring`, or `None` if its signed area is not positive.
///
/// Clockwise and zero-area rings both yield `None`.
pub fn ring_centroid<T: Coord>(ring: &Ring<T>) -> Option<Point<f64>> {
    let mut area = 0.0;
    let mut cx = 0.0;
    let mut cy = 0.0;
    for s in ring.segments() {
        let (a, b) = (s.first.to_vector(), s.last.to_vector());
        let f = a.x * b.y - b.x * a.y;
        cx += (a.x + b.x) * f;
        cy += (a.y + b.y) * f;
        area += f * 3.0;
    }
    if area > 0.0 {
        Some(Point::new(cx / area, cy / area))
    } else {
        None
    }
}

/// Seed cell at the outer ring's centroid, falling back to its first vertex.
pub fn centroid_cell<T: Coord>(polygon: &Polygon<T>) -> Cell {
    let center = ring_centroid(&polygon.outer).unwrap_or_else(|| {
        let first = polygon.outer.points()[0];
        Point::new(first.x.to_f64(), first.y.to_f64())
    });
    Cell::new(center, 0.0, polygon)
}
