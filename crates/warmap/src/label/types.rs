//! Data types for the label search.

use std::cmp::Ordering;

use crate::error::{MapError, Result};
use crate::geometry::{signed_distance, Circle, Coord, Point, Polygon};

/// Candidate square of the search.
///
/// Invariant: `max = distance + half·√2` is an upper bound on the signed
/// distance of any point inside the cell (distance is 1-Lipschitz and the
/// farthest point of the cell is `half·√2` from its center).
#[derive(Clone, Copy, Debug)]
pub struct Cell {
    pub center: Point<f64>,
    pub half: f64,
    pub distance: f64,
    pub max: f64,
}

impl Cell {
    pub fn new<T: Coord>(center: Point<f64>, half: f64, polygon: &Polygon<T>) -> Self {
        let distance = signed_distance(center.to_vector(), polygon);
        Self {
            center,
            half,
            distance,
            max: distance + half * std::f64::consts::SQRT_2,
        }
    }

    /// The four quadrant children of half the size.
    pub fn split<T: Coord>(&self, polygon: &Polygon<T>) -> [Cell; 4] {
        let h = self.half / 2.0;
        let Point { x, y } = self.center;
        [
            Cell::new(Point::new(x - h, y - h), h, polygon),
            Cell::new(Point::new(x + h, y - h), h, polygon),
            Cell::new(Point::new(x - h, y + h), h, polygon),
            Cell::new(Point::new(x + h, y + h), h, polygon),
        ]
    }
}

// Cells are ranked by their upper bound only.
impl Ord for Cell {
    fn cmp(&self, other: &Self) -> Ordering {
        self.max.total_cmp(&other.max)
    }
}

impl PartialOrd for Cell {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Cell {}

/// Label search configuration.
#[derive(Clone, Copy, Debug)]
pub struct LabelCfg {
    /// Absolute tolerance in polygon units; the result is within this of optimal.
    pub precision: f64,
}

impl Default for LabelCfg {
    fn default() -> Self {
        Self { precision: 1.0 }
    }
}

impl LabelCfg {
    /// # Errors
    ///
    /// `MapError::InvalidPrecision` unless `precision` is finite and positive.
    pub fn validate(&self) -> Result<()> {
        if !(self.precision.is_finite() && self.precision > 0.0) {
            return Err(MapError::InvalidPrecision(self.precision));
        }
        Ok(())
    }
}

/// Pole of inaccessibility and its distance to the boundary.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Label {
    pub point: Point<f64>,
    pub distance: f64,
}

impl Label {
    /// Largest inscribed circle found by the search.
    #[inline]
    pub fn circle(&self) -> Circle<f64> {
        Circle::new(self.point, self.distance)
    }
}
