//! Best-first branch-and-bound over square cells.

use std::collections::BinaryHeap;

use super::centroid::centroid_cell;
use super::types::{Cell, Label, LabelCfg};
use crate::error::Result;
use crate::geometry::{Coord, Point, Polygon};

/// Pole of inaccessibility of `polygon`, within `precision` of the optimum.
///
/// Degenerate polygons (zero-width or zero-height envelope) return the
/// envelope's minimum corner with distance 0.
///
/// # Errors
///
/// `MapError::InvalidPrecision` unless `precision` is finite and positive.
pub fn polylabel<T: Coord>(polygon: &Polygon<T>, precision: f64) -> Result<Label> {
    LabelCfg { precision }.validate()?;

    let envelope = polygon.envelope();
    let min = envelope.min.to_vector();
    let width = envelope.width().to_f64();
    let height = envelope.height().to_f64();
    let cell_size = width.min(height);
    if cell_size == 0.0 {
        return Ok(Label {
            point: Point::from(min),
            distance: 0.0,
        });
    }
    let half = cell_size / 2.0;

    // Cover the envelope with square cells.
    let nx = (width / cell_size).ceil() as usize;
    let ny = (height / cell_size).ceil() as usize;
    let mut queue = BinaryHeap::with_capacity(nx * ny);
    for i in 0..nx {
        for j in 0..ny {
            let x = min.x + (i as f64) * cell_size + half;
            let y = min.y + (j as f64) * cell_size + half;
            queue.push(Cell::new(Point::new(x, y), half, polygon));
        }
    }

    let mut best = centroid_cell(polygon);
    let envelope_cell = Cell::new(envelope.center(), 0.0, polygon);
    if envelope_cell.distance > best.distance {
        best = envelope_cell;
    }

    let mut probes = queue.len() + 2;
    while let Some(cell) = queue.pop() {
        if cell.distance > best.distance {
            best = cell;
        }
        if cell.max - best.distance <= precision {
            continue;
        }
        for child in cell.split(polygon) {
            queue.push(child);
        }
        probes += 4;
    }

    tracing::trace!(probes, distance = best.distance, "polylabel");
    Ok(Label {
        point: best.center,
        distance: best.distance,
    })
}

/// `polylabel` with the tolerance taken from `cfg`.
///
/// # Errors
///
/// See [`polylabel`].
#[inline]
pub fn polylabel_with_cfg<T: Coord>(polygon: &Polygon<T>, cfg: LabelCfg) -> Result<Label> {
    polylabel(polygon, cfg.precision)
}

/// `polylabel` with the default tolerance of one polygon unit.
///
/// # Errors
///
/// Never in practice; the default tolerance is valid.
#[inline]
pub fn label_with_defaults<T: Coord>(polygon: &Polygon<T>) -> Result<Label> {
    polylabel_with_cfg(polygon, LabelCfg::default())
}
