//! Shamos–Hoey sweep: does any pair of segments cross?
//!
//! Purpose
//! - Validate that a ring (or all rings of a polygon) does not self-intersect
//!   before it is accepted as a territory boundary.
//!
//! Structure
//! - `EventQueue`: one LEFT and one RIGHT event per segment, popped in point order
//!   (ties: LEFT before RIGHT, then by segment index).
//! - `SweepLine`: active segments ordered by normalized (left, right), with an
//!   index → segment side map for lookups on RIGHT events.
//! - `intersects`: crossing predicate; shared endpoints never count.
//!
//! The decision is total over any finite input (degenerate and duplicate
//! segments included); it returns on the first crossing found.

mod line;
mod predicates;
mod queue;
mod types;

pub use line::SweepLine;
pub use predicates::intersects;
pub use queue::EventQueue;
pub use types::{Event, EventKind, SlSegment};

use crate::geometry::{Coord, Polygon, Ring, Segment};

/// True if any two segments cross.
pub fn shamos_hoey<T: Coord>(segments: &[Segment<T>]) -> bool {
    let mut line = SweepLine::new();
    for event in EventQueue::new(segments) {
        match event.kind {
            EventKind::Left => {
                let s = line.insert(event.edge, &segments[event.edge]);
                for neighbor in [line.prev(&s), line.next(&s)].into_iter().flatten() {
                    if intersects(&s, neighbor) {
                        tracing::trace!(a = s.edge, b = neighbor.edge, "crossing on insert");
                        return true;
                    }
                }
            }
            EventKind::Right => {
                if let Some(s) = line.find(event.edge).copied() {
                    if let (Some(above), Some(below)) = (line.prev(&s), line.next(&s)) {
                        if intersects(above, below) {
                            tracing::trace!(a = above.edge, b = below.edge, "crossing on removal");
                            return true;
                        }
                    }
                }
                line.erase(event.edge);
            }
        }
    }
    false
}

/// True if no two edges of `ring` cross.
pub fn is_simple_ring<T: Coord>(ring: &Ring<T>) -> bool {
    let segments: Vec<_> = ring.segments().collect();
    !shamos_hoey(&segments)
}

/// True if no boundary segments of `polygon` cross, across all of its rings.
pub fn is_valid_polygon<T: Coord>(polygon: &Polygon<T>) -> bool {
    let segments: Vec<_> = polygon.segments().collect();
    !shamos_hoey(&segments)
}
