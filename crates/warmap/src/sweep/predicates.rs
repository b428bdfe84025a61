use std::cmp::Ordering;

use super::types::SlSegment;
use crate::geometry::Coord;

#[inline]
fn same_side(a: Ordering, b: Ordering) -> bool {
    a != Ordering::Equal && a == b
}

/// Extents overlap under the point order (only meaningful for collinear pairs).
#[inline]
fn overlaps<T: Coord>(s1: &SlSegment<T>, s2: &SlSegment<T>) -> bool {
    s1.left.cmp_xy(&s2.right) != Ordering::Greater && s2.left.cmp_xy(&s1.right) != Ordering::Greater
}

/// True crossing test between two normalized segments.
///
/// - Sharing any endpoint never counts (adjacent ring edges always do).
/// - Otherwise the endpoints of each segment must not lie strictly on the same
///   side of the other's line. Touching counts as crossing.
/// - Fully collinear pairs cross only if their extents overlap.
pub fn intersects<T: Coord>(s1: &SlSegment<T>, s2: &SlSegment<T>) -> bool {
    if s1.shares_endpoint(s2) {
        return false;
    }
    let d1 = T::orientation(s1.left, s1.right, s2.left);
    let d2 = T::orientation(s1.left, s1.right, s2.right);
    if same_side(d1, d2) {
        return false;
    }
    let d3 = T::orientation(s2.left, s2.right, s1.left);
    let d4 = T::orientation(s2.left, s2.right, s1.right);
    if same_side(d3, d4) {
        return false;
    }
    if [d1, d2, d3, d4].iter().all(|d| *d == Ordering::Equal) {
        return overlaps(s1, s2);
    }
    true
}
