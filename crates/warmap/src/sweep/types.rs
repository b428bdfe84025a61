//! Event and active-segment values for the sweep.
//!
//! Both orders are strict total orders as long as the point order is:
//! ties fall through to the event kind and the segment index.

use std::cmp::Ordering;

use crate::geometry::{Coord, Point, Segment};

/// Which endpoint of a segment an event refers to under the point order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum EventKind {
    Left,
    Right,
}

/// Endpoint event of segment `edge`.
#[derive(Clone, Copy, Debug)]
pub struct Event<T> {
    pub edge: usize,
    pub point: Point<T>,
    pub kind: EventKind,
}

impl<T: Coord> Event<T> {
    /// The two events of `segment`; the smaller endpoint is `Left`.
    ///
    /// For a zero-length segment the acquisition-last endpoint is `Left`.
    pub fn pair(edge: usize, segment: &Segment<T>) -> [Event<T>; 2] {
        let (first_kind, last_kind) = if segment.first.cmp_xy(&segment.last) == Ordering::Less {
            (EventKind::Left, EventKind::Right)
        } else {
            (EventKind::Right, EventKind::Left)
        };
        [
            Event {
                edge,
                point: segment.first,
                kind: first_kind,
            },
            Event {
                edge,
                point: segment.last,
                kind: last_kind,
            },
        ]
    }
}

impl<T: Coord> Ord for Event<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.point
            .cmp_xy(&other.point)
            .then(self.kind.cmp(&other.kind))
            .then(self.edge.cmp(&other.edge))
    }
}

impl<T: Coord> PartialOrd for Event<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Coord> PartialEq for Event<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T: Coord> Eq for Event<T> {}

/// Normalized segment (`left <= right`) while it is open on the sweep line.
#[derive(Clone, Copy, Debug)]
pub struct SlSegment<T> {
    pub edge: usize,
    pub left: Point<T>,
    pub right: Point<T>,
}

impl<T: Coord> SlSegment<T> {
    #[inline]
    pub fn new(edge: usize, segment: &Segment<T>) -> Self {
        let (left, right) = segment.normalized();
        Self { edge, left, right }
    }

    #[inline]
    pub fn shares_endpoint(&self, other: &Self) -> bool {
        self.left == other.left
            || self.right == other.right
            || self.left == other.right
            || self.right == other.left
    }
}

impl<T: Coord> Ord for SlSegment<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.left
            .cmp_xy(&other.left)
            .then_with(|| self.right.cmp_xy(&other.right))
            .then(self.edge.cmp(&other.edge))
    }
}

impl<T: Coord> PartialOrd for SlSegment<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Coord> PartialEq for SlSegment<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T: Coord> Eq for SlSegment<T> {}
