use std::collections::{BTreeSet, HashMap};
use std::ops::Bound::{Excluded, Unbounded};

use super::types::SlSegment;
use crate::geometry::{Coord, Segment};

/// Active-segment set of the sweep.
///
/// Two synchronized structures: an index → normalized segment map, and an
/// ordered set keyed by (left, right, index). The map turns "segment `i`"
/// into a key for logarithmic lookups in the ordered set.
#[derive(Clone, Debug, Default)]
pub struct SweepLine<T: Coord> {
    segments: HashMap<usize, SlSegment<T>>,
    tree: BTreeSet<SlSegment<T>>,
}

impl<T: Coord> SweepLine<T> {
    pub fn new() -> Self {
        Self {
            segments: HashMap::new(),
            tree: BTreeSet::new(),
        }
    }

    /// Open segment `index`; returns its normalized form.
    pub fn insert(&mut self, index: usize, segment: &Segment<T>) -> SlSegment<T> {
        let s = SlSegment::new(index, segment);
        if let Some(old) = self.segments.insert(index, s) {
            self.tree.remove(&old);
        }
        self.tree.insert(s);
        s
    }

    pub fn find(&self, index: usize) -> Option<&SlSegment<T>> {
        let key = self.segments.get(&index)?;
        self.tree.get(key)
    }

    /// Close segment `index`; false if it was not open.
    pub fn erase(&mut self, index: usize) -> bool {
        match self.segments.remove(&index) {
            Some(s) => self.tree.remove(&s),
            None => false,
        }
    }

    /// Neighbor before `s` in sweep order.
    #[inline]
    pub fn prev(&self, s: &SlSegment<T>) -> Option<&SlSegment<T>> {
        self.tree.range(..*s).next_back()
    }

    /// Neighbor after `s` in sweep order.
    #[inline]
    pub fn next(&self, s: &SlSegment<T>) -> Option<&SlSegment<T>> {
        self.tree.range((Excluded(*s), Unbounded)).next()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SlSegment<T>> {
        self.tree.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }
}
