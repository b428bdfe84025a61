use std::cmp::Reverse;
use std::collections::BinaryHeap;

use super::types::Event;
use crate::geometry::{Coord, Segment};

/// Min-queue of sweep events in point order.
///
/// Built once from an unordered segment list: two events per segment.
#[derive(Clone, Debug)]
pub struct EventQueue<T: Coord> {
    heap: BinaryHeap<Reverse<Event<T>>>,
}

impl<T: Coord> EventQueue<T> {
    pub fn new(segments: &[Segment<T>]) -> Self {
        let mut heap = BinaryHeap::with_capacity(segments.len() * 2);
        for (i, s) in segments.iter().enumerate() {
            for e in Event::pair(i, s) {
                heap.push(Reverse(e));
            }
        }
        Self { heap }
    }

    #[inline]
    pub fn pop(&mut self) -> Option<Event<T>> {
        self.heap.pop().map(|Reverse(e)| e)
    }

    #[inline]
    pub fn peek(&self) -> Option<&Event<T>> {
        self.heap.peek().map(|Reverse(e)| e)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<T: Coord> Iterator for EventQueue<T> {
    type Item = Event<T>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.pop()
    }
}
