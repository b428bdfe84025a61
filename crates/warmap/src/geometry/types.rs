//! Passive 2D value types: `Point`, `Segment`, `Rectangle`, `Ring`, `Polygon`, `Circle`.
//!
//! - All types are generic over the coordinate domain `T: Coord`.
//! - `Ring` and `Polygon` own their points; nothing here holds references.

use std::cmp::Ordering;
use std::ops::{Add, Div, Sub};

use nalgebra::Vector2;

use super::coord::Coord;
use crate::error::{MapError, Result};

/// Point in the plane.
///
/// The point order used by the sweep is lexicographic (x, then y), see [`Point::cmp_xy`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point<T> {
    pub x: T,
    pub y: T,
}

impl<T: Coord> Point<T> {
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Lexicographic order by x, then y.
    #[inline]
    pub fn cmp_xy(&self, other: &Self) -> Ordering {
        self.x
            .cmp_total(&other.x)
            .then_with(|| self.y.cmp_total(&other.y))
    }

    #[inline]
    pub fn to_vector(self) -> Vector2<f64> {
        Vector2::new(self.x.to_f64(), self.y.to_f64())
    }

    /// Convert into another coordinate domain (integers round to nearest).
    #[inline]
    pub fn cast<U: Coord>(self) -> Point<U> {
        Point {
            x: U::from_f64(self.x.to_f64()),
            y: U::from_f64(self.y.to_f64()),
        }
    }
}

impl From<Vector2<f64>> for Point<f64> {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Point { x: v.x, y: v.y }
    }
}

impl<T: Coord> Add for Point<T> {
    type Output = Point<T>;
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<T: Coord> Sub for Point<T> {
    type Output = Point<T>;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<T: Coord> Div<T> for Point<T> {
    type Output = Point<T>;
    #[inline]
    fn div(self, rhs: T) -> Self::Output {
        Point::new(self.x / rhs, self.y / rhs)
    }
}

/// Segment between two points, in acquisition order.
///
/// Undirected for intersection purposes; use [`Segment::normalized`] for the
/// (left, right) form under the point order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment<T> {
    pub first: Point<T>,
    pub last: Point<T>,
}

impl<T: Coord> Segment<T> {
    #[inline]
    pub fn new(first: Point<T>, last: Point<T>) -> Self {
        Self { first, last }
    }

    /// Endpoints ordered so that `left <= right` under the point order.
    #[inline]
    pub fn normalized(&self) -> (Point<T>, Point<T>) {
        if self.first.cmp_xy(&self.last) == Ordering::Greater {
            (self.last, self.first)
        } else {
            (self.first, self.last)
        }
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.first == self.last
    }

    #[inline]
    pub fn length(&self) -> f64 {
        (self.last.to_vector() - self.first.to_vector()).norm()
    }
}

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rectangle<T> {
    pub min: Point<T>,
    pub max: Point<T>,
}

impl<T: Coord> Rectangle<T> {
    #[inline]
    pub fn new(min: Point<T>, max: Point<T>) -> Self {
        Self { min, max }
    }

    /// Smallest rectangle covering `points`; `None` for an empty input.
    pub fn from_points<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Point<T>>,
        T: 'a,
    {
        let mut it = points.into_iter();
        let first = *it.next()?;
        let mut rect = Rectangle::new(first, first);
        for p in it {
            if p.x < rect.min.x {
                rect.min.x = p.x;
            }
            if p.y < rect.min.y {
                rect.min.y = p.y;
            }
            if p.x > rect.max.x {
                rect.max.x = p.x;
            }
            if p.y > rect.max.y {
                rect.max.y = p.y;
            }
        }
        Some(rect)
    }

    #[inline]
    pub fn width(&self) -> T {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> T {
        self.max.y - self.min.y
    }

    /// Center, computed in `f64` so integer boxes do not truncate.
    #[inline]
    pub fn center(&self) -> Point<f64> {
        Point::from((self.min.to_vector() + self.max.to_vector()) * 0.5)
    }
}

/// Closed ring: the last point implicitly connects back to the first.
///
/// Invariant: at least 3 points, and no explicit closing duplicate.
#[derive(Clone, Debug, PartialEq)]
pub struct Ring<T> {
    points: Vec<Point<T>>,
}

impl<T: Coord> Ring<T> {
    /// Build a ring. A trailing copy of the first point is dropped.
    ///
    /// # Errors
    ///
    /// `MapError::InvalidRing` if fewer than 3 distinct positions remain.
    pub fn new(mut points: Vec<Point<T>>) -> Result<Self> {
        if points.len() > 1 && points.first() == points.last() {
            points.pop();
        }
        if points.len() < 3 {
            return Err(MapError::InvalidRing { len: points.len() });
        }
        Ok(Self { points })
    }

    /// Skips validation; callers guarantee the invariant.
    pub(crate) fn new_unchecked(points: Vec<Point<T>>) -> Self {
        debug_assert!(points.len() >= 3, "ring needs at least 3 points");
        Self { points }
    }

    #[inline]
    pub fn points(&self) -> &[Point<T>] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false for a constructed ring; kept for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Boundary edges `(p[i], p[i+1])`, including the closing edge.
    pub fn segments(&self) -> impl Iterator<Item = Segment<T>> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| Segment::new(self.points[i], self.points[(i + 1) % n]))
    }

    /// Shoelace area; positive for counter-clockwise rings.
    pub fn signed_area(&self) -> f64 {
        let sum: f64 = self
            .segments()
            .map(|s| {
                let (a, b) = (s.first.to_vector(), s.last.to_vector());
                a.x * b.y - b.x * a.y
            })
            .sum();
        sum * 0.5
    }

    pub fn envelope(&self) -> Rectangle<T> {
        // Non-empty by the ring invariant.
        let first = self.points[0];
        Rectangle::from_points(&self.points).unwrap_or(Rectangle::new(first, first))
    }
}

/// Polygon: one outer ring plus optional holes.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon<T> {
    pub outer: Ring<T>,
    pub inners: Vec<Ring<T>>,
}

impl<T: Coord> Polygon<T> {
    #[inline]
    pub fn new(outer: Ring<T>) -> Self {
        Self {
            outer,
            inners: Vec::new(),
        }
    }

    #[inline]
    pub fn with_holes(outer: Ring<T>, inners: Vec<Ring<T>>) -> Self {
        Self { outer, inners }
    }

    /// Shorthand for a hole-free polygon from raw points.
    ///
    /// # Errors
    ///
    /// See [`Ring::new`].
    pub fn from_points(points: Vec<Point<T>>) -> Result<Self> {
        Ok(Self::new(Ring::new(points)?))
    }

    /// Outer ring first, then the holes.
    pub fn rings(&self) -> impl Iterator<Item = &Ring<T>> {
        std::iter::once(&self.outer).chain(self.inners.iter())
    }

    /// All boundary segments of all rings.
    pub fn segments(&self) -> impl Iterator<Item = Segment<T>> + '_ {
        self.rings().flat_map(|r| r.segments())
    }

    /// Envelope of the outer ring.
    #[inline]
    pub fn envelope(&self) -> Rectangle<T> {
        self.outer.envelope()
    }
}

/// Circle with a real-valued radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle<T> {
    pub center: Point<T>,
    pub radius: f64,
}

impl<T: Coord> Circle<T> {
    #[inline]
    pub fn new(center: Point<T>, radius: f64) -> Self {
        Self { center, radius }
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.radius >= 0.0
    }

    #[inline]
    pub fn diameter(&self) -> f64 {
        self.radius * 2.0
    }

    #[inline]
    pub fn area(&self) -> f64 {
        std::f64::consts::PI * self.radius.powi(2)
    }

    #[inline]
    pub fn circumference(&self) -> f64 {
        2.0 * std::f64::consts::PI * self.radius
    }
}
