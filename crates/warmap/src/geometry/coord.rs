//! Coordinate domain shared by all geometry.
//!
//! Integers and floats are both supported. The two places where the domain
//! matters are the point order (must be total) and the orientation predicate
//! (exact for integers, plain `f64` for floats).

use std::cmp::Ordering;
use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Sub};

use super::types::Point;

/// Numeric coordinate type.
pub trait Coord:
    Copy
    + Debug
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + 'static
{
    fn zero() -> Self;
    fn to_f64(self) -> f64;
    /// Integers round to nearest (saturating at the type bounds).
    fn from_f64(v: f64) -> Self;
    /// Total order on coordinates. NaN sorts via `total_cmp` instead of breaking the order.
    fn cmp_total(&self, other: &Self) -> Ordering;
    /// Sign of the cross product `(a - o) × (b - o)`.
    ///
    /// `Greater`: `b` lies left of the directed line `o → a`; `Less`: right; `Equal`: collinear.
    fn orientation(o: Point<Self>, a: Point<Self>, b: Point<Self>) -> Ordering;
}

macro_rules! impl_coord_int {
    ($($t:ty),*) => {$(
        impl Coord for $t {
            #[inline]
            fn zero() -> Self {
                0
            }
            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }
            #[inline]
            fn from_f64(v: f64) -> Self {
                v.round() as $t
            }
            #[inline]
            fn cmp_total(&self, other: &Self) -> Ordering {
                self.cmp(other)
            }
            #[inline]
            fn orientation(o: Point<Self>, a: Point<Self>, b: Point<Self>) -> Ordering {
                // Widen so the products cannot overflow.
                let (ox, oy) = (i128::from(o.x), i128::from(o.y));
                let cross = (i128::from(a.x) - ox) * (i128::from(b.y) - oy)
                    - (i128::from(a.y) - oy) * (i128::from(b.x) - ox);
                cross.cmp(&0)
            }
        }
    )*};
}

macro_rules! impl_coord_float {
    ($($t:ty),*) => {$(
        impl Coord for $t {
            #[inline]
            fn zero() -> Self {
                0.0
            }
            #[inline]
            fn to_f64(self) -> f64 {
                f64::from(self)
            }
            #[inline]
            fn from_f64(v: f64) -> Self {
                v as $t
            }
            #[inline]
            fn cmp_total(&self, other: &Self) -> Ordering {
                self.partial_cmp(other)
                    .unwrap_or_else(|| self.total_cmp(other))
            }
            #[inline]
            fn orientation(o: Point<Self>, a: Point<Self>, b: Point<Self>) -> Ordering {
                let (ox, oy) = (f64::from(o.x), f64::from(o.y));
                let cross = (f64::from(a.x) - ox) * (f64::from(b.y) - oy)
                    - (f64::from(a.y) - oy) * (f64::from(b.x) - ox);
                cross.partial_cmp(&0.0).unwrap_or(Ordering::Equal)
            }
        }
    )*};
}

impl_coord_int!(i32, i64);
impl_coord_float!(f32, f64);
