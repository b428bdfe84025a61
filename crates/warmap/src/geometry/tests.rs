use std::cmp::Ordering;

use super::*;
use crate::error::MapError;

fn unit_square() -> Ring<f64> {
    Ring::new(vec![
        Point::new(0.0, 0.0),
        Point::new(1.0, 0.0),
        Point::new(1.0, 1.0),
        Point::new(0.0, 1.0),
    ])
    .unwrap()
}

#[test]
fn point_order_is_lexicographic() {
    let a = Point::new(1, 5);
    let b = Point::new(2, 0);
    let c = Point::new(2, 3);
    assert_eq!(a.cmp_xy(&b), Ordering::Less);
    assert_eq!(b.cmp_xy(&c), Ordering::Less);
    assert_eq!(c.cmp_xy(&b), Ordering::Greater);
    assert_eq!(c.cmp_xy(&c), Ordering::Equal);
}

#[test]
fn point_arithmetic_and_cast() {
    let p = Point::new(4, 6) + Point::new(2, 2);
    assert_eq!(p, Point::new(6, 8));
    assert_eq!(p / 2, Point::new(3, 4));
    assert_eq!(p - Point::new(1, 1), Point::new(5, 7));
    let q: Point<i32> = Point::new(1.6f64, -2.4).cast();
    assert_eq!(q, Point::new(2, -2));
}

#[test]
fn segment_normalization_keeps_acquisition_order() {
    let s = Segment::new(Point::new(3.0, 1.0), Point::new(1.0, 2.0));
    let (l, r) = s.normalized();
    assert_eq!(l, Point::new(1.0, 2.0));
    assert_eq!(r, Point::new(3.0, 1.0));
    assert_eq!(s.first, Point::new(3.0, 1.0));
    assert!(!s.is_degenerate());
    assert!((Segment::new(Point::new(0.0, 0.0), Point::new(3.0, 4.0)).length() - 5.0).abs() < 1e-12);
}

#[test]
fn ring_rejects_too_few_points_and_drops_closing_duplicate() {
    let err = Ring::new(vec![Point::new(0, 0), Point::new(1, 0)]).unwrap_err();
    assert_eq!(err, MapError::InvalidRing { len: 2 });

    let closed = Ring::new(vec![
        Point::new(0, 0),
        Point::new(1, 0),
        Point::new(1, 1),
        Point::new(0, 0),
    ])
    .unwrap();
    assert_eq!(closed.len(), 3);

    let err = Ring::new(vec![Point::new(0, 0), Point::new(1, 0), Point::new(0, 0)]).unwrap_err();
    assert_eq!(err, MapError::InvalidRing { len: 2 });
}

#[test]
fn ring_segments_close_the_loop() {
    let ring = unit_square();
    let segs: Vec<_> = ring.segments().collect();
    assert_eq!(segs.len(), 4);
    assert_eq!(segs[3].first, Point::new(0.0, 1.0));
    assert_eq!(segs[3].last, Point::new(0.0, 0.0));
}

#[test]
fn signed_area_orientation() {
    let ccw = unit_square();
    assert!((ccw.signed_area() - 1.0).abs() < 1e-12);
    let mut pts = ccw.points().to_vec();
    pts.reverse();
    let cw = Ring::new(pts).unwrap();
    assert!((cw.signed_area() + 1.0).abs() < 1e-12);
}

#[test]
fn envelope_and_center() {
    let ring = Ring::new(vec![Point::new(1, 2), Point::new(7, 3), Point::new(4, 9)]).unwrap();
    let env = ring.envelope();
    assert_eq!(env.min, Point::new(1, 2));
    assert_eq!(env.max, Point::new(7, 9));
    assert_eq!(env.width(), 6);
    assert_eq!(env.height(), 7);
    assert_eq!(env.center(), Point::new(4.0, 5.5));
}

#[test]
fn polygon_collects_all_ring_segments() {
    let hole = Ring::new(vec![
        Point::new(0.25, 0.25),
        Point::new(0.25, 0.75),
        Point::new(0.75, 0.5),
    ])
    .unwrap();
    let poly = Polygon::with_holes(unit_square(), vec![hole]);
    assert_eq!(poly.rings().count(), 2);
    assert_eq!(poly.segments().count(), 7);
    assert_eq!(poly.envelope(), unit_square().envelope());
    assert!(poly.signed_distance(Point::new(0.1, 0.5)) > 0.0);
    assert!(poly.signed_distance(Point::new(0.4, 0.5)) < 0.0);
}

#[test]
fn circle_measures() {
    let c = Circle::new(Point::new(0.0, 0.0), 2.0);
    assert!(c.is_valid());
    assert!((c.diameter() - 4.0).abs() < 1e-12);
    assert!((c.area() - 4.0 * std::f64::consts::PI).abs() < 1e-12);
    assert!((c.circumference() - 4.0 * std::f64::consts::PI).abs() < 1e-12);
    assert!(!Circle::new(Point::new(0, 0), -1.0).is_valid());
}

#[test]
fn validity_helpers_delegate_to_sweep() {
    assert!(unit_square().is_simple());
    let bowtie = Ring::new(vec![
        Point::new(0, 0),
        Point::new(2, 2),
        Point::new(2, 0),
        Point::new(0, 2),
    ])
    .unwrap();
    assert!(!bowtie.is_simple());
    assert!(!Polygon::new(bowtie).is_valid());
    assert!(Polygon::new(unit_square()).is_valid());
}
