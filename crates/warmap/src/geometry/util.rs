use nalgebra::Vector2;

use super::{Coord, Polygon};

/// Squared distance from `p` to the segment `a → b`.
///
/// Zero-length segments degrade to point distance.
#[inline]
pub fn point_to_segment_dist_sq(p: Vector2<f64>, a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    let d = b - a;
    let len_sq = d.norm_squared();
    if len_sq == 0.0 {
        return (p - a).norm_squared();
    }
    let t = ((p - a).dot(&d) / len_sq).clamp(0.0, 1.0);
    (p - (a + d * t)).norm_squared()
}

/// Signed distance from `p` to the polygon boundary.
///
/// Positive inside, negative outside. Inside-ness is even-odd over all rings,
/// so a point in a hole counts as outside.
pub fn signed_distance<T: Coord>(p: Vector2<f64>, polygon: &Polygon<T>) -> f64 {
    let mut inside = false;
    let mut min_dist_sq = f64::INFINITY;
    for ring in polygon.rings() {
        for s in ring.segments() {
            let a = s.first.to_vector();
            let b = s.last.to_vector();
            if (a.y > p.y) != (b.y > p.y) && p.x < (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x {
                inside = !inside;
            }
            min_dist_sq = min_dist_sq.min(point_to_segment_dist_sq(p, a, b));
        }
    }
    let dist = min_dist_sq.sqrt();
    if inside {
        dist
    } else {
        -dist
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Point, Ring};
    use nalgebra::vector;

    const TOL: f64 = 1e-12;

    fn square_with_hole() -> Polygon<f64> {
        let outer = Ring::new(vec![
            Point::new(-10.0, -10.0),
            Point::new(10.0, -10.0),
            Point::new(10.0, 10.0),
            Point::new(-10.0, 10.0),
        ])
        .unwrap();
        let hole = Ring::new(vec![
            Point::new(-2.0, -2.0),
            Point::new(-2.0, 2.0),
            Point::new(2.0, 2.0),
            Point::new(2.0, -2.0),
        ])
        .unwrap();
        Polygon::with_holes(outer, vec![hole])
    }

    #[test]
    fn segment_distance_projection_and_endpoint() {
        let a = vector![0.0, 0.0];
        let b = vector![2.0, 0.0];
        assert!((point_to_segment_dist_sq(vector![1.0, 1.0], a, b) - 1.0).abs() < TOL);
        assert!((point_to_segment_dist_sq(vector![-3.0, 4.0], a, b) - 25.0).abs() < TOL);
        assert!((point_to_segment_dist_sq(vector![3.0, 4.0], a, a) - 25.0).abs() < TOL);
    }

    #[test]
    fn signed_distance_respects_holes() {
        let poly = square_with_hole();
        // Between hole and outer ring: inside.
        assert!((signed_distance(vector![6.0, 0.0], &poly) - 4.0).abs() < TOL);
        // Inside the hole: outside the polygon.
        assert!((signed_distance(vector![0.0, 0.0], &poly) + 2.0).abs() < TOL);
        // Beyond the outer ring.
        assert!((signed_distance(vector![13.0, 0.0], &poly) + 3.0).abs() < TOL);
    }

    #[test]
    fn signed_distance_integer_polygon() {
        let poly = Polygon::from_points(vec![
            Point::new(0i32, 0),
            Point::new(4, 0),
            Point::new(4, 4),
            Point::new(0, 4),
        ])
        .unwrap();
        assert!((signed_distance(vector![2.0, 2.0], &poly) - 2.0).abs() < TOL);
        assert!((signed_distance(vector![2.0, 1.0], &poly) - 1.0).abs() < TOL);
    }
}
