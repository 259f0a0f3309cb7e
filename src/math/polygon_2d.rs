use super::{Point3, TOLERANCE};

/// Computes the signed area of a polygon in the XY plane (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise. Walks that double
/// back on themselves (tree-like boundaries) contribute zero area.
#[must_use]
pub fn signed_area_2d(points: &[Point3]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Arithmetic mean of a polygon's boundary vertices.
///
/// Used as a cheap representative point for a face; not the exact area
/// centroid.
#[must_use]
pub fn boundary_midpoint(points: &[Point3]) -> Point3 {
    if points.is_empty() {
        return Point3::origin();
    }
    let mut acc = Point3::origin();
    for pt in points {
        acc.x += pt.x;
        acc.y += pt.y;
        acc.z += pt.z;
    }
    #[allow(clippy::cast_precision_loss)]
    let n = points.len() as f64;
    Point3::new(acc.x / n, acc.y / n, acc.z / n)
}

/// Rotates a closed polygon so it starts at the leftmost vertex (smallest x),
/// breaking ties by smallest y. Ensures deterministic output for tests.
#[must_use]
pub fn rotate_to_canonical_start(points: &[Point3]) -> Vec<Point3> {
    if points.len() < 2 {
        return points.to_vec();
    }
    let mut best = 0;
    for (i, pt) in points.iter().enumerate().skip(1) {
        let b = &points[best];
        if pt.x < b.x - TOLERANCE || (pt.x - b.x).abs() < TOLERANCE && pt.y < b.y {
            best = i;
        }
    }
    if best == 0 {
        return points.to_vec();
    }
    let mut rotated = Vec::with_capacity(points.len());
    rotated.extend_from_slice(&points[best..]);
    rotated.extend_from_slice(&points[..best]);
    rotated
}
