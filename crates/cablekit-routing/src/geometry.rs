//! Geometry kernel: distances and segment intersection.

use cablekit_core::Point;

/// Determinant magnitude below which two segments are treated as parallel.
pub const PARALLEL_EPSILON: f64 = 1e-10;

/// Euclidean distance in 3D.
pub fn distance(p1: Point, p2: Point) -> f64 {
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;
    let dz = p2.z - p1.z;
    (dx * dx + dy * dy + dz * dz).sqrt()
}

/// Distance on the floor plane, ignoring height.
pub fn planar_distance(p1: Point, p2: Point) -> f64 {
    (p2.x - p1.x).hypot(p2.y - p1.y)
}

/// Planar intersection test for segments `a1-a2` and `b1-b2`.
///
/// Parallel segments (including collinear, overlapping ones) are reported as
/// not intersecting. Touching at an endpoint counts as an intersection.
pub fn segments_intersect(a1: Point, a2: Point, b1: Point, b2: Point) -> bool {
    let (dax, day) = (a2.x - a1.x, a2.y - a1.y);
    let (dbx, dby) = (b2.x - b1.x, b2.y - b1.y);

    let det = dax * dby - day * dbx;
    if det.abs() < PARALLEL_EPSILON {
        return false;
    }

    let (ox, oy) = (b1.x - a1.x, b1.y - a1.y);
    let t = (ox * dby - oy * dbx) / det;
    let u = (ox * day - oy * dax) / det;

    (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u)
}
