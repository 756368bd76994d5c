use std::f64::consts::PI;

use nalgebra::Rotation2;

use super::{Point2, Vector2, TOLERANCE};
use crate::error::{Result, ShapeError};

/// Computes the signed area of a polygon (shoelace formula).
///
/// Positive for polygons that are clockwise on screen (y pointing down),
/// negative for counter-clockwise ones.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
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

/// Computes the normalized direction from point `a` to point `b`.
///
/// # Errors
///
/// Returns `ShapeError::DegenerateEdge` if the segment has zero length.
pub fn segment_direction(a: &Point2, b: &Point2) -> Result<Vector2> {
    let d = b - a;
    let len = d.norm();
    if len < TOLERANCE {
        return Err(ShapeError::DegenerateEdge.into());
    }
    Ok(d / len)
}

/// Turns a direction clockwise on screen by `angle` radians.
///
/// With y pointing down, a clockwise screen turn is a positive rotation in
/// the usual math convention, so `(1, 0)` turned by `π/2` becomes `(0, 1)`.
#[must_use]
pub fn turn_clockwise(dir: Vector2, angle: f64) -> Vector2 {
    Rotation2::new(angle) * dir
}

/// Returns the signed turn from direction `d_in` to direction `d_out`,
/// positive for clockwise (on screen) turns, in `(-π, π]`.
#[must_use]
pub fn turn_angle(d_in: &Vector2, d_out: &Vector2) -> f64 {
    d_in.perp(d_out).atan2(d_in.dot(d_out))
}

/// Interior angles (radians) of a closed, clockwise polygon, one per vertex.
///
/// The angle at vertex `i` is measured between the incoming edge from
/// `points[i - 1]` and the outgoing edge to `points[i + 1]`. Reflex corners
/// yield values above `π`.
#[must_use]
pub fn interior_angles(points: &[Point2]) -> Vec<f64> {
    let n = points.len();
    if n < 3 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let prev = points[(i + n - 1) % n];
            let next = points[(i + 1) % n];
            let d_in = points[i] - prev;
            let d_out = next - points[i];
            PI - turn_angle(&d_in, &d_out)
        })
        .collect()
}

/// Lengths of the edges of a closed polygon; entry `i` runs from
/// `points[i]` to `points[i + 1]`.
#[must_use]
pub fn edge_lengths(points: &[Point2]) -> Vec<f64> {
    let n = points.len();
    (0..n)
        .map(|i| (points[(i + 1) % n] - points[i]).norm())
        .collect()
}
