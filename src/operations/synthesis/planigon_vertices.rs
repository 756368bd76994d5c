use std::f64::consts::PI;

use crate::error::{Result, ShapeError};
use crate::math::polygon_2d::{segment_direction, turn_clockwise};
use crate::math::Point2;
use crate::shape::planigon::check_sequences;
use crate::shape::Planigon;

/// Synthesizes the vertices of a planigon attached to a host edge.
///
/// The host edge `origin -> destination` instantiates canonical edge
/// `edge_idx` of the planigon. The result starts with `origin` and
/// `destination` and continues clockwise, `N` points in total.
pub struct PlanigonVertices<'a> {
    origin: Point2,
    destination: Point2,
    edge_idx: usize,
    planigon: &'a Planigon,
}

impl<'a> PlanigonVertices<'a> {
    /// Creates a new `PlanigonVertices` operation.
    #[must_use]
    pub fn new(
        origin: Point2,
        destination: Point2,
        edge_idx: usize,
        planigon: &'a Planigon,
    ) -> Self {
        Self {
            origin,
            destination,
            edge_idx,
            planigon,
        }
    }

    /// Executes the synthesis.
    ///
    /// # Errors
    ///
    /// Returns `ShapeError::OutOfRange` for an edge index past the last side
    /// and `ShapeError::DegenerateEdge` if the host edge has zero length.
    pub fn execute(&self) -> Result<Vec<Point2>> {
        planigon_vertices(
            self.origin,
            self.destination,
            self.edge_idx,
            self.planigon.lengths(),
            self.planigon.angles(),
        )
    }
}

/// Computes the vertex positions of a planigon placed on `origin -> destination`.
///
/// The whole polygon is scaled uniformly by the ratio of the host edge's
/// actual length to `lengths[edge_idx]`. This assumes the host edge is an
/// undistorted copy of a canonical edge; shear elsewhere in the diagram is
/// not compensated.
///
/// Walking from `destination`, the direction turns clockwise by the exterior
/// angle `π - angles[k]` at each corner before advancing along the next
/// canonical edge.
///
/// # Errors
///
/// Returns `ShapeError::ShapeMismatch` (or another shape error) for invalid
/// sequences, `ShapeError::OutOfRange` if `edge_idx >= lengths.len()` and
/// `ShapeError::DegenerateEdge` if `origin` and `destination` coincide.
pub fn planigon_vertices(
    origin: Point2,
    destination: Point2,
    edge_idx: usize,
    lengths: &[f64],
    angles: &[f64],
) -> Result<Vec<Point2>> {
    check_sequences(angles, lengths)?;
    let n = lengths.len();
    if edge_idx >= n {
        return Err(ShapeError::OutOfRange {
            index: edge_idx,
            len: n,
        }
        .into());
    }

    let mut dir = segment_direction(&origin, &destination)?;
    let scale = (destination - origin).norm() / lengths[edge_idx];

    let mut points = Vec::with_capacity(n);
    points.push(origin);
    points.push(destination);

    let mut curr = destination;
    for k in 1..n - 1 {
        let i = (edge_idx + k) % n;
        dir = turn_clockwise(dir, PI - angles[i].to_radians());
        curr += dir * (lengths[i] * scale);
        points.push(curr);
    }
    Ok(points)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::error::PlanigonError;
    use crate::math::polygon_2d::{edge_lengths, interior_angles, signed_area_2d};
    use crate::shape::Catalog;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn assert_point(actual: Point2, x: f64, y: f64) {
        assert_abs_diff_eq!(actual.x, x, epsilon = 1e-9);
        assert_abs_diff_eq!(actual.y, y, epsilon = 1e-9);
    }

    #[test]
    fn regular_hexagon_on_unit_edge() {
        let pts =
            planigon_vertices(p(0.0, 0.0), p(1.0, 0.0), 0, &[1.0; 6], &[120.0; 6]).unwrap();
        let h = 3.0_f64.sqrt() / 2.0;
        assert_eq!(pts.len(), 6);
        assert_point(pts[0], 0.0, 0.0);
        assert_point(pts[1], 1.0, 0.0);
        assert_point(pts[2], 1.5, h);
        assert_point(pts[3], 1.0, 2.0 * h);
        assert_point(pts[4], 0.0, 2.0 * h);
        assert_point(pts[5], -0.5, h);
    }

    #[test]
    fn unit_square_on_unit_edge() {
        let pts = planigon_vertices(p(0.0, 0.0), p(1.0, 0.0), 0, &[1.0; 4], &[90.0; 4]).unwrap();
        assert_point(pts[2], 1.0, 1.0);
        assert_point(pts[3], 0.0, 1.0);
    }

    #[test]
    fn equilateral_triangle_exact() {
        let pts = planigon_vertices(p(0.0, 0.0), p(2.0, 0.0), 1, &[1.0; 3], &[60.0; 3]).unwrap();
        assert_point(pts[2], 1.0, 3.0_f64.sqrt());
    }

    #[test]
    fn result_is_deterministic() {
        let a = planigon_vertices(p(0.3, -1.2), p(2.7, 0.4), 2, &[1.0; 5], &[108.0; 5]).unwrap();
        let b = planigon_vertices(p(0.3, -1.2), p(2.7, 0.4), 2, &[1.0; 5], &[108.0; 5]).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn every_catalog_shape_closes_with_matching_angles() {
        let catalog = Catalog::standard().unwrap();
        for (name, planigon) in catalog.iter() {
            let n = planigon.degree();
            for edge_idx in 0..n {
                let pts = PlanigonVertices::new(p(1.0, 2.0), p(3.0, 3.0), edge_idx, planigon)
                    .execute()
                    .unwrap();
                assert_eq!(pts.len(), n, "{name}");
                assert!(signed_area_2d(&pts) > 0.0, "{name} is not clockwise");

                let scale = (p(3.0, 3.0) - p(1.0, 2.0)).norm() / planigon.lengths()[edge_idx];
                let lens = edge_lengths(&pts);
                let angles = interior_angles(&pts);
                for j in 0..n {
                    let k = (edge_idx + j) % n;
                    assert_abs_diff_eq!(lens[j], planigon.lengths()[k] * scale, epsilon = 1e-9);
                    assert_abs_diff_eq!(
                        angles[j].to_degrees(),
                        planigon.angles()[k],
                        epsilon = 1e-7
                    );
                }
            }
        }
    }

    #[test]
    fn doubling_host_edge_doubles_lengths() {
        let catalog = Catalog::standard().unwrap();
        let kite = catalog.get("3.4.6.4").unwrap();
        let small = PlanigonVertices::new(p(0.0, 0.0), p(1.0, 0.5), 1, kite)
            .execute()
            .unwrap();
        let large = PlanigonVertices::new(p(0.0, 0.0), p(2.0, 1.0), 1, kite)
            .execute()
            .unwrap();
        for (a, b) in edge_lengths(&small).iter().zip(edge_lengths(&large)) {
            assert_abs_diff_eq!(2.0 * a, b, epsilon = 1e-9);
        }
        for (a, b) in interior_angles(&small).iter().zip(interior_angles(&large)) {
            assert_abs_diff_eq!(*a, b, epsilon = 1e-9);
        }
    }

    #[test]
    fn edge_index_out_of_range() {
        let err = planigon_vertices(p(0.0, 0.0), p(1.0, 0.0), 4, &[1.0; 4], &[90.0; 4]);
        assert!(matches!(
            err,
            Err(PlanigonError::Shape(ShapeError::OutOfRange { index: 4, len: 4 }))
        ));
    }

    #[test]
    fn mismatched_sequences() {
        let err = planigon_vertices(p(0.0, 0.0), p(1.0, 0.0), 0, &[1.0; 3], &[90.0; 4]);
        assert!(matches!(
            err,
            Err(PlanigonError::Shape(ShapeError::ShapeMismatch { .. }))
        ));
    }

    #[test]
    fn coincident_host_endpoints() {
        let err = planigon_vertices(p(1.0, 1.0), p(1.0, 1.0), 0, &[1.0; 4], &[90.0; 4]);
        assert!(matches!(
            err,
            Err(PlanigonError::Shape(ShapeError::DegenerateEdge))
        ));
    }
}
