use crate::error::{Result, TopologyError};
use crate::math::Point2;
use crate::operations::synthesis::planigon_vertices;
use crate::shape::Planigon;
use crate::topology::{Diagram, FaceId, HalfEdgeId};

use super::InsertPolygon;

/// Attaches a planigon onto a boundary half-edge of the diagram.
///
/// For a host half-edge `A -> B`, the new face is synthesized on `B -> A`
/// so that its first side becomes the host's twin.
pub struct AttachPlanigon<'a> {
    host: HalfEdgeId,
    edge_idx: usize,
    planigon: &'a Planigon,
    name: Option<String>,
}

impl<'a> AttachPlanigon<'a> {
    /// Creates a new `AttachPlanigon` operation.
    ///
    /// * `edge_idx` - Which canonical edge of `planigon` the host instantiates.
    #[must_use]
    pub fn new(host: HalfEdgeId, edge_idx: usize, planigon: &'a Planigon) -> Self {
        Self {
            host,
            edge_idx,
            planigon,
            name: None,
        }
    }

    /// Tags the new face with a catalog name.
    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Computes the positions the new face would occupy, without mutating.
    ///
    /// # Errors
    ///
    /// Returns `TopologyError::NotBoundary` if the host already has a twin,
    /// `TopologyError::EntityNotFound` for a stale host ID and shape errors
    /// from vertex synthesis.
    pub fn preview(&self, diagram: &Diagram) -> Result<Vec<Point2>> {
        let host = diagram.half_edge(self.host)?;
        if !host.is_boundary() {
            return Err(TopologyError::NotBoundary.into());
        }
        let a = diagram.vertex(host.origin)?.point;
        let b = diagram.vertex(diagram.destination(self.host)?)?.point;
        planigon_vertices(
            b,
            a,
            self.edge_idx,
            self.planigon.lengths(),
            self.planigon.angles(),
        )
    }

    /// Executes the attachment, returning the new face.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`preview`](Self::preview) and of
    /// [`InsertPolygon::execute`].
    pub fn execute(&self, diagram: &mut Diagram) -> Result<FaceId> {
        let positions = self.preview(diagram)?;
        let mut op = InsertPolygon::new(positions);
        if let Some(name) = &self.name {
            op = op.named(name.clone());
        }
        op.execute(diagram)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::PlanigonError;
    use crate::shape::Catalog;

    fn first_edge(d: &Diagram, f: FaceId) -> HalfEdgeId {
        d.face(f).unwrap().edge
    }

    #[test]
    fn attach_twins_the_host() {
        let catalog = Catalog::standard().unwrap();
        let square = catalog.get("4.4.4.4").unwrap();
        let mut d = Diagram::new();
        let f = d
            .seed(square, None, Point2::new(0.0, 0.0), Point2::new(1.0, 0.0), 0)
            .unwrap();
        let host = first_edge(&d, f);

        let g = AttachPlanigon::new(host, 0, square)
            .named("4.4.4.4")
            .execute(&mut d)
            .unwrap();
        let twin = d.half_edge(host).unwrap().twin.unwrap();
        assert_eq!(d.half_edge(twin).unwrap().face, g);
        assert_eq!(d.vertex_count(), 6);
        // The new square sits above the host edge on screen.
        let pts = d.face_positions(g).unwrap();
        assert!(pts.iter().all(|p| p.y <= 1e-9));
    }

    #[test]
    fn preview_does_not_mutate() {
        let catalog = Catalog::standard().unwrap();
        let hex = catalog.get("3.3.3.3.3.3").unwrap();
        let mut d = Diagram::new();
        let f = d
            .seed(hex, None, Point2::new(0.0, 0.0), Point2::new(1.0, 0.0), 0)
            .unwrap();
        let pts = AttachPlanigon::new(first_edge(&d, f), 2, hex)
            .preview(&d)
            .unwrap();
        assert_eq!(pts.len(), 6);
        assert_eq!(d.face_count(), 1);
    }

    #[test]
    fn attach_on_shared_edge_fails() {
        let catalog = Catalog::standard().unwrap();
        let square = catalog.get("4.4.4.4").unwrap();
        let mut d = Diagram::new();
        let f = d
            .seed(square, None, Point2::new(0.0, 0.0), Point2::new(1.0, 0.0), 0)
            .unwrap();
        let host = first_edge(&d, f);
        AttachPlanigon::new(host, 0, square).execute(&mut d).unwrap();
        let err = AttachPlanigon::new(host, 0, square)
            .execute(&mut d)
            .unwrap_err();
        assert!(matches!(
            err,
            PlanigonError::Topology(TopologyError::NotBoundary)
        ));
        assert_eq!(d.face_count(), 2);
    }

    #[test]
    fn mismatched_attachment_scales_to_host() {
        // The kite's edge 1 is longer than the unit host edge.
        let catalog = Catalog::standard().unwrap();
        let square = catalog.get("4.4.4.4").unwrap();
        let kite = catalog.get("3.4.6.4").unwrap();
        let mut d = Diagram::new();
        let f = d
            .seed(square, None, Point2::new(0.0, 0.0), Point2::new(1.0, 0.0), 0)
            .unwrap();
        let g = AttachPlanigon::new(first_edge(&d, f), 1, kite)
            .execute(&mut d)
            .unwrap();
        let pts = d.face_positions(g).unwrap();
        let host_len = (pts[1] - pts[0]).norm();
        assert!((host_len - 1.0).abs() < 1e-9);
        assert_eq!(d.face(g).unwrap().degree, 4);
    }
}
