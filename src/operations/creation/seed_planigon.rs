use crate::error::Result;
use crate::math::Point2;
use crate::operations::synthesis::PlanigonVertices;
use crate::shape::Planigon;
use crate::topology::{Diagram, FaceId};

use super::InsertPolygon;

/// Places a planigon on a free segment, typically the first face of a diagram.
///
/// The segment does not have to exist in the diagram; its endpoints still
/// merge with nearby vertices like any other insertion.
pub struct SeedPlanigon<'a> {
    origin: Point2,
    destination: Point2,
    edge_idx: usize,
    planigon: &'a Planigon,
    name: Option<String>,
}

impl<'a> SeedPlanigon<'a> {
    /// Creates a new `SeedPlanigon` operation.
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
            name: None,
        }
    }

    /// Tags the new face with a catalog name.
    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Executes the operation, returning the new face.
    ///
    /// # Errors
    ///
    /// Returns shape errors from vertex synthesis and topology errors from
    /// insertion.
    pub fn execute(&self, diagram: &mut Diagram) -> Result<FaceId> {
        let positions =
            PlanigonVertices::new(self.origin, self.destination, self.edge_idx, self.planigon)
                .execute()?;
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

    #[test]
    fn seed_square() {
        let square = Planigon::new(vec![90.0; 4], vec![1.0; 4]).unwrap();
        let mut d = Diagram::new();
        let f = d
            .seed(&square, Some("4.4.4.4"), Point2::new(0.0, 0.0), Point2::new(2.0, 0.0), 0)
            .unwrap();
        assert_eq!(d.face_count(), 1);
        assert_eq!(d.face(f).unwrap().planigon.as_deref(), Some("4.4.4.4"));
        let pts = d.face_positions(f).unwrap();
        assert!((pts[2] - Point2::new(2.0, 2.0)).norm() < 1e-9);
    }

    #[test]
    fn seed_rejects_bad_edge_index() {
        let square = Planigon::new(vec![90.0; 4], vec![1.0; 4]).unwrap();
        let mut d = Diagram::new();
        assert!(SeedPlanigon::new(Point2::new(0.0, 0.0), Point2::new(1.0, 0.0), 7, &square)
            .execute(&mut d)
            .is_err());
        assert!(d.is_empty());
    }
}
