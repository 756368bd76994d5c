use crate::error::Result;
use crate::topology::{Diagram, FaceId};

/// Finds the faces that share an edge with a face, following twin links.
///
/// Neighbours are listed once each, in the order their shared edges appear
/// along the face boundary.
pub struct AdjacentFaces {
    face: FaceId,
}

impl AdjacentFaces {
    /// Creates a new `AdjacentFaces` query.
    #[must_use]
    pub fn new(face: FaceId) -> Self {
        Self { face }
    }

    /// Executes the query.
    ///
    /// # Errors
    ///
    /// Returns an error if the face or a linked half-edge is not found.
    pub fn execute(&self, diagram: &Diagram) -> Result<Vec<FaceId>> {
        let mut neighbours = Vec::new();
        for he in diagram.face_edges(self.face)? {
            if let Some(twin) = diagram.half_edge(he)?.twin {
                let other = diagram.half_edge(twin)?.face;
                if !neighbours.contains(&other) {
                    neighbours.push(other);
                }
            }
        }
        Ok(neighbours)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point2;
    use crate::operations::creation::AttachPlanigon;
    use crate::operations::query::BoundaryEdges;
    use crate::shape::Catalog;

    #[test]
    fn square_ring_around_centre() {
        let catalog = Catalog::standard().unwrap();
        let square = catalog.get("4.4.4.4").unwrap();
        let mut d = Diagram::new();
        let centre = d
            .seed(square, None, Point2::new(0.0, 0.0), Point2::new(1.0, 0.0), 0)
            .unwrap();
        let mut ring = Vec::new();
        for host in BoundaryEdges::of_face(centre).execute(&d).unwrap() {
            ring.push(AttachPlanigon::new(host, 0, square).execute(&mut d).unwrap());
        }
        assert_eq!(AdjacentFaces::new(centre).execute(&d).unwrap(), ring);
        for f in ring {
            assert_eq!(AdjacentFaces::new(f).execute(&d).unwrap(), vec![centre]);
        }
    }
}
