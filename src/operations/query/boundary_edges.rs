use crate::error::Result;
use crate::topology::{Diagram, FaceId, HalfEdgeId};

/// Collects half-edges that no second face shares yet.
///
/// These are the edges a new planigon can be attached to.
pub struct BoundaryEdges {
    face: Option<FaceId>,
}

impl BoundaryEdges {
    /// Boundary edges of one face, in boundary order.
    #[must_use]
    pub fn of_face(face: FaceId) -> Self {
        Self { face: Some(face) }
    }

    /// Boundary edges of the whole diagram.
    #[must_use]
    pub fn all() -> Self {
        Self { face: None }
    }

    /// Executes the query.
    ///
    /// # Errors
    ///
    /// Returns an error if the face is not found.
    pub fn execute(&self, diagram: &Diagram) -> Result<Vec<HalfEdgeId>> {
        match self.face {
            Some(face) => {
                let mut out = Vec::new();
                for he in diagram.face_edges(face)? {
                    if diagram.half_edge(he)?.is_boundary() {
                        out.push(he);
                    }
                }
                Ok(out)
            }
            None => Ok(diagram
                .half_edges()
                .filter(|(_, h)| h.is_boundary())
                .map(|(id, _)| id)
                .collect()),
        }
    }
}
