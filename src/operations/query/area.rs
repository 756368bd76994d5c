use crate::error::Result;
use crate::math::polygon_2d::signed_area_2d;
use crate::topology::{Diagram, FaceId};

/// Computes the area of a face from its boundary (shoelace formula).
///
/// Faces placed clockwise on screen have positive area; a negative result
/// means the boundary was inserted counter-clockwise.
pub struct FaceArea {
    face: FaceId,
}

impl FaceArea {
    /// Creates a new `FaceArea` query.
    #[must_use]
    pub fn new(face: FaceId) -> Self {
        Self { face }
    }

    /// Executes the query, returning the signed area.
    ///
    /// # Errors
    ///
    /// Returns an error if the face is not found.
    pub fn execute(&self, diagram: &Diagram) -> Result<f64> {
        let points = diagram.face_positions(self.face)?;
        Ok(signed_area_2d(&points))
    }
}
