use crate::error::Result;
use crate::math::Point2;
use crate::topology::{Diagram, FaceId};

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner of the bounding box.
    pub min: Point2,
    /// Maximum corner of the bounding box.
    pub max: Point2,
}

impl Aabb {
    fn around(points: impl IntoIterator<Item = Point2>) -> Option<Self> {
        points.into_iter().fold(None, |acc, p| {
            Some(match acc {
                None => Aabb { min: p, max: p },
                Some(b) => Aabb {
                    min: Point2::new(b.min.x.min(p.x), b.min.y.min(p.y)),
                    max: Point2::new(b.max.x.max(p.x), b.max.y.max(p.y)),
                },
            })
        })
    }
}

/// Computes the axis-aligned bounding box of a face or of the whole diagram.
pub struct BoundingBox {
    face: Option<FaceId>,
}

impl BoundingBox {
    /// Bounding box of every vertex in the diagram.
    #[must_use]
    pub fn new() -> Self {
        Self { face: None }
    }

    /// Bounding box of one face.
    #[must_use]
    pub fn of_face(face: FaceId) -> Self {
        Self { face: Some(face) }
    }

    /// Executes the query, returning `None` for an empty diagram.
    ///
    /// # Errors
    ///
    /// Returns an error if the face is not found.
    pub fn execute(&self, diagram: &Diagram) -> Result<Option<Aabb>> {
        Ok(match self.face {
            Some(face) => Aabb::around(diagram.face_positions(face)?),
            None => Aabb::around(diagram.vertices().map(|(_, v)| v.point)),
        })
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::new()
    }
}
