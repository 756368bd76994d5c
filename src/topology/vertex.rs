use crate::math::Point2;

use super::half_edge::HalfEdgeId;

slotmap::new_key_type! {
    /// Unique identifier for a vertex in the diagram.
    pub struct VertexId;
}

/// Data associated with a diagram vertex.
#[derive(Debug, Clone)]
pub struct VertexData {
    /// The 2D position of the vertex.
    pub point: Point2,
    /// One half-edge leaving this vertex, if any has been built yet.
    pub outgoing: Option<HalfEdgeId>,
}

impl VertexData {
    /// Creates a new vertex at the given point with no outgoing edge.
    #[must_use]
    pub fn new(point: Point2) -> Self {
        Self {
            point,
            outgoing: None,
        }
    }
}
