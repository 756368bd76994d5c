use super::face::FaceId;
use super::vertex::VertexId;

slotmap::new_key_type! {
    /// Unique identifier for a half-edge in the diagram.
    pub struct HalfEdgeId;
}

/// One directed side of a diagram edge, owned by exactly one face.
///
/// Following `next` walks the owning face's boundary clockwise.
#[derive(Debug, Clone)]
pub struct HalfEdgeData {
    /// Vertex this half-edge starts at.
    pub origin: VertexId,
    /// The opposite half-edge of a neighbouring face, absent on the boundary.
    pub twin: Option<HalfEdgeId>,
    /// Next half-edge around the face.
    pub next: HalfEdgeId,
    /// Previous half-edge around the face.
    pub prev: HalfEdgeId,
    /// The face this half-edge bounds.
    pub face: FaceId,
}

impl HalfEdgeData {
    /// Returns `true` if no other face shares this edge yet.
    #[must_use]
    pub fn is_boundary(&self) -> bool {
        self.twin.is_none()
    }
}
