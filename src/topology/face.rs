use super::half_edge::HalfEdgeId;

slotmap::new_key_type! {
    /// Unique identifier for a face in the diagram.
    pub struct FaceId;
}

/// Data associated with a placed polygon.
#[derive(Debug, Clone)]
pub struct FaceData {
    /// A representative half-edge of the boundary cycle.
    pub edge: HalfEdgeId,
    /// Number of half-edges in the boundary cycle.
    pub degree: usize,
    /// Catalog name of the planigon that produced this face, if known.
    pub planigon: Option<String>,
}
