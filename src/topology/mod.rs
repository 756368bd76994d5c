pub mod face;
pub mod half_edge;
pub mod vertex;
pub mod vertex_index;
mod walk;

pub use face::{FaceData, FaceId};
pub use half_edge::{HalfEdgeData, HalfEdgeId};
pub use vertex::{VertexData, VertexId};
pub use vertex_index::VertexIndex;
pub use walk::FaceEdges;

use std::collections::HashMap;

use slotmap::SlotMap;

use crate::config::DiagramConfig;
use crate::error::{self, TopologyError};
use crate::math::Point2;
use crate::operations::creation::{InsertPolygon, SeedPlanigon};
use crate::shape::Planigon;

/// The half-edge planar map of placed planigons.
///
/// Owns the vertex, half-edge and face arenas; entities reference each other
/// through typed IDs (generational indices). The vertex index and the map of
/// directed edges are private to the diagram and only change through polygon
/// insertion.
#[derive(Debug)]
pub struct Diagram {
    vertices: SlotMap<VertexId, VertexData>,
    half_edges: SlotMap<HalfEdgeId, HalfEdgeData>,
    faces: SlotMap<FaceId, FaceData>,
    index: VertexIndex,
    directed: HashMap<(VertexId, VertexId), HalfEdgeId>,
    config: DiagramConfig,
}

impl Default for Diagram {
    fn default() -> Self {
        Self::from_valid_config(DiagramConfig::default())
    }
}

impl Diagram {
    /// Creates an empty diagram with the default merge tolerance.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty diagram with a custom configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidTolerance` if the configuration is invalid.
    pub fn with_config(config: DiagramConfig) -> error::Result<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: DiagramConfig) -> Self {
        Self {
            vertices: SlotMap::with_key(),
            half_edges: SlotMap::with_key(),
            faces: SlotMap::with_key(),
            index: VertexIndex::new(config.cell_size),
            directed: HashMap::new(),
            config,
        }
    }

    /// Tolerances this diagram was built with.
    #[must_use]
    pub fn config(&self) -> &DiagramConfig {
        &self.config
    }

    // --- Mutation ---

    /// Inserts a polygon given its clockwise vertex positions.
    ///
    /// # Errors
    ///
    /// See [`InsertPolygon::execute`].
    pub fn insert_polygon(&mut self, positions: &[Point2]) -> error::Result<FaceId> {
        InsertPolygon::new(positions.to_vec()).execute(self)
    }

    /// Places the first planigon of a diagram on a free segment.
    ///
    /// # Errors
    ///
    /// See [`SeedPlanigon::execute`].
    pub fn seed(
        &mut self,
        planigon: &Planigon,
        name: Option<&str>,
        origin: Point2,
        destination: Point2,
        edge_idx: usize,
    ) -> error::Result<FaceId> {
        let mut op = SeedPlanigon::new(origin, destination, edge_idx, planigon);
        if let Some(name) = name {
            op = op.named(name);
        }
        op.execute(self)
    }

    pub(crate) fn add_vertex(&mut self, point: Point2) -> VertexId {
        let id = self.vertices.insert(VertexData::new(point));
        self.index.add(id, point);
        id
    }

    pub(crate) fn add_half_edge(&mut self, data: HalfEdgeData) -> HalfEdgeId {
        self.half_edges.insert(data)
    }

    pub(crate) fn add_face(&mut self, data: FaceData) -> FaceId {
        self.faces.insert(data)
    }

    pub(crate) fn vertex_mut(&mut self, id: VertexId) -> Result<&mut VertexData, TopologyError> {
        self.vertices
            .get_mut(id)
            .ok_or(TopologyError::EntityNotFound("vertex"))
    }

    pub(crate) fn half_edge_mut(
        &mut self,
        id: HalfEdgeId,
    ) -> Result<&mut HalfEdgeData, TopologyError> {
        self.half_edges
            .get_mut(id)
            .ok_or(TopologyError::EntityNotFound("half-edge"))
    }

    /// Records `id` as the half-edge running `origin -> destination`.
    pub(crate) fn register_directed(
        &mut self,
        origin: VertexId,
        destination: VertexId,
        id: HalfEdgeId,
    ) {
        self.directed.insert((origin, destination), id);
    }

    // --- Queries ---

    /// Returns the vertex data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the diagram.
    pub fn vertex(&self, id: VertexId) -> Result<&VertexData, TopologyError> {
        self.vertices
            .get(id)
            .ok_or(TopologyError::EntityNotFound("vertex"))
    }

    /// Returns the half-edge data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the diagram.
    pub fn half_edge(&self, id: HalfEdgeId) -> Result<&HalfEdgeData, TopologyError> {
        self.half_edges
            .get(id)
            .ok_or(TopologyError::EntityNotFound("half-edge"))
    }

    /// Returns the face data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the diagram.
    pub fn face(&self, id: FaceId) -> Result<&FaceData, TopologyError> {
        self.faces
            .get(id)
            .ok_or(TopologyError::EntityNotFound("face"))
    }

    /// Vertex a half-edge ends at (the origin of its `next`).
    ///
    /// # Errors
    ///
    /// Returns an error if the half-edge or its successor is missing.
    pub fn destination(&self, id: HalfEdgeId) -> Result<VertexId, TopologyError> {
        let next = self.half_edge(id)?.next;
        Ok(self.half_edge(next)?.origin)
    }

    /// Half-edge running `origin -> destination`, if one has been built.
    #[must_use]
    pub fn directed_edge(&self, origin: VertexId, destination: VertexId) -> Option<HalfEdgeId> {
        self.directed.get(&(origin, destination)).copied()
    }

    /// Existing vertex within merge tolerance of `point`.
    #[must_use]
    pub fn find_vertex(&self, point: &Point2) -> Option<VertexId> {
        self.index.find_near(point, self.config.merge_tolerance)
    }

    pub(crate) fn vertex_index(&self) -> &VertexIndex {
        &self.index
    }

    /// Walks a face's boundary by following `next` from its representative edge.
    ///
    /// # Errors
    ///
    /// Returns an error if the face is not found.
    pub fn face_edges(&self, face: FaceId) -> Result<FaceEdges<'_>, TopologyError> {
        let start = self.face(face)?.edge;
        Ok(FaceEdges::new(self, start))
    }

    /// Boundary vertices of a face, in boundary order.
    ///
    /// # Errors
    ///
    /// Returns an error if the face or one of its half-edges is missing.
    pub fn face_vertices(&self, face: FaceId) -> Result<Vec<VertexId>, TopologyError> {
        self.face_edges(face)?
            .map(|he| self.half_edge(he).map(|h| h.origin))
            .collect()
    }

    /// Boundary positions of a face, in boundary order.
    ///
    /// # Errors
    ///
    /// Returns an error if the face or one of its entities is missing.
    pub fn face_positions(&self, face: FaceId) -> Result<Vec<Point2>, TopologyError> {
        self.face_vertices(face)?
            .into_iter()
            .map(|v| self.vertex(v).map(|d| d.point))
            .collect()
    }

    /// Iterates all face IDs.
    pub fn face_ids(&self) -> impl Iterator<Item = FaceId> + '_ {
        self.faces.keys()
    }

    /// Iterates all half-edges with their IDs.
    pub fn half_edges(&self) -> impl Iterator<Item = (HalfEdgeId, &HalfEdgeData)> + '_ {
        self.half_edges.iter()
    }

    /// Iterates all vertices with their IDs.
    pub fn vertices(&self) -> impl Iterator<Item = (VertexId, &VertexData)> + '_ {
        self.vertices.iter()
    }

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of half-edges.
    #[must_use]
    pub fn half_edge_count(&self) -> usize {
        self.half_edges.len()
    }

    /// Number of faces.
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Returns `true` if the diagram has no faces.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn unit_square() -> Vec<Point2> {
        vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0)]
    }

    #[test]
    fn new_diagram_is_empty() {
        let d = Diagram::new();
        assert!(d.is_empty());
        assert_eq!(d.vertex_count(), 0);
        assert_eq!(d.half_edge_count(), 0);
    }

    #[test]
    fn with_config_rejects_bad_tolerance() {
        assert!(Diagram::with_config(DiagramConfig::new(1e-6, 1e-3)).is_err());
    }

    #[test]
    fn face_positions_round_trip() {
        let mut d = Diagram::new();
        let f = d.insert_polygon(&unit_square()).unwrap();
        assert_eq!(d.face_positions(f).unwrap(), unit_square());
    }

    #[test]
    fn destination_is_next_origin() {
        let mut d = Diagram::new();
        let f = d.insert_polygon(&unit_square()).unwrap();
        let verts = d.face_vertices(f).unwrap();
        let first = d.face(f).unwrap().edge;
        assert_eq!(d.destination(first).unwrap(), verts[1]);
        assert_eq!(d.directed_edge(verts[0], verts[1]), Some(first));
        assert_eq!(d.directed_edge(verts[1], verts[0]), None);
    }

    #[test]
    fn find_vertex_uses_merge_tolerance() {
        let mut d = Diagram::new();
        d.insert_polygon(&unit_square()).unwrap();
        assert!(d.find_vertex(&p(1.0 + 5e-6, 1.0)).is_some());
        assert!(d.find_vertex(&p(1.0 + 5e-4, 1.0)).is_none());
    }

    #[test]
    fn missing_entities_are_errors() {
        let mut other = Diagram::new();
        let f = other.insert_polygon(&unit_square()).unwrap();
        let d = Diagram::new();
        assert!(d.face(f).is_err());
        assert!(d.face_edges(f).is_err());
    }
}
