use tracing::{debug, trace, warn};

use crate::error::{Result, TopologyError};
use crate::math::{Point2, TOLERANCE};
use crate::topology::{Diagram, FaceData, FaceId, HalfEdgeData, HalfEdgeId, VertexId};

/// Where a polygon corner lands before anything is committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Corner {
    /// Merged into a vertex already in the diagram.
    Existing(VertexId),
    /// A fresh vertex at `positions[i]`.
    New(usize),
}

/// Inserts a polygon into a [`Diagram`] from its clockwise vertex positions.
///
/// Each position merges with an existing vertex within the diagram's merge
/// tolerance or creates a new one. One half-edge is built per side and
/// paired with the opposite half-edge of a neighbouring face when one exists.
///
/// All checks run before the diagram is touched, so a failed insertion
/// leaves it unchanged.
pub struct InsertPolygon {
    positions: Vec<Point2>,
    planigon: Option<String>,
}

impl InsertPolygon {
    /// Creates a new `InsertPolygon` operation.
    #[must_use]
    pub fn new(positions: Vec<Point2>) -> Self {
        Self {
            positions,
            planigon: None,
        }
    }

    /// Tags the new face with the catalog name of its planigon.
    #[must_use]
    pub fn named(mut self, planigon: impl Into<String>) -> Self {
        self.planigon = Some(planigon.into());
        self
    }

    /// Executes the operation, returning the new face.
    ///
    /// # Errors
    ///
    /// Returns `TopologyError::DegeneratePolygon` for fewer than three
    /// positions, a non-finite position or two corners resolving to the same
    /// vertex, and `TopologyError::NonManifoldAttachment` if a side would
    /// duplicate a directed edge already in the diagram.
    pub fn execute(&self, diagram: &mut Diagram) -> Result<FaceId> {
        let corners = match self.plan(diagram) {
            Ok(corners) => corners,
            Err(err) => {
                warn!(%err, "rejected polygon insertion");
                return Err(err.into());
            }
        };
        self.commit(diagram, &corners)
    }

    /// Resolves every corner and validates the polygon without mutating.
    fn plan(&self, diagram: &Diagram) -> std::result::Result<Vec<Corner>, TopologyError> {
        let n = self.positions.len();
        if n < 3 {
            return Err(TopologyError::DegeneratePolygon(format!(
                "a polygon needs at least 3 vertices, got {n}"
            )));
        }
        if let Some(p) = self.positions.iter().find(|p| !(p.x.is_finite() && p.y.is_finite())) {
            return Err(TopologyError::DegeneratePolygon(format!(
                "non-finite position ({}, {})",
                p.x, p.y
            )));
        }

        let tol = diagram.config().merge_tolerance.max(TOLERANCE);
        let mut corners = Vec::with_capacity(n);
        for (i, pos) in self.positions.iter().enumerate() {
            let corner = match diagram.find_vertex(pos) {
                Some(id) => Corner::Existing(id),
                None => {
                    let clash = corners.iter().find_map(|c| match *c {
                        Corner::New(j) if (self.positions[j] - pos).norm() <= tol => Some(j),
                        _ => None,
                    });
                    if let Some(j) = clash {
                        return Err(TopologyError::DegeneratePolygon(format!(
                            "corners {j} and {i} coincide"
                        )));
                    }
                    Corner::New(i)
                }
            };
            if corners.contains(&corner) {
                return Err(TopologyError::DegeneratePolygon(format!(
                    "corner {i} repeats an earlier corner"
                )));
            }
            corners.push(corner);
        }

        for i in 0..n {
            let j = (i + 1) % n;
            if let (Corner::Existing(a), Corner::Existing(b)) = (corners[i], corners[j]) {
                if diagram.directed_edge(a, b).is_some() {
                    return Err(TopologyError::NonManifoldAttachment {
                        origin: self.positions[i],
                        destination: self.positions[j],
                    });
                }
            }
        }
        Ok(corners)
    }

    fn commit(&self, diagram: &mut Diagram, corners: &[Corner]) -> Result<FaceId> {
        let n = corners.len();
        let mut merged = 0usize;
        let verts: Vec<VertexId> = corners
            .iter()
            .map(|&corner| match corner {
                Corner::Existing(id) => {
                    merged += 1;
                    trace!(vertex = ?id, "merged corner into existing vertex");
                    id
                }
                Corner::New(i) => diagram.add_vertex(self.positions[i]),
            })
            .collect();

        let edges: Vec<HalfEdgeId> = verts
            .iter()
            .map(|&origin| {
                diagram.add_half_edge(HalfEdgeData {
                    origin,
                    twin: None,
                    next: HalfEdgeId::default(),
                    prev: HalfEdgeId::default(),
                    face: FaceId::default(),
                })
            })
            .collect();

        let face = diagram.add_face(FaceData {
            edge: edges[0],
            degree: n,
            planigon: self.planigon.clone(),
        });

        let mut twins = 0usize;
        for i in 0..n {
            let (a, b) = (verts[i], verts[(i + 1) % n]);
            let he = diagram.half_edge_mut(edges[i])?;
            he.next = edges[(i + 1) % n];
            he.prev = edges[(i + n - 1) % n];
            he.face = face;
            diagram.vertex_mut(a)?.outgoing = Some(edges[i]);

            if let Some(opposite) = diagram.directed_edge(b, a) {
                diagram.half_edge_mut(opposite)?.twin = Some(edges[i]);
                diagram.half_edge_mut(edges[i])?.twin = Some(opposite);
                twins += 1;
            }
            diagram.register_directed(a, b, edges[i]);
        }

        debug!(
            face = ?face,
            degree = n,
            created = n - merged,
            merged,
            twins,
            planigon = self.planigon.as_deref().unwrap_or("-"),
            "inserted polygon"
        );
        Ok(face)
    }
}
