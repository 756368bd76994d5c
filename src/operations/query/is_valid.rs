use std::collections::HashSet;

use crate::error::TopologyError;
use crate::topology::{Diagram, HalfEdgeId};

/// Validates the topological consistency of a diagram.
///
/// Checks that `next`/`prev` are inverse, twins are mutual and reversed,
/// every face cycle closes after exactly `degree` steps, every half-edge
/// belongs to its face's cycle, each vertex's outgoing edge starts there,
/// no directed edge appears twice and no two vertices lie within merge
/// tolerance of each other.
#[derive(Debug, Default)]
pub struct IsValid;

impl IsValid {
    /// Creates a new `IsValid` query.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Executes the validation, returning `true` if the diagram is valid.
    #[must_use]
    pub fn execute(&self, diagram: &Diagram) -> bool {
        self.diagnose(diagram).is_ok()
    }

    /// Executes the validation, reporting the first violation found.
    ///
    /// # Errors
    ///
    /// Returns `TopologyError::InvalidTopology` describing the violation, or
    /// `TopologyError::EntityNotFound` for a dangling reference.
    pub fn diagnose(&self, diagram: &Diagram) -> Result<(), TopologyError> {
        let mut directed = HashSet::new();
        for (id, he) in diagram.half_edges() {
            if diagram.half_edge(he.next)?.prev != id || diagram.half_edge(he.prev)?.next != id {
                return Err(invalid("next/prev links are not inverse"));
            }
            let dest = diagram.destination(id)?;
            if !directed.insert((he.origin, dest)) {
                return Err(invalid("directed edge appears twice"));
            }
            if let Some(twin) = he.twin {
                let t = diagram.half_edge(twin)?;
                if t.twin != Some(id) {
                    return Err(invalid("twin link is not mutual"));
                }
                if t.origin != dest || diagram.destination(twin)? != he.origin {
                    return Err(invalid("twin endpoints are not reversed"));
                }
            }
            diagram.face(he.face)?;
        }

        let mut covered = 0usize;
        for face_id in diagram.face_ids() {
            let face = diagram.face(face_id)?;
            if face.degree < 3 {
                return Err(invalid("face has fewer than 3 sides"));
            }
            let mut current: HalfEdgeId = face.edge;
            for _ in 0..face.degree {
                let he = diagram.half_edge(current)?;
                if he.face != face_id {
                    return Err(invalid("half-edge does not point back to its face"));
                }
                current = he.next;
            }
            if current != face.edge {
                return Err(invalid("face cycle length differs from its degree"));
            }
            covered += face.degree;
        }
        if covered != diagram.half_edge_count() {
            return Err(invalid("half-edges outside every face cycle"));
        }

        let tol = diagram.config().merge_tolerance;
        for (id, v) in diagram.vertices() {
            match v.outgoing {
                Some(out) if diagram.half_edge(out)?.origin == id => {}
                _ => return Err(invalid("vertex outgoing edge does not start at it")),
            }
            if !diagram
                .vertex_index()
                .neighbours_within(&v.point, tol, id)
                .is_empty()
            {
                return Err(invalid("two vertices within merge tolerance"));
            }
        }
        Ok(())
    }
}

fn invalid(reason: &str) -> TopologyError {
    TopologyError::InvalidTopology(reason.to_owned())
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
    fn empty_diagram_is_valid() {
        assert!(IsValid::new().execute(&Diagram::new()));
    }

    #[test]
    fn grown_diagram_is_valid() {
        let catalog = Catalog::standard().unwrap();
        let hex = catalog.get("3.3.3.3.3.3").unwrap();
        let mut d = Diagram::new();
        let centre = d
            .seed(hex, None, Point2::new(0.0, 0.0), Point2::new(1.0, 0.0), 0)
            .unwrap();
        for host in BoundaryEdges::of_face(centre).execute(&d).unwrap() {
            AttachPlanigon::new(host, 0, hex).execute(&mut d).unwrap();
        }
        IsValid::new().diagnose(&d).unwrap();
        assert_eq!(d.face_count(), 7);
        // Hexagonal ring: 6 centre + 6 * 4 outer - 6 shared = 24 vertices.
        assert_eq!(d.vertex_count(), 24);
    }

    #[test]
    fn broken_twin_is_reported() {
        let mut d = Diagram::new();
        let a = d
            .insert_polygon(&[
                Point2::new(0.0, 0.0),
                Point2::new(1.0, 0.0),
                Point2::new(0.5, 1.0),
            ])
            .unwrap();
        let he = d.face(a).unwrap().edge;
        let other = d.half_edge(he).unwrap().next;
        d.half_edge_mut(he).unwrap().twin = Some(other);
        assert!(!IsValid::new().execute(&d));
    }
}
