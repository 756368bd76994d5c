use super::{Diagram, HalfEdgeId};

/// Iterator over the half-edges of one face boundary, following `next`.
///
/// Stops when the walk returns to its starting edge. A broken cycle ends the
/// walk early instead of looping: it stops on a missing half-edge and after
/// visiting as many edges as the diagram holds.
pub struct FaceEdges<'a> {
    diagram: &'a Diagram,
    start: HalfEdgeId,
    current: Option<HalfEdgeId>,
    budget: usize,
}

impl<'a> FaceEdges<'a> {
    pub(crate) fn new(diagram: &'a Diagram, start: HalfEdgeId) -> Self {
        Self {
            diagram,
            start,
            current: Some(start),
            budget: diagram.half_edge_count(),
        }
    }
}

impl Iterator for FaceEdges<'_> {
    type Item = HalfEdgeId;

    fn next(&mut self) -> Option<HalfEdgeId> {
        let current = self.current?;
        if self.budget == 0 {
            self.current = None;
            return None;
        }
        self.budget -= 1;
        self.current = self
            .diagram
            .half_edge(current)
            .ok()
            .map(|he| he.next)
            .filter(|&next| next != self.start);
        Some(current)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::math::Point2;
    use crate::topology::Diagram;

    #[test]
    fn walk_visits_every_edge_once() {
        let mut d = Diagram::new();
        let f = d
            .insert_polygon(&[
                Point2::new(0.0, 0.0),
                Point2::new(1.0, 0.0),
                Point2::new(0.5, 1.0),
            ])
            .unwrap();
        let edges: Vec<_> = d.face_edges(f).unwrap().collect();
        assert_eq!(edges.len(), 3);
        assert_eq!(edges[0], d.face(f).unwrap().edge);
        for w in edges.windows(2) {
            assert_eq!(d.half_edge(w[0]).unwrap().next, w[1]);
        }
    }
}
