//! Uniform-grid bucket index over vertex positions.
//!
//! A lookup scans the 3x3 block of cells around the query point, so it only
//! finds vertices within one cell size. Callers keep their tolerance at or
//! below `cell_size`.

use std::collections::HashMap;

use crate::math::Point2;

use super::vertex::VertexId;

/// Grid index answering "is there already a vertex near this point?".
#[derive(Debug, Clone)]
pub struct VertexIndex {
    cells: HashMap<(i64, i64), Vec<(VertexId, Point2)>>,
    cell_size: f64,
    len: usize,
}

impl VertexIndex {
    /// Creates an empty index with the given cell size.
    #[must_use]
    pub fn new(cell_size: f64) -> Self {
        Self {
            cells: HashMap::new(),
            cell_size,
            len: 0,
        }
    }

    /// Cell of `p`. Coordinates beyond the `i64` range saturate into the
    /// outermost cells.
    #[inline]
    fn cell_coords(&self, p: &Point2) -> (i64, i64) {
        #[allow(clippy::cast_possible_truncation)]
        let discretize = |v: f64| (v / self.cell_size).floor() as i64;
        (discretize(p.x), discretize(p.y))
    }

    /// Inserts a vertex at `point` (does not check for duplicates).
    pub fn add(&mut self, id: VertexId, point: Point2) {
        self.cells
            .entry(self.cell_coords(&point))
            .or_default()
            .push((id, point));
        self.len += 1;
    }

    /// Returns the first vertex within `eps` of `point`, scanning the
    /// neighbouring cells.
    #[must_use]
    pub fn find_near(&self, point: &Point2, eps: f64) -> Option<VertexId> {
        let (cx, cy) = self.cell_coords(point);
        for dx in -1..=1 {
            for dy in -1..=1 {
                let key = (cx.saturating_add(dx), cy.saturating_add(dy));
                let Some(bucket) = self.cells.get(&key) else {
                    continue;
                };
                if let Some((id, _)) = bucket.iter().find(|(_, p)| (p - point).norm() <= eps) {
                    return Some(*id);
                }
            }
        }
        None
    }

    /// Every indexed vertex within `eps` of `point`, other than `exclude`.
    pub(crate) fn neighbours_within(
        &self,
        point: &Point2,
        eps: f64,
        exclude: VertexId,
    ) -> Vec<VertexId> {
        let (cx, cy) = self.cell_coords(point);
        let mut found = Vec::new();
        for dx in -1..=1 {
            for dy in -1..=1 {
                let key = (cx.saturating_add(dx), cy.saturating_add(dy));
                if let Some(bucket) = self.cells.get(&key) {
                    found.extend(
                        bucket
                            .iter()
                            .filter(|(id, p)| *id != exclude && (p - point).norm() <= eps)
                            .map(|(id, _)| *id),
                    );
                }
            }
        }
        found
    }

    /// Edge length of one grid cell.
    #[must_use]
    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// Number of indexed vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no vertex has been indexed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
