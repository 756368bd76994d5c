use crate::error::{ConfigError, Result};

/// Default grid cell size of the vertex index.
pub const DEFAULT_CELL_SIZE: f64 = 1e-3;

/// Default distance below which two positions are the same vertex.
pub const DEFAULT_MERGE_TOLERANCE: f64 = 1e-5;

/// Tuning for vertex identity resolution in a [`Diagram`](crate::topology::Diagram).
///
/// The vertex index only scans neighbouring cells, so `merge_tolerance`
/// must not exceed `cell_size`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiagramConfig {
    /// Edge length of one grid cell of the vertex index.
    pub cell_size: f64,
    /// Maximum Euclidean distance at which two positions merge.
    pub merge_tolerance: f64,
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self {
            cell_size: DEFAULT_CELL_SIZE,
            merge_tolerance: DEFAULT_MERGE_TOLERANCE,
        }
    }
}

impl DiagramConfig {
    /// Creates a configuration with explicit values.
    #[must_use]
    pub fn new(cell_size: f64, merge_tolerance: f64) -> Self {
        Self {
            cell_size,
            merge_tolerance,
        }
    }

    /// Checks that both values are positive and finite and that the
    /// tolerance fits inside one cell.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidTolerance` otherwise.
    pub fn validate(&self) -> Result<()> {
        let ok = self.cell_size.is_finite()
            && self.merge_tolerance.is_finite()
            && self.cell_size > 0.0
            && self.merge_tolerance > 0.0
            && self.merge_tolerance <= self.cell_size;
        if ok {
            Ok(())
        } else {
            Err(ConfigError::InvalidTolerance {
                merge_tolerance: self.merge_tolerance,
                cell_size: self.cell_size,
            }
            .into())
        }
    }
}
