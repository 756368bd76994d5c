use std::fmt;
use std::str::FromStr;

use super::Planigon;
use crate::error::{PlanigonError, Result, ShapeError};

/// Upper bound on the number of faces a parsed configuration may expand to.
pub const MAX_FACES: usize = 256;

/// The ring of face degrees meeting at one vertex, e.g. `3.4.6.4`.
///
/// Parses dot notation with optional exponents (`3^2.4.3.4`, `4.8^2`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VertexConfig {
    faces: Vec<u32>,
}

impl VertexConfig {
    /// Creates a configuration from a list of face degrees.
    ///
    /// # Errors
    ///
    /// Returns `ShapeError::InvalidConfiguration` for fewer than three faces
    /// or a face degree below three.
    pub fn new(faces: Vec<u32>) -> Result<Self> {
        if faces.len() < 3 {
            return Err(ShapeError::InvalidConfiguration(format!(
                "expected at least 3 faces around a vertex, got {}",
                faces.len()
            ))
            .into());
        }
        if let Some(&bad) = faces.iter().find(|&&n| n < 3) {
            return Err(
                ShapeError::InvalidConfiguration(format!("face degree {bad} is below 3")).into(),
            );
        }
        Ok(Self { faces })
    }

    /// Face degrees in order around the vertex.
    #[must_use]
    pub fn faces(&self) -> &[u32] {
        &self.faces
    }

    /// Builds the dual planigon of this configuration.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`Planigon::from_vertex_config`].
    pub fn planigon(&self) -> Result<Planigon> {
        Planigon::from_vertex_config(&self.faces)
    }
}

impl FromStr for VertexConfig {
    type Err = PlanigonError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || ShapeError::InvalidConfiguration(format!("cannot parse '{s}'"));
        let mut faces = Vec::new();
        for term in s.trim().split('.') {
            let (base, exp) = match term.split_once('^') {
                Some((b, e)) => (b, e.trim().parse::<usize>().map_err(|_| invalid())?),
                None => (term, 1),
            };
            let degree = base.trim().parse::<u32>().map_err(|_| invalid())?;
            if exp == 0 {
                return Err(invalid().into());
            }
            if exp > MAX_FACES - faces.len() {
                return Err(ShapeError::InvalidConfiguration(format!(
                    "'{s}' expands to more than {MAX_FACES} faces"
                ))
                .into());
            }
            faces.extend(std::iter::repeat_n(degree, exp));
        }
        Self::new(faces)
    }
}

impl fmt::Display for VertexConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, n) in self.faces.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{n}")?;
        }
        Ok(())
    }
}
