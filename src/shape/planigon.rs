use std::f64::consts::PI;

use crate::error::{Result, ShapeError};

/// A polygon template: a clockwise sequence of interior angles and edge lengths.
///
/// `lengths[i]` is the length of the edge running clockwise from the corner
/// bearing `angles[i]` to the corner bearing `angles[(i + 1) % N]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Planigon {
    angles: Vec<f64>,
    lengths: Vec<f64>,
}

impl Planigon {
    /// Creates a planigon from its angle sequence (degrees) and length sequence.
    ///
    /// # Errors
    ///
    /// Returns `ShapeError::ShapeMismatch` if the two sequences differ in
    /// length, `InvalidConfiguration` for fewer than three sides,
    /// `InvalidAngle` for an angle outside `(0, 360)` and `InvalidLength`
    /// for a length that is not positive and finite.
    pub fn new(angles: Vec<f64>, lengths: Vec<f64>) -> Result<Self> {
        check_sequences(&angles, &lengths)?;
        Ok(Self { angles, lengths })
    }

    /// Builds the planigon dual to a vertex configuration.
    ///
    /// Corner `i` sits at the centre of face `i` around the vertex, so its
    /// angle is `360 / config[i]`; edge lengths follow [`derive_lengths`].
    ///
    /// # Errors
    ///
    /// Returns `ShapeError::InvalidConfiguration` for fewer than three faces
    /// or a face with fewer than three sides.
    pub fn from_vertex_config(config: &[u32]) -> Result<Self> {
        let lengths = derive_lengths(config)?;
        let angles = config.iter().map(|&n| 360.0 / f64::from(n)).collect();
        Self::new(angles, lengths)
    }

    /// Interior angles in degrees, clockwise.
    #[must_use]
    pub fn angles(&self) -> &[f64] {
        &self.angles
    }

    /// Edge lengths, clockwise.
    #[must_use]
    pub fn lengths(&self) -> &[f64] {
        &self.lengths
    }

    /// Number of sides.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.angles.len()
    }

    /// Sum of the interior angles in degrees.
    #[must_use]
    pub fn angle_sum(&self) -> f64 {
        self.angles.iter().sum()
    }

    /// Returns `true` if the angle sum matches that of a simple `N`-gon,
    /// `(N - 2) * 180` degrees, within `tol` degrees.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn is_closed(&self, tol: f64) -> bool {
        let expected = (self.degree() as f64 - 2.0) * 180.0;
        (self.angle_sum() - expected).abs() <= tol
    }
}

/// Validates an angle/length pair the same way [`Planigon::new`] does.
pub(crate) fn check_sequences(angles: &[f64], lengths: &[f64]) -> Result<()> {
    if angles.len() != lengths.len() {
        return Err(ShapeError::ShapeMismatch {
            angles: angles.len(),
            lengths: lengths.len(),
        }
        .into());
    }
    if angles.len() < 3 {
        return Err(ShapeError::InvalidConfiguration(format!(
            "a planigon needs at least 3 sides, got {}",
            angles.len()
        ))
        .into());
    }
    if let Some((index, &value)) = angles
        .iter()
        .enumerate()
        .find(|(_, a)| !(a.is_finite() && **a > 0.0 && **a < 360.0))
    {
        return Err(ShapeError::InvalidAngle { index, value }.into());
    }
    if let Some((index, &value)) = lengths
        .iter()
        .enumerate()
        .find(|(_, l)| !(l.is_finite() && **l > 0.0))
    {
        return Err(ShapeError::InvalidLength { index, value }.into());
    }
    Ok(())
}

/// Apothem of a regular `n`-gon with unit side: `1 / (2 tan(π / n))`.
#[must_use]
pub fn inradius(n: u32) -> f64 {
    1.0 / (2.0 * (PI / f64::from(n)).tan())
}

/// Derives planigon edge lengths from a vertex configuration.
///
/// Edge `i` joins the centres of faces `i` and `i + 1`, which lie
/// `inradius` away from their shared unit edge on either side.
///
/// # Errors
///
/// Returns `ShapeError::InvalidConfiguration` if `config` has fewer than
/// three entries or any entry is below three.
pub fn derive_lengths(config: &[u32]) -> Result<Vec<f64>> {
    let n = config.len();
    if n < 3 {
        return Err(ShapeError::InvalidConfiguration(format!(
            "expected at least 3 faces around a vertex, got {n}"
        ))
        .into());
    }
    if let Some(&bad) = config.iter().find(|&&deg| deg < 3) {
        return Err(
            ShapeError::InvalidConfiguration(format!("face degree {bad} is below 3")).into(),
        );
    }
    Ok((0..n)
        .map(|i| inradius(config[i]) + inradius(config[(i + 1) % n]))
        .collect())
}
