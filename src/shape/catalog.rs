use super::{Planigon, VertexConfig};
use crate::error::{Result, ShapeError};

/// The 21 vertex types whose faces fit exactly around a point in the plane.
const VERTEX_TYPES: [&str; 21] = [
    "3^6",
    "3^4.6",
    "3^3.4^2",
    "3^2.4.3.4",
    "3^2.4.12",
    "3.4.3.12",
    "3^2.6^2",
    "3.6.3.6",
    "3.4^2.6",
    "3.4.6.4",
    "3.7.42",
    "3.8.24",
    "3.9.18",
    "3.10.15",
    "3.12^2",
    "4^4",
    "4.5.20",
    "4.6.12",
    "4.8^2",
    "5^2.10",
    "6^3",
];

/// Named planigon templates, kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<(String, Planigon)>,
}

impl Catalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the planigons dual to every planar vertex type, keyed by the
    /// expanded dot notation of their configuration (`"3.4.6.4"`).
    ///
    /// # Errors
    ///
    /// Returns an error only if a built-in configuration fails to parse.
    pub fn standard() -> Result<Self> {
        let mut catalog = Self::new();
        for src in VERTEX_TYPES {
            let config: VertexConfig = src.parse()?;
            catalog.insert(config.to_string(), config.planigon()?);
        }
        Ok(catalog)
    }

    /// Adds or replaces a named planigon.
    pub fn insert(&mut self, name: impl Into<String>, planigon: Planigon) {
        let name = name.into();
        if let Some(slot) = self.entries.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = planigon;
        } else {
            self.entries.push((name, planigon));
        }
    }

    /// Looks up a planigon by name.
    ///
    /// # Errors
    ///
    /// Returns `ShapeError::UnknownPlanigon` if no entry has that name.
    pub fn get(&self, name: &str) -> Result<&Planigon> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, p)| p)
            .ok_or_else(|| ShapeError::UnknownPlanigon(name.to_owned()).into())
    }

    /// Position of a name in catalog order.
    #[must_use]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|(n, _)| n == name)
    }

    /// Iterates `(name, planigon)` pairs in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Planigon)> {
        self.entries.iter().map(|(n, p)| (n.as_str(), p))
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the catalog has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
