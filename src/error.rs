use thiserror::Error;

use crate::math::Point2;

/// Top-level error type for the planigon kernel.
#[derive(Debug, Error)]
pub enum PlanigonError {
    #[error(transparent)]
    Shape(#[from] ShapeError),

    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors raised while building planigon templates or synthesizing their vertices.
#[derive(Debug, Error)]
pub enum ShapeError {
    #[error("shape mismatch: {angles} angles but {lengths} lengths")]
    ShapeMismatch { angles: usize, lengths: usize },

    #[error("invalid vertex configuration: {0}")]
    InvalidConfiguration(String),

    #[error("angle {index} = {value} is outside (0, 360)")]
    InvalidAngle { index: usize, value: f64 },

    #[error("length {index} = {value} is not a positive finite number")]
    InvalidLength { index: usize, value: f64 },

    #[error("edge index {index} is out of range [0, {len})")]
    OutOfRange { index: usize, len: usize },

    #[error("host edge has zero length")]
    DegenerateEdge,

    #[error("unknown planigon: {0}")]
    UnknownPlanigon(String),
}

/// Errors related to the half-edge diagram.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("degenerate polygon: {0}")]
    DegeneratePolygon(String),

    #[error("non-manifold attachment: directed edge {origin} -> {destination} already exists")]
    NonManifoldAttachment {
        origin: Point2,
        destination: Point2,
    },

    #[error("entity not found: {0}")]
    EntityNotFound(&'static str),

    #[error("half-edge already has a twin")]
    NotBoundary,

    #[error("invalid topology: {0}")]
    InvalidTopology(String),
}

/// Errors in diagram configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(
        "merge tolerance {merge_tolerance} must be positive and no larger than cell size {cell_size}"
    )]
    InvalidTolerance { merge_tolerance: f64, cell_size: f64 },
}

/// Convenience type alias for results using [`PlanigonError`].
pub type Result<T> = std::result::Result<T, PlanigonError>;
