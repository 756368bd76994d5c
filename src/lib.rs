pub mod config;
pub mod error;
pub mod math;
pub mod operations;
pub mod shape;
pub mod topology;

pub use config::DiagramConfig;
pub use error::{PlanigonError, Result};
pub use operations::synthesis::planigon_vertices;
pub use shape::{Catalog, Planigon};
pub use topology::Diagram;
