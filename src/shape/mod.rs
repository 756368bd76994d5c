pub mod catalog;
pub mod planigon;
pub mod vertex_config;

pub use catalog::Catalog;
pub use planigon::{derive_lengths, inradius, Planigon};
pub use vertex_config::VertexConfig;
