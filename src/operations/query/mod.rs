mod adjacent_faces;
mod area;
mod boundary_edges;
mod bounding_box;
mod is_valid;

pub use adjacent_faces::AdjacentFaces;
pub use area::FaceArea;
pub use boundary_edges::BoundaryEdges;
pub use bounding_box::{Aabb, BoundingBox};
pub use is_valid::IsValid;
