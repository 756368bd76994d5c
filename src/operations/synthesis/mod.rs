mod planigon_vertices;

pub use planigon_vertices::{planigon_vertices, PlanigonVertices};
