mod attach_planigon;
mod insert_polygon;
mod seed_planigon;

pub use attach_planigon::AttachPlanigon;
pub use insert_polygon::InsertPolygon;
pub use seed_planigon::SeedPlanigon;
