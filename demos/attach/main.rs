//! Planigon attach demo: grows a small patch around a seed tile.
//!
//! Usage:
//! ```text
//! cargo run --example attach                 # default (4.8.8 around a square)
//! cargo run --example attach -- 3.4.6.4      # ring of the given planigon
//! RUST_LOG=planigon=debug cargo run --example attach
//! ```

use planigon::math::Point2;
use planigon::operations::creation::AttachPlanigon;
use planigon::operations::query::{BoundaryEdges, BoundingBox, FaceArea, IsValid};
use planigon::{Catalog, Diagram, PlanigonError};

fn main() -> Result<(), PlanigonError> {
    // Default: WARN for everything, INFO for planigon.
    // Override with RUST_LOG env var (e.g. RUST_LOG=planigon=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("attach=info".parse().unwrap_or_default())
        .add_directive("planigon=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let ring_name = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "4.8.8".to_owned());

    let catalog = Catalog::standard()?;
    let seed = catalog.get("4.4.4.4")?;
    let ring = catalog.get(&ring_name)?;

    let mut diagram = Diagram::new();
    let centre = diagram.seed(
        seed,
        Some("4.4.4.4"),
        Point2::new(0.0, 0.0),
        Point2::new(1.0, 0.0),
        0,
    )?;

    for host in BoundaryEdges::of_face(centre).execute(&diagram)? {
        match AttachPlanigon::new(host, 0, ring)
            .named(ring_name.as_str())
            .execute(&mut diagram)
        {
            Ok(face) => {
                let area = FaceArea::new(face).execute(&diagram)?;
                tracing::info!(?face, area, "attached {ring_name}");
            }
            Err(err) => tracing::warn!(%err, "skipped host edge"),
        }
    }

    if let Err(err) = IsValid::new().diagnose(&diagram) {
        tracing::error!(%err, "diagram is inconsistent");
    }
    let open = BoundaryEdges::all().execute(&diagram)?.len();
    let extent = BoundingBox::new().execute(&diagram)?;
    tracing::info!(
        faces = diagram.face_count(),
        vertices = diagram.vertex_count(),
        half_edges = diagram.half_edge_count(),
        open,
        ?extent,
        "done"
    );
    Ok(())
}
