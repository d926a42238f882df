//! Vectis demo: builds a few points and vectors and logs derived values.
//!
//! Usage:
//! ```text
//! cargo run --example vectors
//! RUST_LOG=vectis=trace cargo run --example vectors   # include branch traces
//! ```

use tracing::{info, warn};
use vectis::geometry::{AnyPoint, AnyVector, Point2d, Point3d, Vector2d, Vector3d};
use vectis::math::AngleUnit;
use vectis::operations::vector_math;
use vectis::VectisError;

fn main() -> Result<(), VectisError> {
    // Default: WARN for everything, INFO for the demo and vectis.
    // Override with RUST_LOG env var (e.g. RUST_LOG=vectis=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("vectors=info".parse().unwrap_or_default())
        .add_directive("vectis=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let start = Point3d::new(1.0, 2.0, 3.0);
    let end = Point3d::new(10.0, 4.0, 5.0);
    let vector = Vector3d::new(start, end);
    info!(coordinates = ?vector.coordinates(), length = vector.length(), "spatial vector");

    let flat_end = Point3d::new(1.0, 2.0, 0.0);
    let flat = Vector3d::new(start, flat_end);
    let flat_copy = Vector3d::new(start, flat_end);
    info!(
        is_equal = vector_math::is_equal(&flat, &flat_copy),
        has_zero_coordinates = flat.has_zero_coordinates(),
        "vectors sharing both points"
    );

    let a = Vector2d::new(Point2d::origin(), Point2d::new(1.0, 0.0));
    let b = Vector2d::new(Point2d::origin(), Point2d::new(0.0, 1.0));
    info!(
        degrees = vector_math::angle_between_vectors(&a, &b, AngleUnit::Degrees),
        radians = vector_math::angle_between_vectors(&a, &b, AngleUnit::Radians),
        cross = ?vector_math::cross_product(&a, &b),
        collinear = vector_math::is_collinear(&a, &b),
        "planar unit axes"
    );

    let c = Vector2d::new(Point2d::origin(), Point2d::new(2.0, 0.0));
    info!(collinear = vector_math::is_collinear(&a, &c), "same axis");

    let mixed = AnyVector::try_new(
        AnyPoint::from(Point2d::new(0.0, 0.0)),
        AnyPoint::from(Point3d::new(1.0, 1.0, 1.0)),
    );
    if let Err(err) = &mixed {
        warn!("{err}");
    }

    let checked = AnyVector::try_new(
        AnyPoint::from(Point3d::origin()),
        AnyPoint::from(Point3d::new(2.0, 3.0, 6.0)),
    )?;
    info!(
        dimension = checked.dimension(),
        length = checked.length(),
        "checked construction"
    );

    Ok(())
}
