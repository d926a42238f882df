pub mod any_vector;
pub mod point;
pub mod vector;

pub use any_vector::AnyVector;
pub use point::{AnyPoint, PlanarPoint, Point2d, Point3d, SpatialPoint};
pub use vector::{Spatial, Vector, Vector2d, Vector3d};
