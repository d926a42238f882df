//! Stateless vector algebra over [`Vector2d`](crate::geometry::Vector2d) and
//! [`Vector3d`](crate::geometry::Vector3d).
//!
//! Every function is pure: inputs are borrowed, never mutated, and results
//! are freshly built values. Degenerate inputs surface as NaN (or the
//! [`ANGLE_UNDEFINED`] sentinel) rather than as errors.

mod angle;
mod collinear;
mod product;

pub use angle::{angle_between_vectors, ANGLE_UNDEFINED};
pub use collinear::is_collinear;
pub use product::{cross_product, dot_product_algebraic, dot_product_geometric};

use crate::geometry::Vector;
use crate::math::Coordinates;

/// Returns `true` if both vectors have identical start and end points.
///
/// Vectors with the same displacement but different anchors are not equal.
#[must_use]
pub fn is_equal<const D: usize>(a: &Vector<D>, b: &Vector<D>) -> bool {
    a == b
}

/// Returns `true` if both vectors have exactly the same length.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn is_equal_length<const D: usize>(a: &Vector<D>, b: &Vector<D>) -> bool {
    a.length() == b.length()
}

/// Scales the coordinates of `v` by `k`.
#[must_use]
pub fn multiply_by_scalar<const D: usize>(v: &Vector<D>, k: f64) -> Coordinates<D> {
    v.coordinates() * k
}

/// Componentwise sum of the coordinates of `a` and `b`.
#[must_use]
pub fn add<const D: usize>(a: &Vector<D>, b: &Vector<D>) -> Coordinates<D> {
    a.coordinates() + b.coordinates()
}

/// Componentwise difference `a - b` of the coordinates.
#[must_use]
pub fn subtract<const D: usize>(a: &Vector<D>, b: &Vector<D>) -> Coordinates<D> {
    a.coordinates() - b.coordinates()
}
