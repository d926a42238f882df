use crate::geometry::{Spatial, Vector};
use crate::math::Vector3;

/// Cross product `a × b` of the coordinates, embedded in 3-space.
///
/// Planar operands are treated as lying in the `z = 0` plane, so only the
/// `z` component of their product can be non-zero.
#[must_use]
pub fn cross_product<V: Spatial>(a: &V, b: &V) -> Vector3 {
    let c1 = a.spatial_coordinates();
    let c2 = b.spatial_coordinates();
    let (x1, y1, z1) = (c1.x, c1.y, c1.z);
    let (x2, y2, z2) = (c2.x, c2.y, c2.z);

    Vector3::new(y1 * z2 - z1 * y2, z1 * x2 - x1 * z2, x1 * y2 - y1 * x2)
}

/// Algebraic dot product: the sum of componentwise products of the coordinates.
#[must_use]
pub fn dot_product_algebraic<const D: usize>(a: &Vector<D>, b: &Vector<D>) -> f64 {
    a.coordinates().dot(&b.coordinates())
}

/// Geometric dot product `|a| * |b| * cos(angle)`, with `angle` in radians.
///
/// Use when the angle is known but the coordinates are not.
#[must_use]
pub fn dot_product_geometric(length_a: f64, length_b: f64, angle: f64) -> f64 {
    length_a * length_b * angle.cos()
}
