use crate::geometry::Vector;
use crate::math::AngleUnit;

use super::product::dot_product_algebraic;

/// Returned by [`angle_between_vectors`] when the vectors do not share a start point.
pub const ANGLE_UNDEFINED: f64 = -1.0;

/// Returns the angle between two vectors anchored at the same start point.
///
/// The angle is `acos(a · b / (|a| * |b|))`, reported in `unit`.
///
/// Returns [`ANGLE_UNDEFINED`] if the start points differ. If either vector
/// has zero length the ratio is undefined and the result is NaN.
#[must_use]
pub fn angle_between_vectors<const D: usize>(
    a: &Vector<D>,
    b: &Vector<D>,
    unit: AngleUnit,
) -> f64 {
    if a.start_point() != b.start_point() {
        tracing::debug!(
            a = ?a.start_point(),
            b = ?b.start_point(),
            "vectors do not share a start point, angle is undefined"
        );
        return ANGLE_UNDEFINED;
    }

    let lengths = a.length() * b.length();
    if lengths == 0.0 {
        tracing::debug!("zero-length vector, angle is NaN");
    }

    let cosine = dot_product_algebraic(a, b) / lengths;
    unit.convert(cosine.acos())
}
