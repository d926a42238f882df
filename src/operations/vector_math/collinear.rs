use crate::geometry::{Spatial, Vector};

use super::product::cross_product;

/// Returns `true` if `a` and `b` are collinear (one is a scalar multiple of the other).
///
/// The test depends on which vectors have a zero coordinate:
///
/// - exactly one of them: every component of `a × b` must be exactly zero;
/// - both: a zero vector is collinear with anything, otherwise `b` scaled by
///   the ratio at the first non-zero component of `a` must equal `a`;
/// - neither: all per-axis ratios `a[i] / b[i]` must be equal.
///
/// All comparisons are exact. NaN coordinates make the result `false`.
#[must_use]
pub fn is_collinear<const D: usize>(a: &Vector<D>, b: &Vector<D>) -> bool
where
    Vector<D>: Spatial,
{
    match (a.has_zero_coordinates(), b.has_zero_coordinates()) {
        (true, true) => {
            tracing::trace!("collinearity: null-coordinate ratio test");
            null_coordinate_ratio_test(a, b)
        }
        (false, false) => {
            tracing::trace!("collinearity: ratio test");
            ratio_test(a, b)
        }
        _ => {
            tracing::trace!("collinearity: cross product test");
            cross_product_test(a, b)
        }
    }
}

fn cross_product_test<V: Spatial>(a: &V, b: &V) -> bool {
    cross_product(a, b).iter().all(|&c| c == 0.0)
}

#[allow(clippy::float_cmp)]
fn null_coordinate_ratio_test<const D: usize>(a: &Vector<D>, b: &Vector<D>) -> bool {
    if a.is_zero_vector() || b.is_zero_vector() {
        return true;
    }

    let a = a.coordinates();
    let b = b.coordinates();
    let Some(index) = a.iter().position(|&c| c != 0.0) else {
        return true;
    };
    let ratio = a[index] / b[index];

    b * ratio == a
}

#[allow(clippy::float_cmp)]
fn ratio_test<const D: usize>(a: &Vector<D>, b: &Vector<D>) -> bool {
    let ratios = a.coordinates().component_div(&b.coordinates());
    let first = ratios[0];

    ratios.iter().all(|&r| r == first)
}
