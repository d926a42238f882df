use nalgebra::Point;

use crate::math::{Coordinates, Vector3};

use super::point::{Point2d, Point3d};

/// A bound vector running from a start point to an end point.
///
/// Every derived quantity (coordinates, length, zero predicates) is
/// recomputed from the two points on access, so 2D and 3D vectors share
/// the same algorithms parameterized by the component count `D`.
#[derive(Debug, Clone, Copy)]
pub struct Vector<const D: usize> {
    start_point: Point<f64, D>,
    end_point: Point<f64, D>,
}

/// Vector in the plane.
pub type Vector2d = Vector<2>;

/// Vector in space.
pub type Vector3d = Vector<3>;

impl<const D: usize> Vector<D> {
    /// Creates a new vector from `start_point` to `end_point`.
    #[must_use]
    pub fn new(start_point: Point<f64, D>, end_point: Point<f64, D>) -> Self {
        Self {
            start_point,
            end_point,
        }
    }

    /// Returns the start point.
    #[must_use]
    pub fn start_point(&self) -> &Point<f64, D> {
        &self.start_point
    }

    /// Returns the end point.
    #[must_use]
    pub fn end_point(&self) -> &Point<f64, D> {
        &self.end_point
    }

    /// Returns the displacement `end - start`, componentwise.
    #[must_use]
    pub fn coordinates(&self) -> Coordinates<D> {
        self.end_point - self.start_point
    }

    /// Returns the Euclidean norm of [`coordinates`](Self::coordinates).
    ///
    /// NaN coordinates yield a NaN length.
    #[must_use]
    pub fn length(&self) -> f64 {
        // abs() folds a `-0.0` root into `0.0`.
        self.coordinates().norm().abs()
    }

    /// Returns `true` if at least one coordinate is exactly zero.
    #[must_use]
    pub fn has_zero_coordinates(&self) -> bool {
        self.coordinates().iter().any(|&c| c == 0.0)
    }

    /// Returns `true` if every coordinate is exactly zero.
    #[must_use]
    pub fn is_zero_vector(&self) -> bool {
        self.coordinates().iter().all(|&c| c == 0.0)
    }
}

/// Structural equality: start points and end points compared field by field.
///
/// Two vectors with the same displacement but different anchors are not equal.
impl<const D: usize> PartialEq for Vector<D> {
    fn eq(&self, other: &Self) -> bool {
        self.start_point.coords == other.start_point.coords
            && self.end_point.coords == other.end_point.coords
    }
}

/// Vectors whose coordinates can be embedded in 3-space.
pub trait Spatial {
    /// Returns the coordinates as a 3D triple. Planar vectors get `z = 0`.
    fn spatial_coordinates(&self) -> Vector3;
}

impl Spatial for Vector2d {
    fn spatial_coordinates(&self) -> Vector3 {
        let c = self.coordinates();
        Vector3::new(c.x, c.y, 0.0)
    }
}

impl Spatial for Vector3d {
    fn spatial_coordinates(&self) -> Vector3 {
        self.coordinates()
    }
}

impl From<Vector2d> for Vector3d {
    /// Lifts a planar vector into the `z = 0` plane.
    fn from(vector: Vector2d) -> Self {
        let lift = |p: &Point2d| Point3d::new(p.x, p.y, 0.0);
        Self::new(lift(vector.start_point()), lift(vector.end_point()))
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn v2(start: (f64, f64), end: (f64, f64)) -> Vector2d {
        Vector2d::new(Point2d::new(start.0, start.1), Point2d::new(end.0, end.1))
    }

    fn v3(start: (f64, f64, f64), end: (f64, f64, f64)) -> Vector3d {
        Vector3d::new(
            Point3d::new(start.0, start.1, start.2),
            Point3d::new(end.0, end.1, end.2),
        )
    }

    #[test]
    fn coordinates_are_end_minus_start() {
        let v = v3((1.0, 2.0, 3.0), (10.0, 4.0, 5.0));
        assert_eq!(v.coordinates(), Vector3::new(9.0, 2.0, 2.0));
    }

    #[test]
    fn length_3_4_5() {
        let v = v2((1.0, 1.0), (4.0, 5.0));
        assert_relative_eq!(v.length(), 5.0);
    }

    #[test]
    fn spatial_length() {
        let v = v3((0.0, 0.0, 0.0), (2.0, 3.0, 6.0));
        assert_relative_eq!(v.length(), 7.0);
    }

    #[test]
    fn length_is_non_negative() {
        let samples = [
            v3((0.0, 0.0, 0.0), (0.0, 0.0, 0.0)),
            v3((-0.0, 0.0, -0.0), (0.0, -0.0, 0.0)),
            v3((5.0, -3.0, 2.0), (-7.0, 1.0, -9.0)),
            v3((1e-200, 0.0, 0.0), (0.0, 0.0, 0.0)),
        ];
        for v in &samples {
            let len = v.length();
            assert!(len >= 0.0, "len={len}");
            assert!(len.is_sign_positive(), "len={len}");
        }
    }

    #[test]
    fn length_propagates_nan() {
        let v = v2((0.0, 0.0), (f64::NAN, 1.0));
        assert!(v.length().is_nan());
    }

    #[test]
    fn zero_vector_iff_points_coincide() {
        assert!(v3((1.0, 2.0, 3.0), (1.0, 2.0, 3.0)).is_zero_vector());
        assert!(!v3((1.0, 2.0, 3.0), (1.0, 2.0, 4.0)).is_zero_vector());
        assert!(v2((-2.5, 7.0), (-2.5, 7.0)).is_zero_vector());
    }

    #[test]
    fn zero_coordinates() {
        // Displacement (0, 0, -3).
        let v = v3((1.0, 2.0, 3.0), (1.0, 2.0, 0.0));
        assert!(v.has_zero_coordinates());
        assert!(!v.is_zero_vector());

        let w = v2((0.0, 0.0), (1.0, 2.0));
        assert!(!w.has_zero_coordinates());
    }

    #[test]
    fn zero_vector_has_zero_coordinates() {
        let v = v2((3.0, 3.0), (3.0, 3.0));
        assert!(v.has_zero_coordinates());
    }

    #[test]
    fn equality_is_structural() {
        let a = v2((0.0, 0.0), (1.0, 1.0));
        let b = v2((0.0, 0.0), (1.0, 1.0));
        let shifted = v2((1.0, 1.0), (2.0, 2.0));
        assert_eq!(a, b);
        assert_eq!(a.coordinates(), shifted.coordinates());
        assert_ne!(a, shifted);
    }

    #[test]
    fn lifted_vector_matches_planar() {
        let planar = v2((1.0, -2.0), (4.0, 2.0));
        let lifted = Vector3d::from(planar);

        assert_eq!(lifted.coordinates().z, 0.0);
        assert_eq!(lifted.coordinates().xy(), planar.coordinates());
        assert_eq!(lifted.length(), planar.length());
        assert!(lifted.has_zero_coordinates());
        assert_eq!(planar.spatial_coordinates(), lifted.spatial_coordinates());
    }

    #[test]
    fn planar_spatial_coordinates_have_zero_z() {
        let v = v2((0.0, 0.0), (3.0, 4.0));
        assert_eq!(v.spatial_coordinates(), Vector3::new(3.0, 4.0, 0.0));
    }
}
