use crate::error::{GeometryError, Result};

use super::point::AnyPoint;
use super::vector::{Vector2d, Vector3d};

/// A vector whose dimensionality is decided at runtime.
///
/// Built through [`AnyVector::try_new`], which rejects start and end points
/// of different dimensionality.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnyVector {
    /// A vector in the plane.
    Planar(Vector2d),
    /// A vector in space.
    Spatial(Vector3d),
}

impl AnyVector {
    /// Creates a vector from two points of matching dimensionality.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DimensionMismatch`] if one point is planar
    /// and the other spatial.
    pub fn try_new(start_point: AnyPoint, end_point: AnyPoint) -> Result<Self> {
        match (start_point, end_point) {
            (AnyPoint::Planar(start), AnyPoint::Planar(end)) => {
                Ok(Self::Planar(Vector2d::new(start, end)))
            }
            (AnyPoint::Spatial(start), AnyPoint::Spatial(end)) => {
                Ok(Self::Spatial(Vector3d::new(start, end)))
            }
            (start, end) => {
                tracing::debug!(
                    start = start.dimension(),
                    end = end.dimension(),
                    "rejected vector with mixed dimensionality"
                );
                Err(GeometryError::DimensionMismatch {
                    start: start.dimension(),
                    end: end.dimension(),
                }
                .into())
            }
        }
    }

    /// Returns the number of coordinates (2 or 3).
    #[must_use]
    pub fn dimension(&self) -> usize {
        match self {
            Self::Planar(_) => 2,
            Self::Spatial(_) => 3,
        }
    }

    /// Returns the Euclidean length of the vector.
    #[must_use]
    pub fn length(&self) -> f64 {
        match self {
            Self::Planar(v) => v.length(),
            Self::Spatial(v) => v.length(),
        }
    }

    /// Returns `true` if at least one coordinate is exactly zero.
    #[must_use]
    pub fn has_zero_coordinates(&self) -> bool {
        match self {
            Self::Planar(v) => v.has_zero_coordinates(),
            Self::Spatial(v) => v.has_zero_coordinates(),
        }
    }

    /// Returns `true` if every coordinate is exactly zero.
    #[must_use]
    pub fn is_zero_vector(&self) -> bool {
        match self {
            Self::Planar(v) => v.is_zero_vector(),
            Self::Spatial(v) => v.is_zero_vector(),
        }
    }
}

impl From<Vector2d> for AnyVector {
    fn from(vector: Vector2d) -> Self {
        Self::Planar(vector)
    }
}

impl From<Vector3d> for AnyVector {
    fn from(vector: Vector3d) -> Self {
        Self::Spatial(vector)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::VectisError;
    use crate::geometry::point::{Point2d, Point3d};

    #[test]
    fn planar_pair() {
        let v = AnyVector::try_new(
            Point2d::new(0.0, 0.0).into(),
            Point2d::new(3.0, 4.0).into(),
        )
        .unwrap();
        assert_eq!(v.dimension(), 2);
        assert!((v.length() - 5.0).abs() < 1e-12);
        assert!(!v.has_zero_coordinates());
    }

    #[test]
    fn spatial_pair() {
        let v = AnyVector::try_new(
            Point3d::new(1.0, 2.0, 3.0).into(),
            Point3d::new(1.0, 2.0, 3.0).into(),
        )
        .unwrap();
        assert_eq!(v.dimension(), 3);
        assert!(v.is_zero_vector());
        assert!(v.has_zero_coordinates());
    }

    #[test]
    fn mixed_dimensionality_is_rejected() {
        let err = AnyVector::try_new(
            Point2d::new(0.0, 0.0).into(),
            Point3d::new(1.0, 1.0, 1.0).into(),
        )
        .unwrap_err();

        let VectisError::Geometry(geometry) = err;
        assert_eq!(
            geometry,
            GeometryError::DimensionMismatch { start: 2, end: 3 }
        );
    }

    #[test]
    fn mismatch_message_names_both_dimensions() {
        let err = AnyVector::try_new(
            Point3d::new(0.0, 0.0, 0.0).into(),
            Point2d::new(1.0, 1.0).into(),
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "cannot build a vector from a 3D start point and a 2D end point"
        );
    }
}
