/// 2D coordinate (displacement) type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 3D coordinate (displacement) type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Coordinate type of a `D`-dimensional displacement.
pub type Coordinates<const D: usize> = nalgebra::SVector<f64, D>;

/// Unit in which an angle is reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AngleUnit {
    /// Degrees in `[0, 180]`.
    #[default]
    Degrees,
    /// Radians in `[0, π]`.
    Radians,
}

impl AngleUnit {
    /// Converts an angle given in radians into this unit.
    #[must_use]
    pub fn convert(self, radians: f64) -> f64 {
        match self {
            Self::Degrees => radians.to_degrees(),
            Self::Radians => radians,
        }
    }
}
