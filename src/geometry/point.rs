/// 2D point type.
pub type Point2d = nalgebra::Point2<f64>;

/// 3D point type.
pub type Point3d = nalgebra::Point3<f64>;

/// Capability shared by every point: planar `x` and `y` coordinates.
pub trait PlanarPoint {
    /// Returns the x coordinate.
    fn x(&self) -> f64;

    /// Returns the y coordinate.
    fn y(&self) -> f64;
}

/// Capability of points that additionally carry a `z` coordinate.
pub trait SpatialPoint: PlanarPoint {
    /// Returns the z coordinate.
    fn z(&self) -> f64;
}

impl PlanarPoint for Point2d {
    fn x(&self) -> f64 {
        self.coords.x
    }

    fn y(&self) -> f64 {
        self.coords.y
    }
}

impl PlanarPoint for Point3d {
    fn x(&self) -> f64 {
        self.coords.x
    }

    fn y(&self) -> f64 {
        self.coords.y
    }
}

impl SpatialPoint for Point3d {
    fn z(&self) -> f64 {
        self.coords.z
    }
}

/// A point whose dimensionality is only known at runtime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnyPoint {
    /// A point in the plane.
    Planar(Point2d),
    /// A point in space.
    Spatial(Point3d),
}

impl AnyPoint {
    /// Returns the number of coordinates of the point (2 or 3).
    #[must_use]
    pub fn dimension(&self) -> usize {
        match self {
            Self::Planar(_) => 2,
            Self::Spatial(_) => 3,
        }
    }
}

impl PlanarPoint for AnyPoint {
    fn x(&self) -> f64 {
        match self {
            Self::Planar(p) => PlanarPoint::x(p),
            Self::Spatial(p) => PlanarPoint::x(p),
        }
    }

    fn y(&self) -> f64 {
        match self {
            Self::Planar(p) => PlanarPoint::y(p),
            Self::Spatial(p) => PlanarPoint::y(p),
        }
    }
}

impl From<Point2d> for AnyPoint {
    fn from(point: Point2d) -> Self {
        Self::Planar(point)
    }
}

impl From<Point3d> for AnyPoint {
    fn from(point: Point3d) -> Self {
        Self::Spatial(point)
    }
}
