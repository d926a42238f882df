use thiserror::Error;

/// Top-level error type for the Vectis vector library.
#[derive(Debug, Error)]
pub enum VectisError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Errors related to constructing geometric values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeometryError {
    #[error("cannot build a vector from a {start}D start point and a {end}D end point")]
    DimensionMismatch { start: usize, end: usize },
}

/// Convenience type alias for results using [`VectisError`].
pub type Result<T> = std::result::Result<T, VectisError>;
