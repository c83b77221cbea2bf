use thiserror::Error;

/// Top-level error type for the chartgeom engine.
#[derive(Debug, Error)]
pub enum ChartGeomError {
    #[error(transparent)]
    Interpolation(#[from] InterpolationError),

    #[error(transparent)]
    Cluster(#[from] ClusterError),

    #[error(transparent)]
    Sequence(#[from] SequenceError),
}

/// Errors raised when selecting an interpolation strategy.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InterpolationError {
    #[error("unknown interpolation strategy: {0}")]
    UnknownStrategy(String),
}

/// Errors related to centroid clustering.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClusterError {
    #[error("{points} points cannot be split into {clusters} clusters")]
    InsufficientPoints { points: usize, clusters: usize },
}

/// Errors related to low-discrepancy sequence generation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SequenceError {
    #[error("dimension {dimension} is out of range [1, {max}]")]
    InvalidDimension { dimension: usize, max: usize },
}

/// Convenience type alias for results using [`ChartGeomError`].
pub type Result<T> = std::result::Result<T, ChartGeomError>;
