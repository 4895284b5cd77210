use thiserror::Error;

/// Errors raised while simplifying or reprojecting linestrings.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// Tolerance was negative or NaN.
    #[error("invalid tolerance: {0} (must be a non-negative number)")]
    InvalidTolerance(f64),

    /// Both anchors of a segment coincide, even after the closed-ring remap,
    /// and the configured policy refuses to guess a deviation.
    #[error("degenerate segment between indices {start} and {end}: anchors coincide")]
    DegenerateSegment { start: usize, end: usize },

    /// Homogeneous matrix whose bottom row is not `[0, 0, 1]`.
    #[error("matrix is not an affine transform")]
    NotAffine,

    #[error("reprojection cache capacity must be non-zero")]
    InvalidCacheCapacity,
}

pub type Result<T> = std::result::Result<T, Error>;
