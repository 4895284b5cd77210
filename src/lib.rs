//! Simplify polylines with the Ramer-Douglas-Peucker algorithm.
//!
//! ```
//! use linesimp::nalgebra::Point2;
//!
//! let line = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(1.0, 0.1),
//!     Point2::new(2.0, -0.1),
//!     Point2::new(3.0, 0.0),
//! ];
//! let simplified = linesimp::simplify(&line, 0.5)?;
//! assert_eq!(simplified, vec![Point2::new(0.0, 0.0), Point2::new(3.0, 0.0)]);
//! # Ok::<(), linesimp::Error>(())
//! ```
pub use nalgebra;
use nalgebra::Point2;

pub mod config;
pub mod error;
pub mod pipeline;
pub mod reproject;
pub mod simplify;

#[cfg(test)]
mod test_utils;

pub use config::{AnchorRemap, DegeneratePolicy, ReprojectStage, SimplifyConfig};
pub use error::{Error, Result};
pub use pipeline::Shape;
pub use reproject::Reprojection;
pub use simplify::Simplifier;

pub type Precision = f64;

/// An ordered sequence of 2D points.
pub type Polyline = Vec<Point2<Precision>>;

/// Simplify a 2D polyline with RDP, dropping points which lie within `tolerance`
/// of the line through their segment's anchors.
///
/// The first and last points are always kept; lines of fewer than 3 points are returned as-is.
/// Fails if `tolerance` is negative or NaN.
pub fn simplify(line: &[Point2<Precision>], tolerance: Precision) -> Result<Polyline> {
    simplify::rdp_reduce(line, tolerance)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::test_utils::make_line;

    #[test]
    fn two_points_unchanged() {
        let line = make_line(vec![[0.0, 0.0], [10.0, 10.0]]);
        for tolerance in [0.0, 1.0, 100.0] {
            assert_eq!(simplify(&line, tolerance).unwrap(), line);
        }
    }

    #[test]
    fn closed_ring() {
        let ring = make_line(vec![[0.0, 0.0], [5.0, 5.0], [10.0, 0.0], [0.0, 0.0]]);
        assert_eq!(simplify(&ring, 1.0).unwrap(), ring);
    }

    #[test]
    fn negative_tolerance() {
        let line = make_line(vec![[0.0, 0.0], [10.0, 10.0]]);
        assert_eq!(simplify(&line, -1.0), Err(Error::InvalidTolerance(-1.0)));
    }

    #[test]
    fn input_untouched() {
        let line = make_line(vec![[0.0, 0.0], [1.0, 0.1], [2.0, 0.0]]);
        let copy = line.clone();
        let out = simplify(&line, 1.0).unwrap();
        assert_eq!(out.len(), 2);
        assert_eq!(line, copy);
    }
}
