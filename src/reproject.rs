//! Map points between coordinate systems, one point at a time.
//!
//! Projection definitions themselves live elsewhere; anything which can map a
//! 2D point to a 2D point can be plugged in as a [Reprojection].
use std::num::NonZeroUsize;

use lru::LruCache;
use nalgebra::{Affine2, Matrix3, Point2, Vector2};

use crate::{Error, Precision, Result};

/// A pointwise coordinate transform.
pub trait Reprojection {
    fn reproject(&mut self, point: Point2<Precision>) -> Point2<Precision>;
}

impl<F> Reprojection for F
where
    F: FnMut(Point2<Precision>) -> Point2<Precision>,
{
    fn reproject(&mut self, point: Point2<Precision>) -> Point2<Precision> {
        self(point)
    }
}

/// Reproject every point of a linestring.
pub fn reproject_all<R: Reprojection + ?Sized>(
    points: &[Point2<Precision>],
    reprojection: &mut R,
) -> Vec<Point2<Precision>> {
    tracing::trace!(points = points.len(), "reprojecting");
    points.iter().map(|p| reprojection.reproject(*p)).collect()
}

/// Linear map plus translation, e.g. a unit change or a local grid shift.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineReprojection {
    transform: Affine2<Precision>,
}

impl AffineReprojection {
    /// From a 3x3 homogeneous matrix.
    pub fn from_matrix(matrix: Matrix3<Precision>) -> Result<Self> {
        if matrix[(2, 0)] != 0.0 || matrix[(2, 1)] != 0.0 || matrix[(2, 2)] != 1.0 {
            return Err(Error::NotAffine);
        }
        Ok(Self {
            transform: Affine2::from_matrix_unchecked(matrix),
        })
    }

    /// `p' = scale * p + offset`, per axis.
    pub fn scale_offset(scale: Vector2<Precision>, offset: Vector2<Precision>) -> Self {
        #[rustfmt::skip]
        let matrix = Matrix3::new(
            scale.x, 0.0, offset.x,
            0.0, scale.y, offset.y,
            0.0, 0.0, 1.0,
        );
        Self {
            transform: Affine2::from_matrix_unchecked(matrix),
        }
    }

    /// [None] if the linear part is singular.
    pub fn inverse(&self) -> Option<Self> {
        self.transform
            .try_inverse()
            .map(|transform| Self { transform })
    }

    pub fn matrix(&self) -> &Matrix3<Precision> {
        self.transform.matrix()
    }
}

impl Reprojection for AffineReprojection {
    fn reproject(&mut self, point: Point2<Precision>) -> Point2<Precision> {
        self.transform.transform_point(&point)
    }
}

/// Memoise an expensive reprojection.
///
/// Keyed on the exact bit pattern of the input coordinates:
/// rings and shared borders revisit the same vertices.
pub struct CachedReprojection<R> {
    inner: R,
    cache: LruCache<(u64, u64), Point2<Precision>>,
}

impl<R: Reprojection> CachedReprojection<R> {
    pub fn new(inner: R, capacity: usize) -> Result<Self> {
        let capacity = NonZeroUsize::new(capacity).ok_or(Error::InvalidCacheCapacity)?;
        Ok(Self {
            inner,
            cache: LruCache::new(capacity),
        })
    }

    /// Number of points currently cached.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Reprojection> Reprojection for CachedReprojection<R> {
    fn reproject(&mut self, point: Point2<Precision>) -> Point2<Precision> {
        let key = (point.x.to_bits(), point.y.to_bits());
        let inner = &mut self.inner;
        *self.cache.get_or_insert(key, || inner.reproject(point))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    use crate::test_utils::make_line;

    #[test]
    fn closure() {
        let mut swap = |p: Point2<f64>| Point2::new(p.y, p.x);
        let out = reproject_all(&make_line(vec![[1.0, 2.0], [3.0, 4.0]]), &mut swap);
        assert_eq!(out, make_line(vec![[2.0, 1.0], [4.0, 3.0]]));
    }

    #[test]
    fn scale_offset() {
        let mut affine = AffineReprojection::scale_offset(Vector2::new(2.0, 0.5), Vector2::new(10.0, -1.0));
        assert_eq!(affine.reproject(Point2::new(1.0, 4.0)), Point2::new(12.0, 1.0));
    }

    #[test]
    fn inverse() {
        let affine = AffineReprojection::scale_offset(Vector2::new(2.0, 4.0), Vector2::new(1.0, 1.0));
        let mut inv = affine.inverse().unwrap();
        assert_eq!(inv.reproject(Point2::new(3.0, 5.0)), Point2::new(1.0, 1.0));

        let flat = AffineReprojection::scale_offset(Vector2::new(0.0, 1.0), Vector2::zeros());
        assert!(flat.inverse().is_none());
    }

    #[test]
    fn from_matrix() {
        #[rustfmt::skip]
        let rotate = Matrix3::new(
            0.0, -1.0, 0.0,
            1.0, 0.0, 0.0,
            0.0, 0.0, 1.0,
        );
        let mut affine = AffineReprojection::from_matrix(rotate).unwrap();
        assert_eq!(affine.matrix(), &rotate);
        assert_eq!(affine.reproject(Point2::new(1.0, 0.0)), Point2::new(0.0, 1.0));

        let mut projective = rotate;
        projective[(2, 0)] = 0.5;
        assert_eq!(AffineReprojection::from_matrix(projective), Err(Error::NotAffine));
    }

    #[test]
    fn cache_reuses_results() {
        let calls = Cell::new(0);
        let double = |p: Point2<f64>| {
            calls.set(calls.get() + 1);
            Point2::new(p.x * 2.0, p.y * 2.0)
        };
        let mut cached = CachedReprojection::new(double, 2).unwrap();
        assert!(cached.is_empty());

        let ring = make_line(vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]);
        let out = reproject_all(&ring, &mut cached);
        assert_eq!(out[3], Point2::new(0.0, 0.0));
        assert_eq!(out[2], Point2::new(2.0, 2.0));
        // (0,0) was evicted by the time the ring closed
        assert_eq!(calls.get(), 4);
        assert_eq!(cached.len(), 2);

        cached.reproject(Point2::new(1.0, 1.0));
        assert_eq!(calls.get(), 4);
    }

    #[test]
    fn zero_capacity_rejected() {
        let identity = |p: Point2<f64>| p;
        assert!(matches!(
            CachedReprojection::new(identity, 0),
            Err(Error::InvalidCacheCapacity)
        ));
    }
}
