//! Simplify whole shapes as supplied by a point source, reprojecting on the way.
use nalgebra::Point2;

use crate::config::{ReprojectStage, SimplifyConfig};
use crate::reproject::{reproject_all, Reprojection};
use crate::simplify::rdp_reduce_with;
use crate::{Precision, Result};

/// One record's geometry: one or more parts (open linestrings or closed rings).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Shape {
    pub parts: Vec<Vec<Point2<Precision>>>,
}

impl Shape {
    pub fn from_parts(parts: Vec<Vec<Point2<Precision>>>) -> Self {
        Self { parts }
    }

    /// Total number of points over all parts.
    pub fn point_count(&self) -> usize {
        self.parts.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.iter().all(Vec::is_empty)
    }
}

/// Simplify one linestring, reprojecting before or after as configured.
pub fn simplify_part(
    line: &[Point2<Precision>],
    reprojection: Option<&mut dyn Reprojection>,
    config: &SimplifyConfig,
) -> Result<Vec<Point2<Precision>>> {
    match (reprojection, config.reproject) {
        (None, _) => rdp_reduce_with(line, config),
        (Some(r), ReprojectStage::Before) => rdp_reduce_with(&reproject_all(line, r), config),
        (Some(r), ReprojectStage::After) => {
            let simplified = rdp_reduce_with(line, config)?;
            Ok(reproject_all(&simplified, r))
        }
    }
}

// Shorten the trait object's lifetime so the reprojection can be lent out once per part.
fn reborrow<'a>(
    reprojection: &'a mut Option<&mut dyn Reprojection>,
) -> Option<&'a mut dyn Reprojection> {
    match reprojection {
        Some(r) => Some(&mut **r),
        None => None,
    }
}

/// Simplify every part of a shape, in order.
pub fn simplify_shape(
    shape: &Shape,
    mut reprojection: Option<&mut dyn Reprojection>,
    config: &SimplifyConfig,
) -> Result<Shape> {
    let parts = shape
        .parts
        .iter()
        .map(|part| simplify_part(part, reborrow(&mut reprojection), config))
        .collect::<Result<Vec<_>>>()?;
    Ok(Shape { parts })
}

/// Simplify a batch of shapes; the first failure aborts the batch.
pub fn simplify_shapes(
    shapes: &[Shape],
    mut reprojection: Option<&mut dyn Reprojection>,
    config: &SimplifyConfig,
) -> Result<Vec<Shape>> {
    let out = shapes
        .iter()
        .map(|shape| simplify_shape(shape, reborrow(&mut reprojection), config))
        .collect::<Result<Vec<_>>>()?;
    tracing::debug!(
        shapes = shapes.len(),
        before = shapes.iter().map(Shape::point_count).sum::<usize>(),
        after = out.iter().map(Shape::point_count).sum::<usize>(),
        "simplified shapes"
    );
    Ok(out)
}
