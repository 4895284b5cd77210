use crate::{Error, Precision, Result};

/// Which segments get the closed-ring anchor remap.
///
/// When a segment's first and last points coincide, the anchor line is drawn
/// from the first to the second-to-last point instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum AnchorRemap {
    /// Check every segment on the work-list.
    #[default]
    EverySegment,
    /// Only check the segment spanning the whole input.
    TopLevel,
}

/// What to do when the anchors coincide even after the remap,
/// e.g. `[a, a, a]` or `[a, b, a, a]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum DegeneratePolicy {
    /// Deviation is the squared distance from the anchor point.
    #[default]
    PointDistance,
    /// Every interior point has zero deviation, so the interior is dropped.
    Collapse,
    /// Fail with [Error::DegenerateSegment].
    Error,
}

/// Whether a reprojection runs on the raw points or on the simplified ones.
///
/// The deviation metric is not projection-invariant, so the two give different results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum ReprojectStage {
    #[default]
    Before,
    After,
}

/// All simplification parameters in one struct.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimplifyConfig {
    /// Maximum perpendicular distance a dropped point may lie from its anchor line.
    pub tolerance: Precision,
    pub anchor_remap: AnchorRemap,
    pub degenerate: DegeneratePolicy,
    pub reproject: ReprojectStage,
}

impl Default for SimplifyConfig {
    fn default() -> Self {
        Self {
            tolerance: 0.0,
            anchor_remap: AnchorRemap::default(),
            degenerate: DegeneratePolicy::default(),
            reproject: ReprojectStage::default(),
        }
    }
}

impl SimplifyConfig {
    pub fn new(tolerance: Precision) -> Self {
        Self {
            tolerance,
            ..Default::default()
        }
    }

    pub fn with_anchor_remap(mut self, anchor_remap: AnchorRemap) -> Self {
        self.anchor_remap = anchor_remap;
        self
    }

    pub fn with_degenerate(mut self, degenerate: DegeneratePolicy) -> Self {
        self.degenerate = degenerate;
        self
    }

    pub fn with_reproject(mut self, reproject: ReprojectStage) -> Self {
        self.reproject = reproject;
        self
    }

    /// Squared tolerance, checked to be a non-negative number.
    pub(crate) fn tolerance_sq(&self) -> Result<Precision> {
        if self.tolerance.is_nan() || self.tolerance < 0.0 {
            return Err(Error::InvalidTolerance(self.tolerance));
        }
        Ok(self.tolerance * self.tolerance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = SimplifyConfig::default();
        assert_eq!(config.tolerance, 0.0);
        assert_eq!(config.anchor_remap, AnchorRemap::EverySegment);
        assert_eq!(config.degenerate, DegeneratePolicy::PointDistance);
        assert_eq!(config.reproject, ReprojectStage::Before);
    }

    #[test]
    fn builder() {
        let config = SimplifyConfig::new(2.0)
            .with_anchor_remap(AnchorRemap::TopLevel)
            .with_degenerate(DegeneratePolicy::Error)
            .with_reproject(ReprojectStage::After);
        assert_eq!(config.tolerance, 2.0);
        assert_eq!(config.anchor_remap, AnchorRemap::TopLevel);
        assert_eq!(config.degenerate, DegeneratePolicy::Error);
        assert_eq!(config.reproject, ReprojectStage::After);
        assert_eq!(config.tolerance_sq(), Ok(4.0));
    }

    #[test]
    fn rejects_bad_tolerance() {
        assert_eq!(
            SimplifyConfig::new(-1.0).tolerance_sq(),
            Err(Error::InvalidTolerance(-1.0))
        );
        assert!(matches!(
            SimplifyConfig::new(Precision::NAN).tolerance_sq(),
            Err(Error::InvalidTolerance(_))
        ));
    }
}
