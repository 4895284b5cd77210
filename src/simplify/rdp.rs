//! Simplify a linestring using the [Ramer-Douglas-Peucker](https://en.wikipedia.org/wiki/Ramer%E2%80%93Douglas%E2%80%93Peucker_algorithm) algorithm.
//!
//! Segments are split at their worst point until every interior point lies within
//! `tolerance` of the line through its segment's anchors.
//! Splitting uses an explicit work-list rather than recursion, so arbitrarily long lines are fine.
use crate::config::{AnchorRemap, DegeneratePolicy, SimplifyConfig};
use crate::{Error, Precision, Result};
use nalgebra::{distance_squared, Point};

/// Squared distance from `p` to the infinite line through `begin` and `end`,
/// via the projection identity `|p - begin|^2 - ((end - begin) . (p - begin))^2 / |end - begin|^2`.
fn perp_dist2<const D: usize>(
    begin: &Point<Precision, D>,
    end: &Point<Precision, D>,
    p: &Point<Precision, D>,
    length_sq: Precision,
) -> Precision {
    let along = (end - begin).dot(&(p - begin));
    distance_squared(begin, p) - along * along / length_sq
}

/// Index of the interior point of `line[start..=end]` which must be kept, if any.
fn split_point<const D: usize>(
    line: &[Point<Precision, D>],
    start: usize,
    end: usize,
    epsilon_sq: Precision,
    config: &SimplifyConfig,
) -> Result<Option<usize>> {
    let begin = &line[start];
    let remap = match config.anchor_remap {
        AnchorRemap::EverySegment => true,
        AnchorRemap::TopLevel => start == 0 && end == line.len() - 1,
    };
    // closed ring: measure against the second-to-last point instead
    let anchor_end = if remap && *begin == line[end] {
        &line[end - 1]
    } else {
        &line[end]
    };

    let length_sq = distance_squared(begin, anchor_end);
    let degenerate = length_sq == 0.0;
    if degenerate {
        tracing::warn!(start, end, policy = ?config.degenerate, "coincident anchors");
        match config.degenerate {
            DegeneratePolicy::Error => return Err(Error::DegenerateSegment { start, end }),
            DegeneratePolicy::Collapse => return Ok(None),
            DegeneratePolicy::PointDistance => (),
        }
    }

    let mut greatest_dist2 = (start + 1, Precision::NEG_INFINITY);
    for (idx, point) in line.iter().enumerate().take(end).skip(start + 1) {
        let d2 = if degenerate {
            distance_squared(begin, point)
        } else {
            perp_dist2(begin, anchor_end, point, length_sq)
        };
        // strict comparison: ties go to the lowest index
        if d2 > greatest_dist2.1 {
            greatest_dist2 = (idx, d2);
        }
    }

    if greatest_dist2.1 < epsilon_sq || greatest_dist2.1 <= 0.0 {
        return Ok(None);
    }
    tracing::trace!(start, end, split = greatest_dist2.0, dist2 = greatest_dist2.1);
    Ok(Some(greatest_dist2.0))
}

/// Return the indices of the points in the line which would be kept if simplified using RDP,
/// with the given anchor and degenerate-segment policies.
///
/// Lines of fewer than 3 points are returned whole.
pub fn rdp_keep_with<const D: usize>(
    line: &[Point<Precision, D>],
    config: &SimplifyConfig,
) -> Result<Vec<usize>> {
    let epsilon_sq = config.tolerance_sq()?;
    if line.len() < 3 {
        return Ok((0..line.len()).collect());
    }

    let last_idx = line.len() - 1;
    let mut keep = vec![false; line.len()];
    keep[0] = true;
    keep[last_idx] = true;

    let mut segments = vec![(0, last_idx)];
    while let Some((start, end)) = segments.pop() {
        if end - start < 2 {
            continue;
        }
        if let Some(idx) = split_point(line, start, end, epsilon_sq, config)? {
            keep[idx] = true;
            // popped left first
            segments.push((idx, end));
            segments.push((start, idx));
        }
    }

    let kept: Vec<usize> = keep
        .iter()
        .enumerate()
        .filter_map(|(idx, k)| k.then_some(idx))
        .collect();
    tracing::debug!(
        tolerance = config.tolerance,
        before = line.len(),
        after = kept.len(),
        "rdp"
    );
    Ok(kept)
}

/// Return the indices of the points in the line which would be kept if simplified using RDP.
pub fn rdp_keep<const D: usize>(
    line: &[Point<Precision, D>],
    tolerance: Precision,
) -> Result<Vec<usize>> {
    rdp_keep_with(line, &SimplifyConfig::new(tolerance))
}

/// Decimate the linestring using RDP, with the given policies.
pub fn rdp_reduce_with<const D: usize>(
    line: &[Point<Precision, D>],
    config: &SimplifyConfig,
) -> Result<Vec<Point<Precision, D>>> {
    let kept = rdp_keep_with(line, config)?;
    Ok(kept.into_iter().map(|idx| line[idx]).collect())
}

/// Decimate the linestring using RDP.
pub fn rdp_reduce<const D: usize>(
    line: &[Point<Precision, D>],
    tolerance: Precision,
) -> Result<Vec<Point<Precision, D>>> {
    rdp_reduce_with(line, &SimplifyConfig::new(tolerance))
}

/// Reusable RDP simplifier carrying its configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Simplifier {
    config: SimplifyConfig,
}

impl Simplifier {
    pub fn new(config: SimplifyConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SimplifyConfig {
        &self.config
    }

    pub fn keep<const D: usize>(&self, line: &[Point<Precision, D>]) -> Result<Vec<usize>> {
        rdp_keep_with(line, &self.config)
    }

    pub fn simplify<const D: usize>(
        &self,
        line: &[Point<Precision, D>],
    ) -> Result<Vec<Point<Precision, D>>> {
        rdp_reduce_with(line, &self.config)
    }
}
