//! Onset quantization and timepoint counting
//!
//! Rescales rational onset positions onto a common integer time-grid and
//! counts how many onsets fall on every timepoint in the covered span.
//!
//! Algorithm:
//! 1. Drop onsets finer than the minimum rhythmic value
//! 2. Rescale the survivors by the LCM of their denominators so every
//!    position becomes an integer
//! 3. Histogram the rescaled positions
//! 4. Zero-fill the inclusive span from the earliest to the latest position
//!
//! Dropped onsets are excluded from the LCM, the counting, and the span
//! alike, so the grid is determined only by onsets that can appear on it.

use num_integer::Integer;

use crate::error::AnalysisError;
use crate::features::weighting::{weight_timepoints, WeightingStrategy};
use crate::score::OnsetTime;

/// Onset counts on a uniform integer time-grid
///
/// `counts[i]` is the number of onsets at rescaled position `first + i`.
/// Every timepoint in the inclusive span carries an entry, with explicit
/// zeros where nothing sounds.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct QuantizedTimeline {
    /// Onset count per integer timepoint, index 0 = earliest position
    pub counts: Vec<u32>,

    /// Earliest rescaled onset position (grid origin)
    pub first: u64,

    /// Multiplier applied to the rational onsets; `resolution` grid steps
    /// per quarter note
    pub resolution: u64,
}

impl QuantizedTimeline {
    /// Distance between the earliest and latest onset, in grid steps
    pub fn span(&self) -> u64 {
        self.counts.len().saturating_sub(1) as u64
    }

    /// True if the work collapses to a single timepoint
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Weight the counts into [0, 1] homorhythmicity scores
    ///
    /// Convenience forwarding to [`weight_timepoints`].
    pub fn weighted(&self, strategy: WeightingStrategy) -> Result<Vec<f32>, AnalysisError> {
        weight_timepoints(&self.counts, strategy)
    }
}

/// Count onsets for every timepoint of the quantized grid
///
/// `min_rhy_denom` names the finest rhythmic value resolved, as a
/// denominator relative to the whole note: 4 = quarter note, 8 = eighth
/// note. Onsets are in quarter-note units, so an onset survives the filter
/// when its reduced denominator is at most `min_rhy_denom / 4`.
///
/// # Errors
///
/// - `InvalidInput` if `min_rhy_denom < 4` (coarser than the quarter-note
///   unit the onsets are expressed in)
/// - `InvalidInput` if `onsets` is empty, or every onset is finer than the
///   minimum rhythmic value
///
/// # Edge case
///
/// A single surviving onset, or several all at the same position, yields an
/// empty timeline (span 0). That is a valid result, not an error.
pub fn count_timepoint_onsets(
    onsets: &[OnsetTime],
    min_rhy_denom: u64,
) -> Result<QuantizedTimeline, AnalysisError> {
    if min_rhy_denom < 4 {
        return Err(AnalysisError::InvalidInput(format!(
            "minimum rhythmic denominator must be at least 4 (quarter note), got {}",
            min_rhy_denom
        )));
    }

    if onsets.is_empty() {
        return Err(AnalysisError::InvalidInput(
            "cannot quantize an empty onset sequence".to_string(),
        ));
    }

    // Onsets are in quarter notes: denominator 2 means an eighth-note grid
    let max_denom = min_rhy_denom / 4;
    let kept: Vec<OnsetTime> = onsets
        .iter()
        .copied()
        .filter(|onset| *onset.denom() <= max_denom)
        .collect();

    if kept.len() < onsets.len() {
        log::debug!(
            "Dropped {} of {} onsets finer than 1/{} notes",
            onsets.len() - kept.len(),
            onsets.len(),
            min_rhy_denom
        );
    }

    if kept.is_empty() {
        return Err(AnalysisError::InvalidInput(format!(
            "all {} onsets are finer than the minimum rhythmic value 1/{}",
            onsets.len(),
            min_rhy_denom
        )));
    }

    // LCM of the surviving denominators brings every onset onto an integer
    // grid without distorting relative positions
    let resolution = kept
        .iter()
        .fold(1u64, |acc, onset| acc.lcm(onset.denom()));

    let positions: Vec<u64> = kept
        .iter()
        .map(|onset| (*onset * resolution).to_integer())
        .collect();

    let first = positions.iter().copied().min().unwrap_or(0);
    let last = positions.iter().copied().max().unwrap_or(0);

    if first == last {
        log::debug!("Quantized span is zero, returning empty timeline");
        return Ok(QuantizedTimeline {
            counts: Vec::new(),
            first,
            resolution,
        });
    }

    let mut counts = vec![0u32; (last - first + 1) as usize];
    for position in positions {
        counts[(position - first) as usize] += 1;
    }

    log::debug!(
        "Quantized {} onsets onto [{}, {}] at resolution {}",
        kept.len(),
        first,
        last,
        resolution
    );

    Ok(QuantizedTimeline {
        counts,
        first,
        resolution,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_rational::Ratio;

    fn qn(n: u64) -> OnsetTime {
        Ratio::from_integer(n)
    }

    fn frac(n: u64, d: u64) -> OnsetTime {
        Ratio::new(n, d)
    }

    #[test]
    fn test_reference_scenario() {
        // 7 onsets, 4 distinct positions, inclusive span of 4 timepoints
        let onsets = vec![qn(0), qn(0), qn(1), qn(2), qn(2), qn(2), qn(3)];
        let timeline = count_timepoint_onsets(&onsets, 8).unwrap();

        assert_eq!(timeline.counts, vec![2, 1, 3, 1]);
        assert_eq!(timeline.first, 0);
        assert_eq!(timeline.resolution, 1);
        assert_eq!(timeline.span(), 3);
    }

    #[test]
    fn test_zero_fill_between_onsets() {
        let onsets = vec![qn(0), qn(4)];
        let timeline = count_timepoint_onsets(&onsets, 8).unwrap();
        assert_eq!(timeline.counts, vec![1, 0, 0, 0, 1]);
    }

    #[test]
    fn test_fractional_onsets_rescaled_by_lcm() {
        // Eighth-note offsets: denominators 1 and 2, LCM 2
        let onsets = vec![qn(0), frac(1, 2), qn(1)];
        let timeline = count_timepoint_onsets(&onsets, 8).unwrap();

        assert_eq!(timeline.resolution, 2);
        assert_eq!(timeline.counts, vec![1, 1, 1]);
    }

    #[test]
    fn test_fine_onsets_filtered_everywhere() {
        // Sixteenth-note onset at 1/4 is finer than the eighth-note minimum:
        // it must not widen the grid, join the counts, or stretch the span
        let onsets = vec![qn(0), frac(1, 4), qn(1), qn(2)];
        let timeline = count_timepoint_onsets(&onsets, 8).unwrap();

        assert_eq!(timeline.resolution, 1);
        assert_eq!(timeline.counts, vec![1, 1, 1]);
        assert_eq!(timeline.counts.iter().sum::<u32>(), 3);
    }

    #[test]
    fn test_triplet_grid_via_lcm() {
        // Quarter-note triplets (denominator 3) against duplets (denominator 2)
        let onsets = vec![qn(0), frac(1, 3), frac(2, 3), frac(1, 2), qn(1)];
        let timeline = count_timepoint_onsets(&onsets, 12).unwrap();

        assert_eq!(timeline.resolution, 6);
        // Positions: 0, 2, 4, 3, 6
        assert_eq!(timeline.counts, vec![1, 0, 1, 1, 1, 0, 1]);
    }

    #[test]
    fn test_single_onset_yields_empty_timeline() {
        let timeline = count_timepoint_onsets(&[qn(5)], 8).unwrap();
        assert!(timeline.is_empty());
        assert_eq!(timeline.span(), 0);
        assert_eq!(timeline.first, 5);
    }

    #[test]
    fn test_coincident_onsets_yield_empty_timeline() {
        let timeline = count_timepoint_onsets(&[qn(2), qn(2), qn(2)], 8).unwrap();
        assert!(timeline.is_empty());
    }

    #[test]
    fn test_nonzero_origin() {
        let onsets = vec![qn(10), qn(11), qn(12)];
        let timeline = count_timepoint_onsets(&onsets, 8).unwrap();
        assert_eq!(timeline.first, 10);
        assert_eq!(timeline.counts, vec![1, 1, 1]);
    }

    #[test]
    fn test_counts_sum_matches_kept_onsets() {
        let onsets = vec![qn(0), qn(0), qn(1), qn(3), qn(3), qn(3)];
        let timeline = count_timepoint_onsets(&onsets, 8).unwrap();
        assert_eq!(timeline.counts.iter().sum::<u32>() as usize, onsets.len());
    }

    #[test]
    fn test_idempotent_on_integer_grid() {
        // Quantize fractional onsets, then feed the rescaled integer grid
        // positions back in: an all-integer sequence has LCM 1, so no
        // further rescaling occurs and the counts are reproduced
        let onsets = vec![qn(0), frac(1, 2), qn(1), qn(1)];
        let once = count_timepoint_onsets(&onsets, 8).unwrap();
        assert_eq!(once.resolution, 2);

        let rescaled: Vec<OnsetTime> = onsets
            .iter()
            .map(|onset| *onset * once.resolution)
            .collect();
        let twice = count_timepoint_onsets(&rescaled, 8).unwrap();
        assert_eq!(twice.resolution, 1);
        assert_eq!(twice.counts, once.counts);
    }

    #[test]
    fn test_invalid_parameters() {
        assert!(count_timepoint_onsets(&[qn(0), qn(1)], 2).is_err());
        assert!(count_timepoint_onsets(&[], 8).is_err());

        // Everything finer than the minimum rhythmic value
        let fine = vec![frac(1, 4), frac(3, 4)];
        assert!(count_timepoint_onsets(&fine, 8).is_err());
    }
}
