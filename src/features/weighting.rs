//! Homorhythmicity weighting
//!
//! Maps each timepoint's onset count to a normalized [0, 1] score relative
//! to the maximum simultaneous-onset count in the work. Two conventions
//! exist in the musicological literature behind this crate; both are kept
//! behind [`WeightingStrategy`] so the choice is explicit and consistent
//! with the thresholds used by the extrema ranker.

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;
use crate::features::round_hundredths;

/// Convention for turning an onset-count ratio into a homorhythmicity score
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeightingStrategy {
    /// Distance from the ambiguous midpoint: 0 at `ratio = 0.5`, rising to
    /// 1 at either extreme (all voices together, or all voices silent).
    ///
    /// This is the convention the default peak/trough thresholds
    /// (0.25 / 0.75) were tuned against.
    #[default]
    DistanceFromMedian,

    /// Plain proximity to the maximum: the ratio itself. 1 when all voices
    /// attack together, 0 at silence. Monotonic in the count.
    DistanceFromExtreme,
}

/// Weight a count sequence into [0, 1] homorhythmicity scores
///
/// Output has the same length and index alignment as the input; every value
/// is rounded to two decimal places. An empty input yields an empty output.
///
/// # Errors
///
/// Returns `AnalysisError::DegenerateData` when the maximum count is zero
/// (an all-silent timeline has no maximum to normalize against).
///
/// # Example
///
/// ```
/// use textura::features::weighting::{weight_timepoints, WeightingStrategy};
///
/// let weights = weight_timepoints(&[2, 1, 3, 1], WeightingStrategy::DistanceFromMedian)?;
/// assert_eq!(weights, vec![0.33, 0.33, 1.0, 0.33]);
/// # Ok::<(), textura::AnalysisError>(())
/// ```
pub fn weight_timepoints(
    counts: &[u32],
    strategy: WeightingStrategy,
) -> Result<Vec<f32>, AnalysisError> {
    if counts.is_empty() {
        return Ok(Vec::new());
    }

    let max = counts.iter().copied().max().unwrap_or(0);
    if max == 0 {
        return Err(AnalysisError::DegenerateData(
            "all timepoint counts are zero, nothing to normalize against".to_string(),
        ));
    }

    let weights = counts
        .iter()
        .map(|&count| {
            let ratio = count as f32 / max as f32;
            let weight = match strategy {
                WeightingStrategy::DistanceFromMedian => {
                    if ratio > 0.5 {
                        2.0 * (ratio - 0.5)
                    } else {
                        2.0 * (0.5 - ratio)
                    }
                }
                WeightingStrategy::DistanceFromExtreme => ratio,
            };
            round_hundredths(weight)
        })
        .collect();

    Ok(weights)
}
