//! Ranked local-extrema detection
//!
//! Finds the positions a sliding window repeatedly selects as its local
//! maximum (or minimum). A position chosen as best-in-window by many
//! overlapping window placements is a stronger structural peak or trough
//! than one chosen by a single placement, so candidates are ranked by that
//! recurrence count.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;

/// Whether the ranker searches for local maxima or minima
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExtremumKind {
    /// Local maxima; candidates must exceed the threshold
    Max,
    /// Local minima; candidates must fall below the threshold
    Min,
}

/// A position repeatedly selected as a window-local extremum
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankedExtremum {
    /// Index into the scored sequence
    pub position: usize,

    /// Value at that index
    pub value: f32,

    /// Number of window placements that selected this position
    pub occurrences: usize,
}

/// Rank positions by how many sliding windows select them as their extremum
///
/// For every start index in `[0, len - window)` the window's extremum is
/// picked (first occurrence wins value ties) and recorded if it passes the
/// threshold: strictly above it for [`ExtremumKind::Max`], strictly below
/// for [`ExtremumKind::Min`]. Positions recorded by only one window are
/// dropped. The survivors are ordered by recurrence count descending, then
/// by position ascending, and truncated to `top_n`.
///
/// A window no smaller than the sequence yields an empty result, matching
/// the pipeline's empty-output policy for short inputs.
///
/// # Errors
///
/// Returns `AnalysisError::InvalidInput` if `window` is zero.
///
/// # Example
///
/// ```
/// use textura::features::extrema::{rank_local_extrema, ExtremumKind};
///
/// let scores = vec![0.1, 0.2, 0.9, 0.2, 0.1, 0.1, 0.1, 0.1];
/// let peaks = rank_local_extrema(&scores, ExtremumKind::Max, 10, 0.25, 4)?;
/// assert_eq!(peaks[0].position, 2);
/// assert_eq!(peaks[0].occurrences, 3);
/// # Ok::<(), textura::AnalysisError>(())
/// ```
pub fn rank_local_extrema(
    values: &[f32],
    kind: ExtremumKind,
    top_n: usize,
    threshold: f32,
    window: usize,
) -> Result<Vec<RankedExtremum>, AnalysisError> {
    if window == 0 {
        return Err(AnalysisError::InvalidInput(
            "ranking window size must be greater than zero".to_string(),
        ));
    }

    if values.len() <= window {
        log::debug!(
            "Sequence of length {} does not exceed ranking window {}, no extrema",
            values.len(),
            window
        );
        return Ok(Vec::new());
    }

    // position -> number of windows that selected it
    let mut hits: HashMap<usize, usize> = HashMap::new();

    for start in 0..values.len() - window {
        let mut best = start;
        for candidate in start + 1..start + window {
            let better = match kind {
                ExtremumKind::Max => values[candidate] > values[best],
                ExtremumKind::Min => values[candidate] < values[best],
            };
            if better {
                best = candidate;
            }
        }

        let passes = match kind {
            ExtremumKind::Max => values[best] > threshold,
            ExtremumKind::Min => values[best] < threshold,
        };
        if passes {
            *hits.entry(best).or_insert(0) += 1;
        }
    }

    let mut ranked: Vec<RankedExtremum> = hits
        .into_iter()
        .filter(|&(_, occurrences)| occurrences > 1)
        .map(|(position, occurrences)| RankedExtremum {
            position,
            value: values[position],
            occurrences,
        })
        .collect();

    // Recurrence count first; ascending position is the documented tie order
    ranked.sort_by(|a, b| {
        b.occurrences
            .cmp(&a.occurrences)
            .then(a.position.cmp(&b.position))
    });
    ranked.truncate(top_n);

    log::debug!(
        "Ranked {} recurrent {:?} extrema (window {}, threshold {})",
        ranked.len(),
        kind,
        window,
        threshold
    );

    Ok(ranked)
}
