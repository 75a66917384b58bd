//! Windowed averaging
//!
//! Moving-average smoothing of the weighted timeline. Each output value is
//! the arithmetic mean of one contiguous window of the input, so the curve
//! tracks sustained stretches of rhythmic togetherness rather than
//! individual timepoints.

use crate::error::AnalysisError;
use crate::features::round_hundredths;

/// Slide a fixed-size window over a sequence, emitting the mean per position
///
/// Output length is `values.len() - window`; each entry is rounded to two
/// decimal places. An input no longer than the window yields an empty
/// output, which is valid (short works simply have no windowed profile).
///
/// # Errors
///
/// Returns `AnalysisError::InvalidInput` if `window` is zero.
pub fn windowed_average(values: &[f32], window: usize) -> Result<Vec<f32>, AnalysisError> {
    if window == 0 {
        return Err(AnalysisError::InvalidInput(
            "averaging window size must be greater than zero".to_string(),
        ));
    }

    if values.len() <= window {
        log::debug!(
            "Sequence of length {} does not exceed window {}, no windowed averages",
            values.len(),
            window
        );
        return Ok(Vec::new());
    }

    let mut averages = Vec::with_capacity(values.len() - window);
    for start in 0..values.len() - window {
        let sum: f32 = values[start..start + window].iter().sum();
        averages.push(round_hundredths(sum / window as f32));
    }

    Ok(averages)
}

/// Mean of the whole weighted timeline, rounded to two decimal places
///
/// The single-number homorhythmicity summary of a movement.
///
/// # Errors
///
/// Returns `AnalysisError::InvalidInput` for an empty sequence.
pub fn overall_average(values: &[f32]) -> Result<f32, AnalysisError> {
    if values.is_empty() {
        return Err(AnalysisError::InvalidInput(
            "cannot average an empty sequence".to_string(),
        ));
    }

    let sum: f32 = values.iter().sum();
    Ok(round_hundredths(sum / values.len() as f32))
}
