//! Offset extraction
//!
//! Retrieves the position of note beginnings across a score, expressed as
//! rational offsets from the start of the work. Tied groups contribute
//! exactly one onset, at the start of the group, so a sustained note is
//! counted once regardless of how it is notated.

use crate::error::AnalysisError;
use crate::score::{OnsetTime, Score, Tie};

/// Extract the ordered onset positions of every sounding note in a score
///
/// Rests and tie continuations are skipped. The result is sorted ascending;
/// coincident onsets from different voices produce repeats.
///
/// # Errors
///
/// Returns `AnalysisError::InvalidInput` if the score contains no sounding
/// note onsets at all.
///
/// # Example
///
/// ```
/// use textura::features::onset::extract_onsets;
/// use textura::score::{NoteEvent, Part, Score};
/// use num_rational::Ratio;
///
/// let part = Part::new(
///     "Tenor",
///     vec![
///         NoteEvent::note(Ratio::from_integer(0), Ratio::from_integer(2), 55),
///         NoteEvent::note(Ratio::from_integer(2), Ratio::from_integer(2), 57),
///     ],
/// );
/// let onsets = extract_onsets(&Score::new(vec![part]))?;
/// assert_eq!(onsets.len(), 2);
/// # Ok::<(), textura::AnalysisError>(())
/// ```
pub fn extract_onsets(score: &Score) -> Result<Vec<OnsetTime>, AnalysisError> {
    let mut onsets: Vec<OnsetTime> = Vec::with_capacity(score.event_count());

    for part in &score.parts {
        for event in &part.events {
            if event.is_rest() {
                continue;
            }
            // Only the head of a tied group begins a new sound
            if matches!(event.tie, Tie::Continue | Tie::Stop) {
                continue;
            }
            onsets.push(event.onset);
        }
    }

    if onsets.is_empty() {
        return Err(AnalysisError::InvalidInput(
            "score contains no sounding note onsets".to_string(),
        ));
    }

    onsets.sort_unstable();

    log::debug!(
        "Extracted {} onsets across {} parts",
        onsets.len(),
        score.parts.len()
    );

    Ok(onsets)
}
