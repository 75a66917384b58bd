//! Texture feature extraction modules
//!
//! The stages of the homorhythmicity pipeline, in data-flow order:
//! - Offset extraction (onsets of sounding notes, ties resolved)
//! - Quantization (rational onsets onto a common integer grid)
//! - Weighting (onset counts mapped to [0, 1] togetherness scores)
//! - Windowed averaging (moving-average smoothing)
//! - Local-extrema ranking (recurrence-counted peaks and troughs)
//!
//! Plus melodic-interval extraction, which operates per part rather than on
//! the quantized timeline.

pub mod extrema;
pub mod melody;
pub mod onset;
pub mod quantize;
pub mod weighting;
pub mod windowing;

/// Round to two decimal places, the resolution all published homorhythmicity
/// values are reported at.
pub(crate) fn round_hundredths(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}
