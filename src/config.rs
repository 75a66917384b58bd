//! Configuration parameters for texture analysis

use crate::features::weighting::WeightingStrategy;

/// Analysis configuration parameters
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    // Quantization
    /// Minimum rhythmic value resolved by the quantizer, expressed as a
    /// denominator: 4 = quarter note, 8 = eighth note (default: 8)
    ///
    /// Use 4 for scores in original note values, 8 for modern editions.
    /// Onsets finer than this subdivision are excluded from the analysis.
    pub min_rhy_denom: u64,

    // Weighting
    /// Weighting convention mapping onset counts to [0, 1] homorhythmicity
    /// scores (default: DistanceFromMedian)
    pub weighting: WeightingStrategy,

    // Smoothing
    /// Window size for the moving average over the weighted timeline,
    /// in quantized timepoints (default: 16)
    pub average_window: usize,

    // Extrema ranking
    /// Window size for local-extremum selection; independent of
    /// `average_window` (default: 16)
    pub rank_window: usize,

    /// Maximum number of ranked peaks/troughs to return (default: 10)
    pub top_n: usize,

    /// Minimum value for a local maximum to count as a peak (default: 0.25)
    ///
    /// Sensible values depend on `min_rhy_denom`: a finer grid dilutes the
    /// weighted timeline with zero-count timepoints and lowers the averages.
    pub peak_threshold: f32,

    /// Maximum value for a local minimum to count as a trough (default: 0.75)
    pub trough_threshold: f32,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            min_rhy_denom: 8,
            weighting: WeightingStrategy::DistanceFromMedian,
            average_window: 16,
            rank_window: 16,
            top_n: 10,
            peak_threshold: 0.25,
            trough_threshold: 0.75,
        }
    }
}
