//! Analysis result types

use serde::{Deserialize, Serialize};

use crate::features::extrema::RankedExtremum;

/// Complete texture analysis of one work
///
/// All sequences are freshly computed per call and share the quantized
/// grid's index space; serialization to whatever format the caller wants
/// is the caller's job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Onset count per quantized timepoint (explicit zeros included)
    pub counts: Vec<u32>,

    /// Homorhythmicity weight per timepoint, in [0, 1]
    pub weights: Vec<f32>,

    /// Moving-average smoothing of the weights
    pub windowed_averages: Vec<f32>,

    /// Whole-work mean homorhythmicity; 0.0 for a degenerate (empty)
    /// timeline
    pub overall_weight: f32,

    /// Recurrent local maxima of the windowed averages, most recurrent
    /// first
    pub peaks: Vec<RankedExtremum>,

    /// Recurrent local minima of the windowed averages, most recurrent
    /// first
    pub troughs: Vec<RankedExtremum>,

    /// Analysis metadata
    pub metadata: AnalysisMetadata,
}

/// Metadata accompanying an analysis run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisMetadata {
    /// Composer, as catalogued in the score
    pub composer: Option<String>,

    /// Movement or section title
    pub title: Option<String>,

    /// Parent work title
    pub parent_title: Option<String>,

    /// Composer's country, if the injected lookup knows the composer
    pub country: Option<String>,

    /// `composer-parent_title-title`, present only when all three are
    pub display_name: Option<String>,

    /// Number of onsets extracted (ties resolved)
    pub onset_count: usize,

    /// Length of the quantized timeline (inclusive span; 0 when degenerate)
    pub timeline_len: usize,

    /// Grid steps per quarter note after quantization
    pub resolution: u64,

    /// Processing time in milliseconds
    pub processing_time_ms: f32,

    /// Algorithm version
    pub algorithm_version: String,
}

impl Default for AnalysisMetadata {
    fn default() -> Self {
        Self {
            composer: None,
            title: None,
            parent_title: None,
            country: None,
            display_name: None,
            onset_count: 0,
            timeline_len: 0,
            resolution: 1,
            processing_time_ms: 0.0,
            algorithm_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
