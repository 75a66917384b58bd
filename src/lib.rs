//! # Textura
//!
//! A windowed homorhythmicity analysis engine for polyphonic scores:
//! measures how closely the voices of a work attack together over time and
//! locates the most salient peaks and troughs of that texture.
//!
//! ## Features
//!
//! - **Offset extraction**: onsets of all sounding notes, ties resolved
//! - **Quantization**: exact rational onsets onto a common integer grid
//! - **Homorhythmicity weighting**: onset counts mapped to [0, 1] scores
//! - **Windowed averaging**: moving-average texture profile
//! - **Extrema ranking**: recurrence-counted structural peaks and troughs
//! - **Corpus batching**: parallel analysis of many works
//!
//! ## Quick Start
//!
//! ```
//! use textura::{analyze_score, AnalysisConfig, CountryLookup, NoteEvent, Part, Score};
//! use num_rational::Ratio;
//!
//! // Two voices: the tenor moves in whole beats, the superius twice as fast
//! let tenor = Part::new(
//!     "Tenor",
//!     (0..12)
//!         .map(|i| NoteEvent::note(Ratio::from_integer(2 * i), Ratio::from_integer(2), 55))
//!         .collect(),
//! );
//! let superius = Part::new(
//!     "Superius",
//!     (0..24)
//!         .map(|i| NoteEvent::note(Ratio::from_integer(i), Ratio::from_integer(1), 67))
//!         .collect(),
//! );
//! let score = Score::new(vec![superius, tenor]);
//!
//! let result = analyze_score(&score, &AnalysisConfig::default(), &CountryLookup::default())?;
//! assert_eq!(result.weights.len(), result.counts.len());
//! println!("overall homorhythmicity: {:.2}", result.overall_weight);
//! # Ok::<(), textura::AnalysisError>(())
//! ```
//!
//! ## Architecture
//!
//! The pipeline is strictly linear:
//!
//! ```text
//! Score → Offset Extractor → Quantizer/Counter → Weighter → Windowed Averager → Extrema Ranker
//! ```
//!
//! Score parsing and result serialization are the caller's responsibility;
//! the crate operates on an already-parsed [`Score`] and returns plain
//! numeric sequences and ranked-pair lists.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod config;
pub mod corpus;
pub mod error;
pub mod features;
pub mod score;

// Re-export main types
pub use analysis::metadata::CountryLookup;
pub use analysis::result::{AnalysisMetadata, AnalysisResult};
pub use config::AnalysisConfig;
pub use corpus::analyze_corpus;
pub use error::AnalysisError;
pub use features::extrema::{ExtremumKind, RankedExtremum};
pub use features::weighting::WeightingStrategy;
pub use score::{NoteEvent, OnsetTime, Part, Score, Tie, WorkMetadata};

/// Main analysis function
///
/// Runs the whole texture pipeline over a parsed score and returns the
/// quantized counts, weighted timeline, windowed averages, ranked peaks
/// and troughs, and resolved metadata.
///
/// # Arguments
///
/// * `score` - A fully parsed work (see [`Score`]); no file I/O happens here
/// * `config` - Pipeline parameters (see [`AnalysisConfig`])
/// * `countries` - Injected composer → country mapping; pass
///   [`CountryLookup::default()`] to skip country resolution
///
/// # Errors
///
/// Returns [`AnalysisError`] when the score has no extractable onsets, all
/// onsets are finer than the configured minimum rhythmic value, or a
/// parameter is invalid. A work whose onsets collapse to a single timepoint
/// is NOT an error: it yields a valid result with empty sequences.
pub fn analyze_score(
    score: &Score,
    config: &AnalysisConfig,
    countries: &CountryLookup,
) -> Result<AnalysisResult, AnalysisError> {
    use std::time::Instant;
    let start_time = Instant::now();

    log::debug!(
        "Starting texture analysis: {} parts, {} events",
        score.parts.len(),
        score.event_count()
    );

    let onsets = features::onset::extract_onsets(score)?;
    let timeline = features::quantize::count_timepoint_onsets(&onsets, config.min_rhy_denom)?;

    let composer = score.metadata.composer.clone();
    let country = composer
        .as_deref()
        .and_then(|name| countries.country_for(name))
        .map(str::to_string);

    let mut metadata = AnalysisMetadata {
        composer,
        title: score.metadata.title.clone(),
        parent_title: score.metadata.parent_title.clone(),
        country,
        display_name: score.metadata.display_name(),
        onset_count: onsets.len(),
        timeline_len: timeline.counts.len(),
        resolution: timeline.resolution,
        processing_time_ms: 0.0,
        algorithm_version: env!("CARGO_PKG_VERSION").to_string(),
    };

    if timeline.is_empty() {
        log::debug!("Work collapses to a single timepoint, returning empty analysis");
        metadata.processing_time_ms = start_time.elapsed().as_secs_f32() * 1000.0;
        return Ok(AnalysisResult {
            counts: Vec::new(),
            weights: Vec::new(),
            windowed_averages: Vec::new(),
            overall_weight: 0.0,
            peaks: Vec::new(),
            troughs: Vec::new(),
            metadata,
        });
    }

    let weights = timeline.weighted(config.weighting)?;
    let overall_weight = features::windowing::overall_average(&weights)?;
    let windowed_averages = features::windowing::windowed_average(&weights, config.average_window)?;

    let peaks = features::extrema::rank_local_extrema(
        &windowed_averages,
        ExtremumKind::Max,
        config.top_n,
        config.peak_threshold,
        config.rank_window,
    )?;
    let troughs = features::extrema::rank_local_extrema(
        &windowed_averages,
        ExtremumKind::Min,
        config.top_n,
        config.trough_threshold,
        config.rank_window,
    )?;

    metadata.processing_time_ms = start_time.elapsed().as_secs_f32() * 1000.0;

    log::debug!(
        "Analysis done: {} timepoints, overall weight {:.2}, {} peaks, {} troughs in {:.2}ms",
        metadata.timeline_len,
        overall_weight,
        peaks.len(),
        troughs.len(),
        metadata.processing_time_ms
    );

    Ok(AnalysisResult {
        counts: timeline.counts,
        weights,
        windowed_averages,
        overall_weight,
        peaks,
        troughs,
        metadata,
    })
}
