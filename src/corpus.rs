//! Corpus-level batch analysis
//!
//! Each work's pipeline run is independent, so a corpus is processed in
//! parallel at the granularity of one work per task. Result order matches
//! input order regardless of scheduling.

use rayon::prelude::*;

use crate::analysis::metadata::CountryLookup;
use crate::analysis::result::AnalysisResult;
use crate::config::AnalysisConfig;
use crate::error::AnalysisError;
use crate::score::Score;

/// Analyze every work of a corpus in parallel
///
/// One entry per input score, in input order. Failures are per-work: a
/// score without extractable onsets yields an `Err` in its slot without
/// affecting the rest of the corpus.
pub fn analyze_corpus(
    scores: &[Score],
    config: &AnalysisConfig,
    countries: &CountryLookup,
) -> Vec<Result<AnalysisResult, AnalysisError>> {
    log::debug!("Analyzing corpus of {} works", scores.len());

    scores
        .par_iter()
        .map(|score| crate::analyze_score(score, config, countries))
        .collect()
}
