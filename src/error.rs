//! Error types for the texture analysis engine

use std::fmt;

/// Errors that can occur during texture analysis
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// Invalid input (no extractable onsets, bad parameters, etc.)
    InvalidInput(String),

    /// Degenerate data that would poison the arithmetic (e.g. an all-zero
    /// count sequence, which has no maximum to normalize against)
    DegenerateData(String),
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            AnalysisError::DegenerateData(msg) => write!(f, "Degenerate data: {}", msg),
        }
    }
}

impl std::error::Error for AnalysisError {}
