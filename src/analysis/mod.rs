//! Analysis result types and metadata resolution

pub mod metadata;
pub mod result;
