//! Core data models for apa-plot
//!
//! The report produced by a single scoring run, shared by all reporters.

use crate::scoring::ScoreBreakdown;
use serde::Serialize;
use std::path::PathBuf;

/// Result of scoring and rendering one APA matrix
#[derive(Debug, Clone, Serialize)]
pub struct ApaReport {
    /// Matrix file that was scored
    pub input: PathBuf,
    /// Where the heatmap PNG was written
    pub output: PathBuf,
    /// Side length N of the N×N matrix
    pub matrix_size: usize,
    #[serde(flatten)]
    pub breakdown: ScoreBreakdown,
}

impl ApaReport {
    /// Headline APA score (P2LL)
    pub fn score(&self) -> f64 {
        self.breakdown.apa.score
    }

    pub fn color_limit(&self) -> f64 {
        self.breakdown.apa.color_limit
    }
}
