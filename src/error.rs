//! Error types shared by the loader, scorer and renderer

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while scoring or rendering an APA matrix
#[derive(Error, Debug)]
pub enum ApaError {
    #[error("{0}")]
    Usage(String),

    #[error("Failed to load matrix from {}: {reason}", .path.display())]
    Load { path: PathBuf, reason: String },

    #[error("Invalid matrix dimensions {rows}x{cols}: {reason}")]
    InvalidDimension {
        rows: usize,
        cols: usize,
        reason: String,
    },

    #[error("Non-finite value {value} at ({row}, {col})")]
    InvalidValue { row: usize, col: usize, value: f64 },

    #[error("Degenerate input: mean of the {block} block is {mean}, APA score is undefined")]
    DegenerateInput { block: &'static str, mean: f64 },

    #[error("Failed to save heatmap to {}: {reason}", .path.display())]
    Save { path: PathBuf, reason: String },

    #[error("Invalid configuration in {}: {reason}", .path.display())]
    Config { path: PathBuf, reason: String },
}

impl ApaError {
    pub(crate) fn load(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        ApaError::Load {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn save(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        ApaError::Save {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

pub type ApaResult<T> = Result<T, ApaError>;
