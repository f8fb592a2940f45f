//! Peak-to-corner scoring of APA matrices

use crate::error::{ApaError, ApaResult};
use crate::matrix::Matrix;
use ndarray::{s, ArrayView2};
use serde::Serialize;
use tracing::debug;

/// Headline APA result: P2LL score and the heatmap color limit
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ApaScore {
    /// Center pixel divided by the lower-left corner mean
    pub score: f64,
    /// Maximum matrix value, used as the top of the color scale
    pub color_limit: f64,
}

/// Mean of each `buffer × buffer` corner block
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CornerMeans {
    pub upper_left: f64,
    pub upper_right: f64,
    pub lower_left: f64,
    pub lower_right: f64,
}

/// Center pixel divided by each corner mean (None when that mean is zero)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PeakRatios {
    pub p2ul: Option<f64>,
    pub p2ur: Option<f64>,
    pub p2ll: f64,
    pub p2lr: Option<f64>,
}

/// Complete score breakdown for transparency
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    #[serde(flatten)]
    pub apa: ApaScore,
    /// Side length of the corner blocks (N / 4)
    pub buffer: usize,
    /// Value at the center pixel
    pub center: f64,
    pub corners: CornerMeans,
    pub ratios: PeakRatios,
    /// (center - mean(LL)) / sd(LL); None when the lower-left block is flat
    pub zscore_lower_left: Option<f64>,
}

/// Corner block side length for an N×N matrix
pub fn corner_buffer(n: usize) -> usize {
    n / 4
}

/// Compute the APA score (P2LL) and color limit of a matrix
pub fn compute_score(matrix: &Matrix) -> ApaResult<ApaScore> {
    let view = matrix.view();
    let n = matrix.size();
    let buffer = checked_buffer(n)?;

    let color_limit = view.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let center = view[[n / 2, n / 2]];
    let lower_left_mean = block_mean(view.slice(s![n - buffer.., ..buffer]));

    if lower_left_mean == 0.0 {
        return Err(ApaError::DegenerateInput {
            block: "lower-left",
            mean: lower_left_mean,
        });
    }

    let score = center / lower_left_mean;
    debug!(
        "APA n={} buffer={} center={} lower_left_mean={} score={:.4} color_limit={}",
        n, buffer, center, lower_left_mean, score, color_limit
    );

    Ok(ApaScore { score, color_limit })
}

/// Compute the APA score plus all corner statistics
pub fn compute_breakdown(matrix: &Matrix) -> ApaResult<ScoreBreakdown> {
    let apa = compute_score(matrix)?;

    let view = matrix.view();
    let n = matrix.size();
    let buffer = corner_buffer(n);
    let far = n - buffer;
    let center = view[[n / 2, n / 2]];

    let lower_left = view.slice(s![far.., ..buffer]);
    let corners = CornerMeans {
        upper_left: block_mean(view.slice(s![..buffer, ..buffer])),
        upper_right: block_mean(view.slice(s![..buffer, far..])),
        lower_left: block_mean(lower_left),
        lower_right: block_mean(view.slice(s![far.., far..])),
    };

    let ratio = |mean: f64| (mean != 0.0).then(|| center / mean);
    let ratios = PeakRatios {
        p2ul: ratio(corners.upper_left),
        p2ur: ratio(corners.upper_right),
        p2ll: apa.score,
        p2lr: ratio(corners.lower_right),
    };

    let sd = lower_left.std(0.0);
    let zscore_lower_left = (sd > 0.0).then(|| (center - corners.lower_left) / sd);

    Ok(ScoreBreakdown {
        apa,
        buffer,
        center,
        corners,
        ratios,
        zscore_lower_left,
    })
}

fn checked_buffer(n: usize) -> ApaResult<usize> {
    let buffer = corner_buffer(n);
    if buffer == 0 {
        return Err(ApaError::InvalidDimension {
            rows: n,
            cols: n,
            reason: "need at least 4 rows for a non-empty corner block".to_string(),
        });
    }
    Ok(buffer)
}

// Callers guarantee a non-empty block (buffer >= 1)
fn block_mean(block: ArrayView2<'_, f64>) -> f64 {
    block.sum() / block.len() as f64
}
