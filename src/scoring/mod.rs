//! APA (Aggregate Peak Analysis) scoring
//!
//! Scores how strongly the aggregated loop pixel stands out from the
//! background of an APA matrix.
//!
//! # Scoring Formula
//!
//! ```text
//! buffer       = N / 4                        (integer division)
//! center       = M[N/2, N/2]
//! lower_left   = mean(M[N-buffer..N, 0..buffer])
//! APA score    = center / lower_left          (P2LL)
//! color_limit  = max(M)
//! ```
//!
//! The lower-left corner sits furthest from the diagonal and is the usual
//! background estimate for loops. N < 4 leaves an empty corner block and is
//! rejected, as is a lower-left mean of zero.
//!
//! # Breakdown
//!
//! [`compute_breakdown`] also reports the means of the other three corner
//! blocks, their peak-to-corner ratios (P2UL, P2UR, P2LR) and the
//! lower-left z-score. These are informational; the headline score is
//! always P2LL.
//!
//! # Example
//!
//! An 8×8 matrix with `M[4,4] = 10` and a lower-left 2×2 block of 4s:
//! buffer = 2, lower_left = 4, APA score = 10 / 4 = 2.5.

mod apa_scorer;

pub use apa_scorer::{
    compute_breakdown, compute_score, corner_buffer, ApaScore, CornerMeans, PeakRatios,
    ScoreBreakdown,
};
