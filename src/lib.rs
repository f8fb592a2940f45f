//! apa-plot - Aggregate Peak Analysis scoring and heatmaps
//!
//! Loads an APA matrix (aggregated Hi-C signal around loop anchors),
//! computes the peak-to-lower-left (P2LL) score, and renders the matrix
//! as a PNG heatmap titled with that score.
//!
//! ```rust,ignore
//! use apa_plot::{matrix::load_matrix, render, scoring::compute_score};
//!
//! let matrix = load_matrix(Path::new("loops.npy"))?;
//! let apa = compute_score(&matrix)?;
//! render::render_png(&matrix, &apa, &render::RenderContext::default(), Path::new("loops.png"))?;
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod matrix;
pub mod models;
pub mod render;
pub mod reporters;
pub mod scoring;

pub use error::{ApaError, ApaResult};
