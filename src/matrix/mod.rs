//! APA matrix model and file loading
//!
//! A [`Matrix`] is the aggregated Hi-C signal around a set of loop anchors:
//! a square grid with the loop pixel at the center. Matrices are validated
//! once at construction (2D, non-empty, square, finite) and never mutated
//! afterwards.

mod loader;

pub use loader::{is_data_extension, load_matrix, output_path_for, DATA_EXTENSIONS};

use crate::error::{ApaError, ApaResult};
use ndarray::{Array2, ArrayView2};

/// Square, finite APA matrix
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    data: Array2<f64>,
}

impl Matrix {
    /// Wrap an array after checking it is square and finite
    pub fn new(data: Array2<f64>) -> ApaResult<Self> {
        let (rows, cols) = data.dim();
        if rows == 0 || cols == 0 {
            return Err(ApaError::InvalidDimension {
                rows,
                cols,
                reason: "matrix is empty".to_string(),
            });
        }
        if rows != cols {
            return Err(ApaError::InvalidDimension {
                rows,
                cols,
                reason: "matrix must be square".to_string(),
            });
        }
        if let Some(((row, col), &value)) = data.indexed_iter().find(|(_, v)| !v.is_finite()) {
            return Err(ApaError::InvalidValue { row, col, value });
        }
        Ok(Self { data })
    }

    /// Build a matrix from nested rows (row-major)
    pub fn from_rows(rows: Vec<Vec<f64>>) -> ApaResult<Self> {
        let n_rows = rows.len();
        let n_cols = rows.first().map(Vec::len).unwrap_or(0);
        if let Some(bad) = rows.iter().position(|r| r.len() != n_cols) {
            return Err(ApaError::InvalidDimension {
                rows: n_rows,
                cols: n_cols,
                reason: format!(
                    "row {} has {} values, expected {}",
                    bad,
                    rows[bad].len(),
                    n_cols
                ),
            });
        }
        let flat: Vec<f64> = rows.into_iter().flatten().collect();
        let data = Array2::from_shape_vec((n_rows, n_cols), flat).map_err(|e| {
            ApaError::InvalidDimension {
                rows: n_rows,
                cols: n_cols,
                reason: e.to_string(),
            }
        })?;
        Self::new(data)
    }

    /// Side length N of the N×N matrix
    pub fn size(&self) -> usize {
        self.data.nrows()
    }

    pub fn view(&self) -> ArrayView2<'_, f64> {
        self.data.view()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.data.get((row, col)).copied()
    }

    pub fn into_inner(self) -> Array2<f64> {
        self.data
    }
}
