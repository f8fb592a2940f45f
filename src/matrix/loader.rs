//! Matrix file loading
//!
//! Supports `.npy` (NumPy array files) and delimited text (`.txt`, `.tsv`,
//! `.csv`). Text rows may carry `[`/`]` brackets and trailing commas, so
//! Juicer-style `APA.txt` dumps load unchanged.

use super::Matrix;
use crate::error::{ApaError, ApaResult};
use ndarray::{ArrayD, Ix2};
use ndarray_npy::{ReadNpyError, ReadNpyExt};
use std::path::{Path, PathBuf};
use tracing::debug;

/// File extensions recognized as APA matrix data (lowercase)
pub const DATA_EXTENSIONS: &[&str] = &["npy", "txt", "tsv", "csv"];

const NPY_MAGIC: &[u8] = b"\x93NUMPY";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MatrixFormat {
    Npy,
    Text,
}

impl MatrixFormat {
    fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "npy" => Some(MatrixFormat::Npy),
            "txt" | "tsv" | "csv" => Some(MatrixFormat::Text),
            _ => None,
        }
    }

    fn sniff(bytes: &[u8]) -> Self {
        if bytes.starts_with(NPY_MAGIC) {
            MatrixFormat::Npy
        } else {
            MatrixFormat::Text
        }
    }
}

/// Check whether an extension (without the dot) names a matrix data file
pub fn is_data_extension(ext: &str) -> bool {
    let ext = ext.to_lowercase();
    DATA_EXTENSIONS.contains(&ext.as_str())
}

/// Derive the PNG output path for an input matrix file
///
/// `loops.npy` becomes `loops.png`. Inputs without a recognized data
/// extension get `.png` appended so the input is never overwritten.
pub fn output_path_for(input: &Path) -> PathBuf {
    match input.extension().and_then(|e| e.to_str()) {
        Some(ext) if is_data_extension(ext) => input.with_extension("png"),
        _ => {
            let mut name = input.as_os_str().to_owned();
            name.push(".png");
            PathBuf::from(name)
        }
    }
}

/// Load an APA matrix from disk
pub fn load_matrix(path: &Path) -> ApaResult<Matrix> {
    let bytes = std::fs::read(path).map_err(|e| ApaError::load(path, e))?;

    let format = MatrixFormat::from_path(path).unwrap_or_else(|| MatrixFormat::sniff(&bytes));
    debug!("Loading {} as {:?} ({} bytes)", path.display(), format, bytes.len());

    let matrix = match format {
        MatrixFormat::Npy => parse_npy(path, &bytes),
        MatrixFormat::Text => parse_text(path, &bytes),
    }
    // Shape and value problems in the file are load failures; the N >= 4
    // requirement is checked when scoring.
    .map_err(|e| match e {
        ApaError::InvalidValue { .. } | ApaError::InvalidDimension { .. } => {
            ApaError::load(path, e)
        }
        other => other,
    })?;

    debug!("Loaded {}x{} matrix", matrix.size(), matrix.size());
    Ok(matrix)
}

/// Decode an npy payload, widening any supported dtype to f64
fn decode_npy(bytes: &[u8]) -> Result<ArrayD<f64>, ReadNpyError> {
    macro_rules! try_dtype {
        ($t:ty) => {
            match ArrayD::<$t>::read_npy(bytes) {
                Ok(arr) => return Ok(arr.mapv(|v| v as f64)),
                Err(ReadNpyError::WrongDescriptor(_)) => {}
                Err(e) => return Err(e),
            }
        };
    }

    let first = match ArrayD::<f64>::read_npy(bytes) {
        Ok(arr) => return Ok(arr),
        Err(e @ ReadNpyError::WrongDescriptor(_)) => e,
        Err(e) => return Err(e),
    };
    try_dtype!(f32);
    try_dtype!(i64);
    try_dtype!(i32);
    try_dtype!(u16);
    try_dtype!(u8);
    Err(first)
}

fn parse_npy(path: &Path, bytes: &[u8]) -> ApaResult<Matrix> {
    let arr = decode_npy(bytes).map_err(|e| ApaError::load(path, e))?;
    if arr.ndim() != 2 {
        return Err(ApaError::load(
            path,
            format!("expected a 2D array, found {} dimensions", arr.ndim()),
        ));
    }
    let arr = arr
        .into_dimensionality::<Ix2>()
        .map_err(|e| ApaError::load(path, e))?;
    Matrix::new(arr)
}

fn parse_text(path: &Path, bytes: &[u8]) -> ApaResult<Matrix> {
    let content = std::str::from_utf8(bytes)
        .map_err(|e| ApaError::load(path, format!("not valid UTF-8 text: {}", e)))?;

    let mut rows: Vec<Vec<f64>> = Vec::new();
    for (line_no, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let cells: Vec<&str> = line
            .split(|c: char| c == ',' || c == '[' || c == ']' || c.is_whitespace())
            .filter(|cell| !cell.is_empty())
            .collect();
        if cells.is_empty() {
            continue;
        }

        let row = cells
            .iter()
            .map(|cell| {
                cell.parse::<f64>().map_err(|_| {
                    ApaError::load(
                        path,
                        format!("line {}: '{}' is not a number", line_no + 1, cell),
                    )
                })
            })
            .collect::<ApaResult<Vec<f64>>>()?;
        rows.push(row);
    }

    if rows.is_empty() {
        return Err(ApaError::load(path, "file contains no matrix rows"));
    }
    Matrix::from_rows(rows)
}
