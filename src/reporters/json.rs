//! JSON reporter
//!
//! Outputs the full ApaReport as pretty-printed JSON for scripting.

use crate::models::ApaReport;
use anyhow::Result;

/// Render report as JSON
pub fn render(report: &ApaReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
