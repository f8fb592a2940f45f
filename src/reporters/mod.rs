//! Output reporters for apa-plot results
//!
//! Supports multiple output formats:
//! - `text` - Terminal summary, optionally with the full corner breakdown
//! - `json` - Machine-readable JSON

mod json;
mod text;

use crate::models::ApaReport;
use anyhow::{anyhow, Result};
use std::str::FromStr;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" | "terminal" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(anyhow!("Unknown format '{}'. Valid formats: text, json", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Render a report in the specified format
pub fn report(report: &ApaReport, format: OutputFormat, explain: bool) -> Result<String> {
    match format {
        OutputFormat::Text => text::render(report, explain),
        OutputFormat::Json => json::render(report),
    }
}
