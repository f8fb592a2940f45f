//! Text (terminal) reporter

use crate::models::ApaReport;
use anyhow::Result;
use console::style;
use std::fmt::Write as _;

fn ratio_cell(ratio: Option<f64>) -> String {
    match ratio {
        Some(r) => format!("{:>8.3}", r),
        None => format!("{:>8}", "n/a"),
    }
}

/// Render report as terminal output
pub fn render(report: &ApaReport, explain: bool) -> Result<String> {
    let mut out = String::new();
    let b = &report.breakdown;

    writeln!(
        out,
        "APA score: {}  (color limit {})",
        style(format!("{:.2}", report.score())).bold(),
        report.color_limit()
    )?;
    writeln!(out, "Heatmap:   {}", report.output.display())?;

    if !explain {
        return Ok(out);
    }

    writeln!(out)?;
    writeln!(
        out,
        "Matrix {}x{}  corner block {}x{}  center {}",
        report.matrix_size, report.matrix_size, b.buffer, b.buffer, b.center
    )?;
    writeln!(out, "  {:<12} {:>10} {:>8}", "Corner", "Mean", "Ratio")?;
    writeln!(out, "  {}", "\u{2500}".repeat(32))?;
    let rows = [
        ("upper-left", b.corners.upper_left, b.ratios.p2ul),
        ("upper-right", b.corners.upper_right, b.ratios.p2ur),
        ("lower-left", b.corners.lower_left, Some(b.ratios.p2ll)),
        ("lower-right", b.corners.lower_right, b.ratios.p2lr),
    ];
    for (name, mean, ratio) in rows {
        writeln!(out, "  {:<12} {:>10.4} {}", name, mean, ratio_cell(ratio))?;
    }
    match b.zscore_lower_left {
        Some(z) => writeln!(out, "ZscoreLL: {:.3}", z)?,
        None => writeln!(out, "ZscoreLL: n/a (lower-left block is flat)")?,
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::tests::test_report;

    #[test]
    fn test_summary_line() {
        let out = render(&test_report(), false).unwrap();
        assert!(out.contains("2.50"));
        assert!(out.contains("color limit 10"));
        assert!(out.contains("apa.png"));
        assert!(!out.contains("ZscoreLL"));
    }

    #[test]
    fn test_explain_lists_corners() {
        let out = render(&test_report(), true).unwrap();
        assert!(out.contains("corner block 2x2"));
        assert!(out.contains("upper-right"));
        assert!(out.contains("2.500"));
        assert!(out.contains("n/a"));
        assert!(out.contains("ZscoreLL: n/a"));
    }
}
