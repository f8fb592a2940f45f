//! CLI definition and handler

use crate::config::load_render_config;
use crate::error::ApaError;
use crate::matrix::{load_matrix, output_path_for};
use crate::models::ApaReport;
use crate::render::{render_png, RenderContext};
use crate::reporters::{self, OutputFormat};
use crate::scoring::compute_breakdown;
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::info;

/// apa-plot - Aggregate Peak Analysis heatmaps for Hi-C loops
///
/// Scores an APA matrix (center pixel over lower-left corner mean) and
/// saves it as an annotated heatmap next to the input.
#[derive(Parser, Debug)]
#[command(name = "apa-plot")]
#[command(
    version,
    about = "Score an APA matrix (P2LL) and render it as an annotated heatmap",
    after_help = "\
Examples:
  apa-plot loops.npy                         Writes loops.png, prints the APA score
  apa-plot APA.txt --explain-score           Juicer text matrix, full corner breakdown
  apa-plot loops.npy -o figures/apa.png      Explicit output path
  apa-plot loops.npy --format json           JSON summary for scripting"
)]
pub struct Cli {
    /// APA matrix file (.npy, .txt, .tsv or .csv)
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output PNG path (default: input with its extension replaced by .png)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Rendering config TOML (default: ~/.config/apa-plot/config.toml if present)
    #[arg(long, short = 'c', env = "APA_PLOT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Summary format printed to stdout: text, json
    #[arg(long, short = 'f', default_value = "text", value_parser = ["text", "json"])]
    pub format: String,

    /// Show corner means, peak-to-corner ratios and the lower-left z-score
    #[arg(long)]
    pub explain_score: bool,

    /// Log level (error, warn, info, debug, trace); RUST_LOG takes precedence
    #[arg(long, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,
}

impl Cli {
    /// Parse arguments, turning clap usage errors into [`ApaError::Usage`]
    ///
    /// `--help` and `--version` print and exit the process with status 0.
    pub fn parse_args<I, T>(args: I) -> Result<Self, ApaError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        match Self::try_parse_from(args) {
            Ok(cli) => Ok(cli),
            Err(e) if !e.use_stderr() => e.exit(),
            Err(e) => {
                let rendered = e.render().to_string();
                let message = rendered.trim_start_matches("error: ").trim_end();
                Err(ApaError::Usage(message.to_string()))
            }
        }
    }
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    let format = OutputFormat::from_str(&cli.format)?;
    let ctx = RenderContext::new(load_render_config(cli.config.as_deref())?);

    let matrix = load_matrix(&cli.input)?;
    let breakdown = compute_breakdown(&matrix)?;
    info!(
        "{}: APA score {:.4}, color limit {}",
        cli.input.display(),
        breakdown.apa.score,
        breakdown.apa.color_limit
    );

    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| output_path_for(&cli.input));
    render_png(&matrix, &breakdown.apa, &ctx, &output)?;

    let report = ApaReport {
        input: cli.input,
        output,
        matrix_size: matrix.size(),
        breakdown,
    };
    print!("{}", reporters::report(&report, format, cli.explain_score)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_single_positional() {
        let cli = Cli::parse_args(["apa-plot", "loops.npy"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("loops.npy"));
        assert_eq!(cli.output, None);
        assert_eq!(cli.format, "text");
        assert_eq!(cli.log_level, "warn");
        assert!(!cli.explain_score);
    }

    #[test]
    fn test_missing_input_is_usage_error() {
        let err = Cli::parse_args(["apa-plot"]).unwrap_err();
        match err {
            ApaError::Usage(msg) => assert!(msg.contains("Usage"), "{msg}"),
            other => panic!("expected usage error, got {other:?}"),
        }
    }

    #[test]
    fn test_extra_positional_is_usage_error() {
        let err = Cli::parse_args(["apa-plot", "a.npy", "b.npy"]).unwrap_err();
        assert!(matches!(err, ApaError::Usage(_)));
    }

    #[test]
    fn test_flags() {
        let cli = Cli::parse_args([
            "apa-plot",
            "APA.txt",
            "-o",
            "out/apa.png",
            "--format",
            "json",
            "--explain-score",
        ])
        .unwrap();
        assert_eq!(cli.output, Some(PathBuf::from("out/apa.png")));
        assert_eq!(cli.format, "json");
        assert!(cli.explain_score);
    }

    #[test]
    fn test_unknown_format_rejected() {
        assert!(matches!(
            Cli::parse_args(["apa-plot", "a.npy", "--format", "sarif"]),
            Err(ApaError::Usage(_))
        ));
    }
}
