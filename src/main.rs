//! apa-plot - Aggregate Peak Analysis heatmaps
//!
//! Scores an APA matrix of aggregated Hi-C loop signal and renders it
//! as a heatmap titled with the score.

use anyhow::Result;
use apa_plot::cli::Cli;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    let cli = Cli::parse_args(std::env::args_os())?;

    // Initialize logging (RUST_LOG wins over --log-level)
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    apa_plot::cli::run(cli)
}
