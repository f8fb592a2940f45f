//! Heatmap rendering for APA matrices
//!
//! Draws the matrix the way `matshow` does (row 0 at the top, one square
//! per cell) through a two-color gradient from 0 to the color limit, with
//! no tick labels and the APA score as the title. plotters draws into an
//! in-memory RGB buffer and `image` encodes it as PNG.

mod colormap;

pub use colormap::ColorMap;

use crate::config::RenderConfig;
use crate::error::{ApaError, ApaResult};
use crate::matrix::Matrix;
use crate::scoring::ApaScore;
use image::{ImageFormat, RgbImage};
use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use std::path::Path;
use tracing::{debug, info};

/// Rendering state built once at startup and passed to every draw call
#[derive(Debug, Clone)]
pub struct RenderContext {
    pub config: RenderConfig,
    pub colormap: ColorMap,
}

impl RenderContext {
    pub fn new(config: RenderConfig) -> Self {
        let colormap = ColorMap::from_rgb(config.low_color, config.high_color);
        Self { config, colormap }
    }
}

impl Default for RenderContext {
    fn default() -> Self {
        Self::new(RenderConfig::default())
    }
}

/// Title text for a heatmap
pub fn title_for(score: f64) -> String {
    format!("APA score = {:.2}", score)
}

/// Draw the matrix cells and a frame onto a drawing area
///
/// Uses the whole area; callers size it square. Draws no text.
pub fn draw_heatmap<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    matrix: &Matrix,
    color_limit: f64,
    ctx: &RenderContext,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    let n = matrix.size();
    let side = n as f64;

    let mut chart = ChartBuilder::on(area)
        .margin(0)
        .build_cartesian_2d(0f64..side, 0f64..side)?;

    // y grows upward in chart space, so row r spans [n - r - 1, n - r]
    chart.draw_series(matrix.view().indexed_iter().map(|((row, col), &value)| {
        let x = col as f64;
        let top = (n - row) as f64;
        Rectangle::new(
            [(x, top), (x + 1.0, top - 1.0)],
            ctx.colormap.color_at(value, 0.0, color_limit).filled(),
        )
    }))?;

    let (w, h) = area.dim_in_pixel();
    area.draw(&Rectangle::new(
        [(0, 0), (w as i32 - 1, h as i32 - 1)],
        BLACK.stroke_width(1),
    ))?;

    Ok(())
}

/// Render the annotated heatmap and write it as PNG
///
/// The figure is drawn in memory first, so nothing is written unless
/// drawing succeeds. Overwrites any existing file at `out_path`.
pub fn render_png(
    matrix: &Matrix,
    apa: &ApaScore,
    ctx: &RenderContext,
    out_path: &Path,
) -> ApaResult<()> {
    let config = &ctx.config;
    config
        .validate()
        .map_err(|reason| ApaError::save(out_path, reason))?;
    let (width, height) = (config.width, config.height);
    let save_err = |e: DrawingAreaErrorKind<_>| ApaError::save(out_path, e);

    debug!(
        "Rendering {}x{} heatmap at {}x{} px (color limit {})",
        matrix.size(),
        matrix.size(),
        width,
        height,
        apa.color_limit
    );

    let mut pixels = vec![0u8; width as usize * height as usize * 3];
    {
        let root = BitMapBackend::with_buffer(&mut pixels, (width, height)).into_drawing_area();
        root.fill(&WHITE).map_err(save_err)?;

        // validate() bounds the margin well below MAX_SIDE
        let m = config.margin as i32;
        let framed = root.margin(m, m, m, m);
        let body = framed
            .titled(
                &title_for(apa.score),
                (config.font_family.as_str(), f64::from(config.title_font_size)),
            )
            .map_err(save_err)?;

        // Center a square plot inside whatever the title left over
        let (bw, bh) = body.dim_in_pixel();
        let (bw, bh) = (bw as i32, bh as i32);
        let side = bw.min(bh);
        let left = (bw - side) / 2;
        let plot = body.margin(0, bh - side, left, bw - side - left);

        draw_heatmap(&plot, matrix, apa.color_limit, ctx).map_err(save_err)?;
        root.present().map_err(save_err)?;
    }

    let image = RgbImage::from_raw(width, height, pixels)
        .ok_or_else(|| ApaError::save(out_path, "pixel buffer does not match image size"))?;
    image
        .save_with_format(out_path, ImageFormat::Png)
        .map_err(|e| ApaError::save(out_path, e))?;

    info!("Saved heatmap to {}", out_path.display());
    Ok(())
}
