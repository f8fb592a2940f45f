//! Configuration module for apa-plot
//!
//! This module handles:
//! - Rendering configuration (figure size, font, colormap endpoints)
//! - Config file discovery (`--config` or ~/.config/apa-plot/config.toml)

mod render_config;

pub use render_config::{load_render_config, user_config_path, RenderConfig};
