//! Rendering configuration support
//!
//! Loads heatmap rendering settings from a TOML file. Every field is
//! optional and falls back to a default that reproduces a 5×5 inch figure
//! at 100 dpi with a white-to-red colormap.
//!
//! # Configuration Format
//!
//! ```toml
//! # ~/.config/apa-plot/config.toml
//! width = 500
//! height = 500
//! margin = 20
//! font_family = "sans-serif"
//! title_font_size = 18
//! low_color = [255, 255, 255]
//! high_color = [255, 0, 0]
//! ```

use crate::error::{ApaError, ApaResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Heatmap rendering settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RenderConfig {
    /// Image width in pixels (default: 500)
    #[serde(default = "default_size")]
    pub width: u32,

    /// Image height in pixels (default: 500)
    #[serde(default = "default_size")]
    pub height: u32,

    /// Blank border around the plot in pixels (default: 20)
    #[serde(default = "default_margin")]
    pub margin: u32,

    /// Font family for the title (default: sans-serif)
    #[serde(default = "default_font_family")]
    pub font_family: String,

    /// Title font size in pixels (default: 18)
    #[serde(default = "default_title_font_size")]
    pub title_font_size: u32,

    /// RGB color at value 0 (default: white)
    #[serde(default = "default_low_color")]
    pub low_color: [u8; 3],

    /// RGB color at the color limit (default: red)
    #[serde(default = "default_high_color")]
    pub high_color: [u8; 3],
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: default_size(),
            height: default_size(),
            margin: default_margin(),
            font_family: default_font_family(),
            title_font_size: default_title_font_size(),
            low_color: default_low_color(),
            high_color: default_high_color(),
        }
    }
}

/// Largest accepted image side in pixels
pub const MAX_SIDE: u32 = 16384;

fn default_size() -> u32 {
    500
}

fn default_margin() -> u32 {
    20
}

fn default_font_family() -> String {
    "sans-serif".to_string()
}

fn default_title_font_size() -> u32 {
    18
}

fn default_low_color() -> [u8; 3] {
    [255, 255, 255]
}

fn default_high_color() -> [u8; 3] {
    [255, 0, 0]
}

impl RenderConfig {
    /// Check that the figure leaves room for the plot after margins and title
    pub fn validate(&self) -> Result<(), String> {
        if self.width > MAX_SIDE || self.height > MAX_SIDE {
            return Err(format!(
                "figure {}x{} exceeds the maximum of {} px per side",
                self.width, self.height, MAX_SIDE
            ));
        }
        // u64 so that huge margins or font sizes cannot wrap
        let min_side =
            2 * u64::from(self.margin) + u64::from(self.title_font_size) + 16;
        if u64::from(self.width) < min_side || u64::from(self.height) < min_side {
            return Err(format!(
                "figure {}x{} is too small for margin {} and title size {} (minimum {} px per side)",
                self.width, self.height, self.margin, self.title_font_size, min_side
            ));
        }
        if self.title_font_size == 0 {
            return Err("title_font_size must be at least 1".to_string());
        }
        if self.font_family.trim().is_empty() {
            return Err("font_family must not be empty".to_string());
        }
        Ok(())
    }
}

/// Get the user config file path (~/.config/apa-plot/config.toml)
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("apa-plot").join("config.toml"))
}

/// Load rendering configuration
///
/// An explicit path must exist and parse. Without one, the user config is
/// used when present and valid; otherwise defaults apply.
pub fn load_render_config(explicit: Option<&Path>) -> ApaResult<RenderConfig> {
    if let Some(path) = explicit {
        let config = load_toml_config(path).map_err(|reason| ApaError::Config {
            path: path.to_path_buf(),
            reason,
        })?;
        debug!("Loaded render config from {}", path.display());
        return Ok(config);
    }

    if let Some(path) = user_config_path().filter(|p| p.exists()) {
        match load_toml_config(&path) {
            Ok(config) => {
                debug!("Loaded render config from {}", path.display());
                return Ok(config);
            }
            Err(e) => {
                warn!("Failed to load {}: {}", path.display(), e);
            }
        }
    }

    debug!("No render config found, using defaults");
    Ok(RenderConfig::default())
}

/// Load and validate configuration from a TOML file
fn load_toml_config(path: &Path) -> Result<RenderConfig, String> {
    let content = std::fs::read_to_string(path).map_err(|e| e.to_string())?;
    let config: RenderConfig = toml::from_str(&content).map_err(|e| e.to_string())?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = RenderConfig::default();
        assert_eq!(config.width, 500);
        assert_eq!(config.high_color, [255, 0, 0]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: RenderConfig = toml::from_str("high_color = [0, 0, 255]\nwidth = 800").unwrap();
        assert_eq!(config.width, 800);
        assert_eq!(config.height, 500);
        assert_eq!(config.high_color, [0, 0, 255]);
        assert_eq!(config.low_color, [255, 255, 255]);
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(toml::from_str::<RenderConfig>("colour = \"red\"").is_err());
    }

    #[test]
    fn test_too_small_figure_rejected() {
        let config = RenderConfig {
            width: 40,
            ..Default::default()
        };
        assert!(config.validate().unwrap_err().contains("too small"));
    }

    #[test]
    fn test_oversized_figure_rejected() {
        let config = RenderConfig {
            height: MAX_SIDE + 1,
            ..Default::default()
        };
        assert!(config.validate().unwrap_err().contains("maximum"));
    }

    #[test]
    fn test_huge_margin_rejected_without_overflow() {
        let config = RenderConfig {
            margin: u32::MAX,
            ..Default::default()
        };
        assert!(config.validate().unwrap_err().contains("too small"));

        let config = RenderConfig {
            margin: u32::MAX / 2 + 1,
            title_font_size: u32::MAX,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_largest_accepted_figure() {
        let config = RenderConfig {
            width: MAX_SIDE,
            height: MAX_SIDE,
            margin: 4000,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_explicit_config_with_overflowing_margin_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("render.toml");
        std::fs::write(&path, "margin = 4294967295\n").unwrap();

        let err = load_render_config(Some(path.as_path())).unwrap_err();
        assert!(matches!(err, ApaError::Config { .. }), "got {err:?}");
    }

    #[test]
    fn test_explicit_config_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("render.toml");
        std::fs::write(&path, "font_family = \"serif\"\ntitle_font_size = 24\n").unwrap();

        let config = load_render_config(Some(path.as_path())).unwrap();
        assert_eq!(config.font_family, "serif");
        assert_eq!(config.title_font_size, 24);
    }

    #[test]
    fn test_explicit_config_missing_is_error() {
        let err = load_render_config(Some(Path::new("/nonexistent/render.toml"))).unwrap_err();
        assert!(matches!(err, ApaError::Config { .. }));
    }

    #[test]
    fn test_explicit_config_malformed_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("render.toml");
        std::fs::write(&path, "width = \"wide\"\n").unwrap();

        let err = load_render_config(Some(path.as_path())).unwrap_err();
        assert!(err.to_string().contains("render.toml"));
    }
}
