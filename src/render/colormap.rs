//! Two-color linear colormap

use plotters::style::RGBColor;

/// Linear gradient between a low and a high color
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorMap {
    low: RGBColor,
    high: RGBColor,
}

impl ColorMap {
    pub fn new(low: RGBColor, high: RGBColor) -> Self {
        Self { low, high }
    }

    pub fn from_rgb(low: [u8; 3], high: [u8; 3]) -> Self {
        Self::new(
            RGBColor(low[0], low[1], low[2]),
            RGBColor(high[0], high[1], high[2]),
        )
    }

    /// Color for `value` on the scale `vmin..=vmax`
    ///
    /// Values outside the scale clamp to the nearest end. An empty or
    /// inverted scale maps everything to the low color.
    pub fn color_at(&self, value: f64, vmin: f64, vmax: f64) -> RGBColor {
        let span = vmax - vmin;
        let t = if span > 0.0 {
            ((value - vmin) / span).clamp(0.0, 1.0)
        } else {
            0.0
        };
        RGBColor(
            lerp(self.low.0, self.high.0, t),
            lerp(self.low.1, self.high.1, t),
            lerp(self.low.2, self.high.2, t),
        )
    }
}

impl Default for ColorMap {
    /// White to saturated red
    fn default() -> Self {
        Self::from_rgb([255, 255, 255], [255, 0, 0])
    }
}

fn lerp(a: u8, b: u8, t: f64) -> u8 {
    let v = f64::from(a) + (f64::from(b) - f64::from(a)) * t;
    v.round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE_RGB: RGBColor = RGBColor(255, 255, 255);
    const RED_RGB: RGBColor = RGBColor(255, 0, 0);

    #[test]
    fn test_endpoints() {
        let cmap = ColorMap::default();
        assert_eq!(cmap.color_at(0.0, 0.0, 10.0), WHITE_RGB);
        assert_eq!(cmap.color_at(10.0, 0.0, 10.0), RED_RGB);
    }

    #[test]
    fn test_clamping() {
        let cmap = ColorMap::default();
        assert_eq!(cmap.color_at(-3.0, 0.0, 10.0), WHITE_RGB);
        assert_eq!(cmap.color_at(42.0, 0.0, 10.0), RED_RGB);
    }

    #[test]
    fn test_midpoint_interpolates() {
        let cmap = ColorMap::default();
        assert_eq!(cmap.color_at(5.0, 0.0, 10.0), RGBColor(255, 128, 128));
        assert_eq!(cmap.color_at(2.5, 0.0, 10.0), RGBColor(255, 191, 191));
    }

    #[test]
    fn test_empty_scale_is_low_color() {
        let cmap = ColorMap::default();
        assert_eq!(cmap.color_at(0.0, 0.0, 0.0), WHITE_RGB);
        assert_eq!(cmap.color_at(5.0, 0.0, -1.0), WHITE_RGB);
    }

    #[test]
    fn test_custom_colors() {
        let cmap = ColorMap::from_rgb([0, 0, 0], [0, 0, 200]);
        assert_eq!(cmap.color_at(1.0, 0.0, 2.0), RGBColor(0, 0, 100));
    }
}
