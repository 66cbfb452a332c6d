use getset::CopyGetters;
use serde::{Deserialize, Serialize};

use crate::types::ConfigError;

/// The inputs of a single simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, CopyGetters, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// How many observations to draw, `N`.
    #[getset(get_copy = "pub")]
    sample_size: usize,

    /// How many categories the generated distribution has, `K`.
    #[getset(get_copy = "pub")]
    categories: usize,
}

impl SimulationConfig {
    /// Create a new SimulationConfig.
    ///
    /// # Arguments:
    /// `sample_size`: The number of draws `N`, may be zero.
    /// `categories`: The number of categories `K`, must be > 0.
    ///
    /// # Returns:
    /// Either a valid `SimulationConfig` or a `ConfigError`
    pub fn new(sample_size: usize, categories: usize) -> Result<Self, ConfigError> {
        if categories == 0 {
            return Err(ConfigError::InvalidCategoryCount);
        }
        Ok(Self {
            sample_size,
            categories,
        })
    }
}

/// Canvas geometry and typography for laying out a bar chart.
#[derive(Debug, Clone, Copy, PartialEq, CopyGetters, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Width of the drawing surface in canvas units.
    #[getset(get_copy = "pub")]
    canvas_width: f64,

    /// Height of the drawing surface in canvas units.
    #[getset(get_copy = "pub")]
    canvas_height: f64,

    /// Space between the plot area and each canvas edge.
    #[getset(get_copy = "pub")]
    margin: f64,

    /// Horizontal space between neighbouring bars.
    #[getset(get_copy = "pub")]
    bar_gap: f64,

    /// Font size of the axis tick labels.
    #[getset(get_copy = "pub")]
    tick_font_size: f64,

    /// Font size of the title block.
    #[getset(get_copy = "pub")]
    title_font_size: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            canvas_width: 400.0,
            canvas_height: 300.0,
            margin: 40.0,
            bar_gap: 4.0,
            tick_font_size: 8.0,
            title_font_size: 10.0,
        }
    }
}

impl ChartConfig {
    /// Create a new ChartConfig with the default gap and font sizes.
    ///
    /// # Arguments:
    /// `canvas_width`, `canvas_height`: Size of the drawing surface.
    /// `margin`: The space left around the plot area on every side.
    ///
    /// # Returns:
    /// Either a valid `ChartConfig` or a `ConfigError`
    pub fn new(canvas_width: f64, canvas_height: f64, margin: f64) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Self::with_style(
            canvas_width,
            canvas_height,
            margin,
            defaults.bar_gap,
            defaults.tick_font_size,
            defaults.title_font_size,
        )
    }

    /// Create a new ChartConfig, specifying every parameter.
    pub fn with_style(
        canvas_width: f64,
        canvas_height: f64,
        margin: f64,
        bar_gap: f64,
        tick_font_size: f64,
        title_font_size: f64,
    ) -> Result<Self, ConfigError> {
        if !margin.is_finite() || margin < 0.0 {
            return Err(ConfigError::InvalidMargin);
        }
        if !canvas_width.is_finite()
            || !canvas_height.is_finite()
            || canvas_width - 2.0 * margin <= 0.0
            || canvas_height - 2.0 * margin <= 0.0
        {
            return Err(ConfigError::InvalidCanvas);
        }
        if !bar_gap.is_finite() || bar_gap < 0.0 {
            return Err(ConfigError::InvalidBarGap);
        }
        if !(tick_font_size.is_finite() && tick_font_size > 0.0)
            || !(title_font_size.is_finite() && title_font_size > 0.0)
        {
            return Err(ConfigError::InvalidFontSize);
        }

        Ok(Self {
            canvas_width,
            canvas_height,
            margin,
            bar_gap,
            tick_font_size,
            title_font_size,
        })
    }

    /// Width of the plot area, `canvas_width - 2 * margin`.
    #[inline(always)]
    pub fn graph_width(&self) -> f64 {
        self.canvas_width - 2.0 * self.margin
    }

    /// Height of the plot area, `canvas_height - 2 * margin`.
    #[inline(always)]
    pub fn graph_height(&self) -> f64 {
        self.canvas_height - 2.0 * self.margin
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test]
    fn simulation_config() {
        let config = SimulationConfig::new(100, 5).unwrap();
        assert_eq!(config.sample_size(), 100);
        assert_eq!(config.categories(), 5);
        assert!(SimulationConfig::new(0, 1).is_ok());
        assert_eq!(
            SimulationConfig::new(100, 0),
            Err(ConfigError::InvalidCategoryCount)
        );
    }

    #[test]
    fn chart_config_default() {
        let config = ChartConfig::default();
        assert_eq!(config.graph_width(), 320.0);
        assert_eq!(config.graph_height(), 220.0);
        assert_eq!(ChartConfig::new(400.0, 300.0, 40.0), Ok(config));
    }

    #[test_case(80.0, 300.0, 40.0, ConfigError::InvalidCanvas)]
    #[test_case(400.0, 60.0, 40.0, ConfigError::InvalidCanvas)]
    #[test_case(f64::NAN, 300.0, 40.0, ConfigError::InvalidCanvas)]
    #[test_case(400.0, 300.0, -1.0, ConfigError::InvalidMargin)]
    #[test_case(400.0, 300.0, f64::INFINITY, ConfigError::InvalidMargin)]
    fn chart_config_invalid(width: f64, height: f64, margin: f64, expected: ConfigError) {
        assert_eq!(ChartConfig::new(width, height, margin), Err(expected));
    }

    #[test]
    fn chart_config_invalid_style() {
        assert_eq!(
            ChartConfig::with_style(400.0, 300.0, 40.0, -4.0, 8.0, 10.0),
            Err(ConfigError::InvalidBarGap)
        );
        assert_eq!(
            ChartConfig::with_style(400.0, 300.0, 40.0, 4.0, 0.0, 10.0),
            Err(ConfigError::InvalidFontSize)
        );
        assert!(ChartConfig::with_style(400.0, 300.0, 0.0, 0.0, 8.0, 10.0).is_ok());
    }
}
