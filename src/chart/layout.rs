use getset::{CopyGetters, Getters};
use serde::{Deserialize, Serialize};
use tracing::trace;
use typed_builder::TypedBuilder;

use super::{Color, Font, FontWeight, PlotArea, Point, Rect};
use crate::{
    config::ChartConfig,
    types::{Error, MomentSummary, Result},
};

/// The y axis is labelled from 0% to 100% in this many steps.
const Y_TICK_STEPS: usize = 10;
/// Left edge of the y tick labels.
const Y_TICK_LABEL_X: f64 = 5.0;
/// Raises a y tick label so it sits centered on its grid line.
const Y_TICK_LABEL_SHIFT: f64 = 6.0;
/// Space between the x axis and the x tick labels.
const X_TICK_LABEL_OFFSET: f64 = 5.0;
/// Top edge of the title block.
const TITLE_TOP: f64 = 10.0;

/// One bar, in plot coordinates. It stands on the x axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    /// Distance of the left edge from the y axis.
    pub x: f64,
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent, `value * graph_height`.
    pub height: f64,
}

/// A piece of text anchored at its top-left corner in native coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    /// The text to draw.
    pub text: String,
    /// Top-left corner of the text.
    pub position: Point,
}

/// Everything a `DrawingSurface` needs to draw one bar chart.
#[derive(Debug, Clone, PartialEq, TypedBuilder, Getters, CopyGetters, Serialize, Deserialize)]
pub struct ChartDescription {
    /// Width of the canvas the chart was laid out for.
    #[getset(get_copy = "pub")]
    canvas_width: f64,

    /// Height of the canvas the chart was laid out for.
    #[getset(get_copy = "pub")]
    canvas_height: f64,

    /// The canvas is cleared to this color first.
    #[builder(default = Color::WHITE)]
    #[getset(get_copy = "pub")]
    background: Color,

    /// The title of the chart.
    #[getset(get = "pub")]
    title: String,

    /// The fill color of the bars.
    #[getset(get_copy = "pub")]
    color: Color,

    /// Where the axes are drawn.
    #[getset(get_copy = "pub")]
    plot_area: PlotArea,

    /// One bar per category, in category order.
    #[getset(get = "pub")]
    bars: Vec<Bar>,

    /// "0%" to "100%" along the y axis, bottom to top.
    #[getset(get = "pub")]
    y_ticks: Vec<Label>,

    /// The category index below each bar.
    #[getset(get = "pub")]
    x_ticks: Vec<Label>,

    /// Font of the tick labels.
    #[getset(get_copy = "pub")]
    tick_font: Font,

    /// Title, mean and variance, one per line.
    #[getset(get = "pub")]
    title_block: Label,

    /// Font of the title block.
    #[getset(get_copy = "pub")]
    title_font: Font,

    /// The moments shown in the title block.
    #[getset(get_copy = "pub")]
    stats: MomentSummary,
}

impl ChartDescription {
    /// The native rectangle covered by each bar, in category order.
    pub fn bar_rects(&self) -> impl Iterator<Item = Rect> + '_ {
        self.bars
            .iter()
            .map(|bar| self.plot_area.to_screen_rect(bar.x, 0.0, bar.width, bar.height))
    }
}

/// Lay out a bar chart of `values`, where a value of 1.0 spans the full height of the plot area.
///
/// # Arguments:
/// `values`: One fraction per category, e.g. the probabilities or the relative frequencies.
/// `title`: First line of the title block.
/// `color`: Fill color of the bars.
/// `stats`: The mean and variance printed below the title.
/// `config`: Canvas size, margin and typography.
///
/// # Errors:
/// `Error::InvalidChartValues` if `values` is empty or holds a negative or non-finite entry.
pub fn layout(
    values: &[f64],
    title: &str,
    color: Color,
    stats: MomentSummary,
    config: &ChartConfig,
) -> Result<ChartDescription> {
    if values.is_empty() || values.iter().any(|v| !v.is_finite() || *v < 0.0) {
        return Err(Error::InvalidChartValues);
    }

    let margin = config.margin();
    let canvas_height = config.canvas_height();
    let graph_width = config.graph_width();
    let graph_height = config.graph_height();
    let gap = config.bar_gap();
    let pitch = graph_width / values.len() as f64;
    let bar_width = (pitch - gap).max(0.0);

    let plot_area = PlotArea {
        origin: Point::new(margin, canvas_height - margin),
        width: graph_width,
        height: graph_height,
    };

    let bars = Vec::from_iter(values.iter().enumerate().map(|(i, value)| Bar {
        x: i as f64 * pitch,
        width: bar_width,
        height: value * graph_height,
    }));

    let y_ticks = Vec::from_iter((0..=Y_TICK_STEPS).map(|i| {
        let y = canvas_height - margin - i as f64 * graph_height / Y_TICK_STEPS as f64;
        Label {
            text: format!("{}%", i * 100 / Y_TICK_STEPS),
            position: Point::new(Y_TICK_LABEL_X, y - Y_TICK_LABEL_SHIFT),
        }
    }));

    let x_ticks = Vec::from_iter((0..values.len()).map(|i| Label {
        text: i.to_string(),
        position: Point::new(
            margin + i as f64 * pitch,
            canvas_height - margin + X_TICK_LABEL_OFFSET,
        ),
    }));

    let title_block = Label {
        text: format!(
            "{title}\nMean: {:.3}\nVariance: {:.3}",
            stats.mean(),
            stats.variance()
        ),
        position: Point::new(config.canvas_width() / 4.0, TITLE_TOP),
    };
    trace!("layout of '{title}' with {} bars of width {bar_width}", bars.len());

    Ok(ChartDescription::builder()
        .canvas_width(config.canvas_width())
        .canvas_height(canvas_height)
        .title(title.to_string())
        .color(color)
        .plot_area(plot_area)
        .bars(bars)
        .y_ticks(y_ticks)
        .x_ticks(x_ticks)
        .tick_font(Font {
            size: config.tick_font_size(),
            weight: FontWeight::Regular,
        })
        .title_block(title_block)
        .title_font(Font {
            size: config.title_font_size(),
            weight: FontWeight::Bold,
        })
        .stats(stats)
        .build())
}
