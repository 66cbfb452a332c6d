use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{ChartDescription, Color, Font, Point, Rect};

/// A canvas that can be drawn onto, in native coordinates
/// (origin at the top-left corner, Y increasing downward).
pub trait DrawingSurface {
    /// Fill the whole canvas with `color`.
    fn clear(&mut self, color: Color);

    /// Draw a one unit wide line segment.
    fn draw_line(&mut self, from: Point, to: Point, color: Color);

    /// Fill an axis aligned rectangle.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Draw `text` with its top-left corner at `position`.
    /// Lines are separated by `\n`.
    fn draw_text(&mut self, text: &str, position: Point, font: Font, color: Color);
}

/// A single call made on a `DrawingSurface`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[allow(missing_docs, reason = "Mirrors the `DrawingSurface` methods")]
pub enum DrawCommand {
    Clear(Color),
    Line {
        from: Point,
        to: Point,
        color: Color,
    },
    FillRect {
        rect: Rect,
        color: Color,
    },
    Text {
        text: String,
        position: Point,
        font: Font,
        color: Color,
    },
}

/// Records every call, useful for testing and for replaying onto another backend.
impl DrawingSurface for Vec<DrawCommand> {
    fn clear(&mut self, color: Color) {
        self.push(DrawCommand::Clear(color));
    }

    fn draw_line(&mut self, from: Point, to: Point, color: Color) {
        self.push(DrawCommand::Line { from, to, color });
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.push(DrawCommand::FillRect { rect, color });
    }

    fn draw_text(&mut self, text: &str, position: Point, font: Font, color: Color) {
        self.push(DrawCommand::Text {
            text: text.to_string(),
            position,
            font,
            color,
        });
    }
}

/// Draw `chart` onto `surface`: background, axes, bars, tick labels and finally the title block.
pub fn render<S>(chart: &ChartDescription, surface: &mut S)
where
    S: DrawingSurface + ?Sized,
{
    debug!("render '{}' with {} bars", chart.title(), chart.bars().len());
    surface.clear(chart.background());

    let area = chart.plot_area();
    let origin = area.to_screen(Point::new(0.0, 0.0));
    surface.draw_line(
        origin,
        area.to_screen(Point::new(area.width, 0.0)),
        Color::BLACK,
    );
    surface.draw_line(
        origin,
        area.to_screen(Point::new(0.0, area.height)),
        Color::BLACK,
    );

    for rect in chart.bar_rects() {
        surface.fill_rect(rect, chart.color());
    }

    let tick_font = chart.tick_font();
    for label in chart.y_ticks().iter().chain(chart.x_ticks()) {
        surface.draw_text(&label.text, label.position, tick_font, Color::BLACK);
    }

    let title_block = chart.title_block();
    surface.draw_text(
        &title_block.text,
        title_block.position,
        chart.title_font(),
        Color::BLACK,
    );
}
