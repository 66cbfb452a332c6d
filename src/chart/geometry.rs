use derive_more::Display;
use serde::{Deserialize, Serialize};

/// A position, either in native canvas coordinates (origin top-left, Y down)
/// or in plot coordinates (origin bottom-left of the plot area, Y up).
#[derive(Debug, Clone, Copy, Default, PartialEq, Display, Serialize, Deserialize)]
#[display("({x}, {y})")]
#[allow(missing_docs, reason = "Self explanatory")]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new instance.
    #[inline(always)]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis aligned rectangle in native canvas coordinates, `(x, y)` is its top-left corner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[allow(missing_docs, reason = "Self explanatory")]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display("#{r:02X}{g:02X}{b:02X}")]
#[allow(missing_docs, reason = "Self explanatory")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    #[allow(missing_docs, reason = "Named colors")]
    pub const WHITE: Self = Self::new(255, 255, 255);
    #[allow(missing_docs, reason = "Named colors")]
    pub const BLACK: Self = Self::new(0, 0, 0);
    #[allow(missing_docs, reason = "Named colors")]
    pub const ROYAL_BLUE: Self = Self::new(65, 105, 225);
    #[allow(missing_docs, reason = "Named colors")]
    pub const CRIMSON: Self = Self::new(220, 20, 60);

    /// Create a new instance.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Stroke weight of a font.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[allow(missing_docs, reason = "Self explanatory")]
pub enum FontWeight {
    Regular,
    Bold,
}

/// Font size and weight, the typeface is up to the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[allow(missing_docs, reason = "Self explanatory")]
pub struct Font {
    pub size: f64,
    pub weight: FontWeight,
}

/// Flip a plot y coordinate (Y up, 0 at the bottom of the plot area)
/// into a y offset from the top of the plot area (Y down).
#[inline(always)]
pub fn to_screen_y(graph_height: f64, y: f64) -> f64 {
    graph_height - y
}

/// The rectangle spanned by the two axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotArea {
    /// Where the axes meet, in native coordinates.
    pub origin: Point,
    /// Length of the x axis.
    pub width: f64,
    /// Length of the y axis.
    pub height: f64,
}

impl PlotArea {
    /// Map a point from plot coordinates into native coordinates.
    pub fn to_screen(&self, p: Point) -> Point {
        let top = self.origin.y - self.height;
        Point::new(self.origin.x + p.x, top + to_screen_y(self.height, p.y))
    }

    /// Map a rectangle standing on plot coordinate `(x, y)` with the given extent
    /// into a native rectangle.
    pub fn to_screen_rect(&self, x: f64, y: f64, width: f64, height: f64) -> Rect {
        let top_left = self.to_screen(Point::new(x, y + height));
        Rect {
            x: top_left.x,
            y: top_left.y,
            width,
            height,
        }
    }
}
