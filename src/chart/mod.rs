//! Describing bar charts independent of any drawing backend, and drawing them.

mod geometry;
mod layout;
mod surface;

pub use geometry::*;
pub use layout::{Bar, ChartDescription, Label, layout};
pub use surface::{DrawCommand, DrawingSurface, render};
