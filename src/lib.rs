#![doc = include_str!("../README.md")]

//! catsim - compare a random categorical distribution with a sample drawn from it

pub mod chart;
mod comparison;
mod config;
pub mod distribution_generator;
pub mod moments;
pub mod sampler;
mod types;
mod utils;
mod welford_online;

/// Exports common types
pub mod prelude {
    pub use crate::{
        chart::{
            Bar, ChartDescription, Color, DrawCommand, DrawingSurface, Font, FontWeight, Label,
            PlotArea, Point, Rect, layout, render, to_screen_y,
        },
        comparison::{
            Comparison, EMPIRICAL_COLOR, EMPIRICAL_TITLE, THEORETICAL_COLOR, THEORETICAL_TITLE,
        },
        config::{ChartConfig, SimulationConfig},
        distribution_generator::{DAMPING_FACTOR, generate},
        moments::{empirical, theoretical},
        sampler::{draw_one, sample},
        types::*,
        welford_online::WelfordOnline,
    };
}
