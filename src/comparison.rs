use getset::{CopyGetters, Getters};
use rand::Rng;
use serde::Serialize;
use tracing::debug;

use crate::{
    chart::{ChartDescription, Color, DrawingSurface, layout, render},
    config::{ChartConfig, SimulationConfig},
    distribution_generator::generate,
    moments::{empirical, theoretical},
    sampler::sample,
    types::{FrequencyTable, MomentSummary, ObservationSequence, ProbabilityVector, Result},
};

/// Title of the chart showing the relative frequencies of the sample.
pub const EMPIRICAL_TITLE: &str = "Empirical Distribution";
/// Title of the chart showing the generated probabilities.
pub const THEORETICAL_TITLE: &str = "Theoretical Distribution";
/// Bar color of the empirical chart.
pub const EMPIRICAL_COLOR: Color = Color::ROYAL_BLUE;
/// Bar color of the theoretical chart.
pub const THEORETICAL_COLOR: Color = Color::CRIMSON;

/// One complete run: a generated distribution, a sample drawn from it,
/// the moments of both and a chart for each.
#[derive(Debug, Clone, PartialEq, Getters, CopyGetters, Serialize)]
pub struct Comparison {
    /// The generated distribution.
    #[getset(get = "pub")]
    probabilities: ProbabilityVector,

    /// How often each category was drawn.
    #[getset(get = "pub")]
    frequencies: FrequencyTable,

    /// The draws in order.
    #[getset(get = "pub")]
    observations: ObservationSequence,

    /// Moments computed from `probabilities`.
    #[getset(get_copy = "pub")]
    theoretical: MomentSummary,

    /// Moments estimated from `observations`.
    #[getset(get_copy = "pub")]
    empirical: MomentSummary,

    /// Bar chart of the relative frequencies.
    #[getset(get = "pub")]
    empirical_chart: ChartDescription,

    /// Bar chart of the probabilities.
    #[getset(get = "pub")]
    theoretical_chart: ChartDescription,
}

impl Comparison {
    /// Generate a distribution with `simulation.categories()` categories, draw
    /// `simulation.sample_size()` observations from it and lay out both charts.
    pub fn run<R>(simulation: &SimulationConfig, chart: &ChartConfig, rng: &mut R) -> Result<Self>
    where
        R: Rng + ?Sized,
    {
        let probabilities = generate(simulation.categories(), rng)?;
        Self::run_with(probabilities, simulation.sample_size(), chart, rng)
    }

    /// Like `run`, seeded from the thread local rng so every call differs.
    pub fn run_with_thread_rng(simulation: &SimulationConfig, chart: &ChartConfig) -> Result<Self> {
        Self::run(simulation, chart, &mut rand::rng())
    }

    /// Sample from a given distribution instead of generating one.
    pub fn run_with<R>(
        probabilities: ProbabilityVector,
        sample_size: usize,
        chart: &ChartConfig,
        rng: &mut R,
    ) -> Result<Self>
    where
        R: Rng + ?Sized,
    {
        let (frequencies, observations) = sample(&probabilities, sample_size, rng);

        let theoretical = theoretical(&probabilities);
        let empirical = empirical(&observations);
        debug!("theoretical {theoretical}, empirical {empirical}, n = {sample_size}");

        let empirical_chart = layout(
            &frequencies.ratios(),
            EMPIRICAL_TITLE,
            EMPIRICAL_COLOR,
            empirical,
            chart,
        )?;
        let theoretical_chart = layout(
            &probabilities,
            THEORETICAL_TITLE,
            THEORETICAL_COLOR,
            theoretical,
            chart,
        )?;

        Ok(Self {
            probabilities,
            frequencies,
            observations,
            theoretical,
            empirical,
            empirical_chart,
            theoretical_chart,
        })
    }

    /// Draw both charts, each onto its own surface.
    pub fn render<E, T>(&self, empirical_surface: &mut E, theoretical_surface: &mut T)
    where
        E: DrawingSurface + ?Sized,
        T: DrawingSurface + ?Sized,
    {
        render(&self.empirical_chart, empirical_surface);
        render(&self.theoretical_chart, theoretical_surface);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{chart::DrawCommand, utils::tests::seeded_rng};

    #[test]
    fn comparison_run() {
        let simulation = SimulationConfig::new(500, 6).unwrap();
        let comparison =
            Comparison::run(&simulation, &ChartConfig::default(), &mut seeded_rng(5)).unwrap();

        assert_eq!(comparison.probabilities().categories(), 6);
        assert_eq!(comparison.frequencies().total(), 500);
        assert_eq!(comparison.observations().len(), 500);
        assert_eq!(comparison.empirical_chart().title(), EMPIRICAL_TITLE);
        assert_eq!(comparison.empirical_chart().color(), EMPIRICAL_COLOR);
        assert_eq!(comparison.theoretical_chart().title(), THEORETICAL_TITLE);
        assert_eq!(comparison.theoretical_chart().color(), THEORETICAL_COLOR);
        assert_eq!(comparison.empirical_chart().bars().len(), 6);
        assert_eq!(comparison.empirical_chart().stats(), comparison.empirical());
        assert_eq!(
            comparison.theoretical_chart().stats(),
            comparison.theoretical()
        );
    }

    #[test]
    fn comparison_is_reproducible_with_seed() {
        let simulation = SimulationConfig::new(100, 4).unwrap();
        let chart = ChartConfig::default();
        assert_eq!(
            Comparison::run(&simulation, &chart, &mut seeded_rng(11)).unwrap(),
            Comparison::run(&simulation, &chart, &mut seeded_rng(11)).unwrap()
        );
    }

    #[test]
    fn comparison_empty_sample() {
        let simulation = SimulationConfig::new(0, 3).unwrap();
        let comparison =
            Comparison::run(&simulation, &ChartConfig::default(), &mut seeded_rng(0)).unwrap();
        assert_eq!(comparison.empirical(), MomentSummary::new(0.0, 0.0));
        assert!(
            comparison
                .empirical_chart()
                .bars()
                .iter()
                .all(|bar| bar.height == 0.0)
        );
    }

    #[test]
    fn comparison_with_thread_rng() {
        let simulation = SimulationConfig::new(10, 2).unwrap();
        let comparison =
            Comparison::run_with_thread_rng(&simulation, &ChartConfig::default()).unwrap();
        assert_eq!(comparison.frequencies().total(), 10);
    }

    #[test]
    fn comparison_render() {
        let probs = ProbabilityVector::new(vec![0.5, 0.5]).unwrap();
        let comparison =
            Comparison::run_with(probs, 10, &ChartConfig::default(), &mut seeded_rng(2)).unwrap();
        let mut empirical = Vec::<DrawCommand>::new();
        let mut theoretical = Vec::<DrawCommand>::new();
        comparison.render(&mut empirical, &mut theoretical);
        assert_eq!(empirical.len(), 1 + 2 + 2 + 11 + 2 + 1);
        assert_eq!(theoretical.len(), empirical.len());
        assert!(theoretical.contains(&DrawCommand::Text {
            text: "Theoretical Distribution\nMean: 0.500\nVariance: 0.250".to_string(),
            position: crate::chart::Point::new(100.0, 10.0),
            font: comparison.theoretical_chart().title_font(),
            color: Color::BLACK,
        }));
    }
}
