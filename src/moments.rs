//! Theoretical and empirical moments of a categorical distribution,
//! where the category index itself is the value of an outcome.

use crate::{
    types::{MomentSummary, ObservationSequence, ProbabilityVector},
    welford_online::WelfordOnline,
};

/// The exact mean and (population) variance of the distribution.
///
/// `mean = Σ i * p_i` and `variance = Σ (i - mean)² * p_i`.
pub fn theoretical(probs: &ProbabilityVector) -> MomentSummary {
    let mean = probs
        .iter()
        .enumerate()
        .map(|(i, p)| i as f64 * p)
        .sum::<f64>();
    let variance = probs
        .iter()
        .enumerate()
        .map(|(i, p)| (i as f64 - mean).powi(2) * p)
        .sum::<f64>();

    MomentSummary::new(mean, variance)
}

/// The sample mean and unbiased sample variance of the observations,
/// accumulated in a single pass with `WelfordOnline`.
///
/// With fewer than two observations the variance is 0.
pub fn empirical(observations: &ObservationSequence) -> MomentSummary {
    observations
        .iter()
        .map(|obs| *obs as f64)
        .collect::<WelfordOnline>()
        .summary()
}
