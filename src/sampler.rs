//! Inverse-CDF sampling from a categorical distribution.

use rand::{Rng, distr::Distribution};
use tracing::{debug, trace};

use crate::types::{FrequencyTable, ObservationSequence, ProbabilityVector};

/// Draw a single category by walking the cumulative sum of `probs`
/// until it reaches a uniform value `r ~ U[0, 1)`.
///
/// When rounding leaves the cumulative sum just below `r`, the draw
/// is attributed to the last category.
pub fn draw_one<R>(probs: &ProbabilityVector, rng: &mut R) -> usize
where
    R: Rng + ?Sized,
{
    let r = rng.random::<f64>();
    let mut cumulative = 0.0;
    for (category, p) in probs.iter().enumerate() {
        cumulative += p;
        if r <= cumulative {
            return category;
        }
    }

    let last = probs.categories() - 1;
    debug!("unresolved draw: r = {r} exceeds cumulative sum {cumulative}, attributing to category {last}");
    last
}

impl Distribution<usize> for ProbabilityVector {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        draw_one(self, rng)
    }
}

/// Draw `n` i.i.d. observations from `probs`.
///
/// # Returns:
/// The per-category counts and the raw observations in draw order.
/// The counts always sum to `n`.
pub fn sample<R>(
    probs: &ProbabilityVector,
    n: usize,
    rng: &mut R,
) -> (FrequencyTable, ObservationSequence)
where
    R: Rng + ?Sized,
{
    let mut frequencies = FrequencyTable::zeroed(probs.categories());
    let mut observations = ObservationSequence::with_capacity(n);

    for _ in 0..n {
        let category = draw_one(probs, rng);
        frequencies.increment(category);
        observations.push(category);
    }
    assert2::debug_assert!(frequencies.total() == n as u64);
    trace!("sampled {n} observations, frequencies: {:?}", frequencies.counts());

    (frequencies, observations)
}
