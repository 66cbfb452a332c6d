//! Synthesizes random categorical distributions.

use rand::Rng;
use tracing::trace;

use crate::types::{Error, ProbabilityVector, Result};

/// Every category but the last takes at most this share of the remaining mass,
/// which keeps the first categories from swallowing almost all of it.
pub const DAMPING_FACTOR: f64 = 0.9;

/// Generate a random `ProbabilityVector` with `categories` entries.
///
/// Category `i < K - 1` receives `u * remaining * DAMPING_FACTOR` with `u ~ U[0, 1)`,
/// the last category receives whatever mass is left,
/// so the masses always sum to 1.0 up to rounding.
///
/// # Errors:
/// `Error::InvalidCategoryCount` if `categories == 0`.
pub fn generate<R>(categories: usize, rng: &mut R) -> Result<ProbabilityVector>
where
    R: Rng + ?Sized,
{
    if categories == 0 {
        return Err(Error::InvalidCategoryCount);
    }

    let mut probabilities = Vec::with_capacity(categories);
    let mut remaining = 1.0;
    for _ in 0..categories - 1 {
        let p = rng.random::<f64>() * remaining * DAMPING_FACTOR;
        probabilities.push(p);
        remaining -= p;
    }
    probabilities.push(remaining);
    trace!("generated distribution over {categories} categories: {probabilities:?}");

    ProbabilityVector::new(probabilities)
}
