use derive_more::Deref;
use serde::{Deserialize, Serialize};

use super::{Error, Result};

/// How far the sum of a `ProbabilityVector` may stray from 1.0.
pub const SUM_TOLERANCE: f64 = 1e-9;

/// The probability masses of a categorical distribution over the labels `0..K`.
///
/// Always holds at least one category, every mass is finite and >= 0,
/// and the masses sum to 1.0 within `SUM_TOLERANCE`.
#[derive(Debug, Clone, PartialEq, Deref, Serialize, Deserialize)]
#[deref(forward)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct ProbabilityVector(Vec<f64>);

impl ProbabilityVector {
    /// Create a new instance, validating the probability masses.
    pub fn new(probabilities: Vec<f64>) -> Result<Self> {
        if probabilities.is_empty() {
            return Err(Error::EmptyProbabilities);
        }
        if let Some((index, value)) = probabilities
            .iter()
            .enumerate()
            .find(|(_, p)| !p.is_finite() || **p < 0.0)
        {
            return Err(Error::InvalidProbability {
                index,
                value: *value,
            });
        }
        let sum = probabilities.iter().sum::<f64>();
        if (sum - 1.0).abs() > SUM_TOLERANCE {
            return Err(Error::ProbabilitiesDoNotSumToOne { sum });
        }

        Ok(Self(probabilities))
    }

    /// The number of categories `K`.
    #[inline(always)]
    pub fn categories(&self) -> usize {
        self.0.len()
    }

    /// The probability masses in category order.
    #[inline(always)]
    pub fn probabilities(&self) -> &[f64] {
        &self.0
    }

    /// Consume `self`, returning the raw masses.
    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }
}

impl TryFrom<Vec<f64>> for ProbabilityVector {
    type Error = Error;

    fn try_from(value: Vec<f64>) -> Result<Self> {
        Self::new(value)
    }
}

impl From<ProbabilityVector> for Vec<f64> {
    fn from(value: ProbabilityVector) -> Self {
        value.0
    }
}
