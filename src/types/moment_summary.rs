use derive_more::Display;
use getset::CopyGetters;
use serde::{Deserialize, Serialize};

/// The first two moments of a distribution or of a sample.
#[derive(Debug, Clone, Copy, Default, PartialEq, Display, CopyGetters, Serialize, Deserialize)]
#[display("mean: {mean}, variance: {variance}")]
pub struct MomentSummary {
    /// The mean.
    #[getset(get_copy = "pub")]
    mean: f64,

    /// The variance.
    #[getset(get_copy = "pub")]
    variance: f64,
}

impl MomentSummary {
    /// Create a new instance.
    pub fn new(mean: f64, variance: f64) -> Self {
        Self { mean, variance }
    }

    /// The standard deviation.
    pub fn std_dev(&self) -> f64 {
        self.variance.sqrt()
    }
}
