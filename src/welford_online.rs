use crate::types::MomentSummary;

/// Welford online algorithm for estimating mean and variance
#[derive(Debug, Clone, Default)]
pub struct WelfordOnline {
    count: u64,
    mean: f64,
    m2: f64,
}

impl WelfordOnline {
    /// Create a new WelfordOnline struct
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of values added so far.
    #[inline(always)]
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Return the estimated mean, 0 if no value was added.
    #[inline(always)]
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Return the estimated (sample) variance.
    /// With fewer than two values the variance is undefined and 0 is returned.
    pub fn variance(&self) -> f64 {
        if self.count > 1 {
            return self.m2 / (self.count - 1) as f64;
        }
        0.0
    }

    /// Return the standard deviation
    pub fn std_dev(&self) -> f64 {
        self.variance().sqrt()
    }

    /// Add a new value to update the estimates
    pub fn add(&mut self, val: f64) {
        self.count += 1;
        let delta = val - self.mean;
        self.mean += delta / self.count as f64;
        self.m2 += delta * (val - self.mean);
    }

    /// The current estimates as a `MomentSummary`.
    pub fn summary(&self) -> MomentSummary {
        MomentSummary::new(self.mean, self.variance())
    }
}

impl Extend<f64> for WelfordOnline {
    fn extend<T: IntoIterator<Item = f64>>(&mut self, iter: T) {
        iter.into_iter().for_each(|val| self.add(val));
    }
}

impl FromIterator<f64> for WelfordOnline {
    fn from_iter<T: IntoIterator<Item = f64>>(iter: T) -> Self {
        let mut welford = Self::new();
        welford.extend(iter);
        welford
    }
}
