use derive_more::Deref;
use serde::Serialize;

/// How many observations fell into each category, index aligned with the
/// `ProbabilityVector` they were drawn from.
#[derive(Debug, Clone, PartialEq, Eq, Deref, Serialize)]
#[deref(forward)]
pub struct FrequencyTable(Vec<u64>);

impl FrequencyTable {
    /// A table of `categories` zero counts.
    pub(crate) fn zeroed(categories: usize) -> Self {
        Self(vec![0; categories])
    }

    /// Record one observation of `category`.
    #[inline(always)]
    pub(crate) fn increment(&mut self, category: usize) {
        self.0[category] += 1;
    }

    /// The raw counts.
    #[inline(always)]
    pub fn counts(&self) -> &[u64] {
        &self.0
    }

    /// The number of categories.
    #[inline(always)]
    pub fn categories(&self) -> usize {
        self.0.len()
    }

    /// The total number of observations recorded.
    pub fn total(&self) -> u64 {
        self.0.iter().sum()
    }

    /// The relative frequency of each category, `count / total`.
    /// All zeros when nothing was recorded.
    pub fn ratios(&self) -> Vec<f64> {
        let total = self.total();
        if total == 0 {
            return vec![0.0; self.0.len()];
        }
        let total = total as f64;
        self.0.iter().map(|count| *count as f64 / total).collect()
    }
}
