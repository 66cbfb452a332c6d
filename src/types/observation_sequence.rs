use derive_more::Deref;
use serde::Serialize;

use super::{Error, Result};

/// The raw category indices of a sample, in the order they were drawn.
/// Built only by `sample` or the range checked `new`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deref, Serialize)]
#[deref(forward)]
pub struct ObservationSequence(Vec<usize>);

impl ObservationSequence {
    /// Wrap externally produced observations, checking that each index is below `categories`.
    pub fn new(observations: Vec<usize>, categories: usize) -> Result<Self> {
        if let Some(index) = observations.iter().find(|obs| **obs >= categories) {
            return Err(Error::CategoryOutOfRange {
                index: *index,
                categories,
            });
        }
        Ok(Self(observations))
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    #[inline(always)]
    pub(crate) fn push(&mut self, category: usize) {
        self.0.push(category);
    }

    /// The observations in draw order.
    #[inline(always)]
    pub fn observations(&self) -> &[usize] {
        &self.0
    }
}
