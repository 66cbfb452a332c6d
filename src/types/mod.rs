mod errors;
mod frequency_table;
mod moment_summary;
mod observation_sequence;
mod probability_vector;

pub use errors::*;
pub use frequency_table::FrequencyTable;
pub use moment_summary::MomentSummary;
pub use observation_sequence::ObservationSequence;
pub use probability_vector::{ProbabilityVector, SUM_TOLERANCE};
