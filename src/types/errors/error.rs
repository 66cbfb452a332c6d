/// Describes possible Errors that may occur when calling methods in this crate
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[allow(missing_docs, reason = "The error messages are the documentation")]
pub enum Error {
    #[error("A categorical distribution needs at least one category")]
    InvalidCategoryCount,

    #[error("The probability vector is empty")]
    EmptyProbabilities,

    #[error("Probability at index {index} is {value}, it must be finite and >= 0")]
    InvalidProbability { index: usize, value: f64 },

    #[error("The probabilities sum to {sum}, expected 1.0")]
    ProbabilitiesDoNotSumToOne { sum: f64 },

    #[error("Observation {index} is out of range for {categories} categories")]
    CategoryOutOfRange { index: usize, categories: usize },

    #[error("Chart values must be non-empty, finite and >= 0")]
    InvalidChartValues,
}

/// Shorthand for a `Result` with the crate `Error`.
pub type Result<T, E = Error> = std::result::Result<T, E>;
