/// An error with the configuration.
#[derive(thiserror::Error, Debug, Clone, Copy, Eq, PartialEq)]
#[allow(missing_docs, reason = "The error messages are the documentation")]
pub enum ConfigError {
    #[error("The number of categories must be > 0")]
    InvalidCategoryCount,

    #[error("The canvas must leave a plot area of positive width and height after subtracting the margins")]
    InvalidCanvas,

    #[error("The margin must be finite and >= 0")]
    InvalidMargin,

    #[error("The gap between bars must be finite and >= 0")]
    InvalidBarGap,

    #[error("Font sizes must be finite and > 0")]
    InvalidFontSize,
}
