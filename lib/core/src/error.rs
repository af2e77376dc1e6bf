use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Vector size mismatch: {left} vs {right}")]
    SizeMismatch { left: usize, right: usize },

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Ragged matrix: row {row} has length {actual}, expected {expected}")]
    RaggedMatrix {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Feature '{0}' has no numeric value")]
    NonNumericFeature(String),

    #[error("No sample in the result set carries '{0}'")]
    NoSuitableCategory(String),

    #[error("Result set is empty")]
    EmptyResultSet,

    #[error("Invalid probability: {0}% is outside 0-100")]
    InvalidProbability(f64),
}
