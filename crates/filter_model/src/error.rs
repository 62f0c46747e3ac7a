//! Error types for filter operations

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    #[error("Empty criteria text")]
    EmptyCriteria,

    #[error("Unrecognized operator: {0:?}")]
    UnrecognizedOperator(String),

    #[error("Invalid number in criteria: {0:?}")]
    InvalidNumber(String),

    #[error("Invalid item reference in criteria: {0:?}")]
    InvalidReference(String),

    #[error("Unexpected trailing text in criteria: {0:?}")]
    TrailingText(String),
}

pub type Result<T> = std::result::Result<T, FilterError>;
