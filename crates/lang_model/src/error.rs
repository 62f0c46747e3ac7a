//! Error types for language model operations

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LangModelError {
    #[error("Writing system not in catalog: {0}")]
    UnknownWritingSystem(String),

    #[error("Writing system already active: {0}")]
    WritingSystemAlreadyActive(String),

    #[error("Cannot remove the last {list} writing system")]
    LastWritingSystem { list: &'static str },

    #[error("A translation with text must have a type")]
    TranslationTypeRequired,

    #[error("Unrecognized setting key: {0:?}")]
    UnrecognizedSettingKey(String),

    #[error("Invalid value for setting {key}: {value:?}")]
    InvalidSettingValue { key: String, value: String },
}

pub type Result<T> = std::result::Result<T, LangModelError>;
