//! Error types for scripture model operations

use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum ScrModelError {
    #[error("Footnote not found: {0}")]
    FootnoteNotFound(Uuid),

    #[error("Paragraph not found: {0}")]
    ParagraphNotFound(Uuid),

    #[error("Index out of bounds: {index} (len {len})")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
}

pub type Result<T> = std::result::Result<T, ScrModelError>;
