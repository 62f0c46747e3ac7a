//! Text run - a contiguous span of paragraph text with a named style
//!
//! Runs are the read-only view of a paragraph's rich text content. A run may
//! carry a named character style (chapter numbers and verse numbers are
//! recognized by style name) and may embed an object reference - an inline
//! marker pointing at a footnote or picture owned elsewhere in the book.

use crate::ObjId;
use serde::{Deserialize, Serialize};

/// Well-known character style names
pub mod style_names {
    /// Style applied to chapter-number runs
    pub const CHAPTER_NUMBER: &str = "Chapter Number";
    /// Style applied to verse-number runs
    pub const VERSE_NUMBER: &str = "Verse Number";
    /// Style applied to footnote marker runs in body text
    pub const NOTE_MARKER: &str = "Note Marker";
}

/// The object replacement character used as the text of an embedded-object run
pub const ORC: char = '\u{FFFC}';

/// A text run - contiguous text with a consistent named style and an
/// optional embedded object reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextRun {
    /// The text content of this run
    pub text: String,
    /// Named character style, if any
    pub style: Option<String>,
    /// Embedded object reference (footnote, picture, ...), if any
    pub embedded: Option<ObjId>,
}

impl TextRun {
    /// Create a plain run with text content
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: None,
            embedded: None,
        }
    }

    /// Create a run with text and a named style
    pub fn with_style(text: impl Into<String>, style: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: Some(style.into()),
            embedded: None,
        }
    }

    /// Create a chapter-number run
    pub fn chapter_number(text: impl Into<String>) -> Self {
        Self::with_style(text, style_names::CHAPTER_NUMBER)
    }

    /// Create a verse-number run
    pub fn verse_number(text: impl Into<String>) -> Self {
        Self::with_style(text, style_names::VERSE_NUMBER)
    }

    /// Create an embedded-object run for the given object
    pub fn embedded_object(id: ObjId) -> Self {
        Self {
            text: ORC.to_string(),
            style: Some(style_names::NOTE_MARKER.to_string()),
            embedded: Some(id),
        }
    }

    /// Check whether this run carries the given named style
    pub fn has_style(&self, name: &str) -> bool {
        self.style.as_deref() == Some(name)
    }

    /// Check whether this is a chapter-number run
    pub fn is_chapter_number(&self) -> bool {
        self.has_style(style_names::CHAPTER_NUMBER)
    }

    /// Check whether this is a verse-number run
    pub fn is_verse_number(&self) -> bool {
        self.has_style(style_names::VERSE_NUMBER)
    }

    /// Get the length of the text in this run (in UTF-8 bytes)
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if this run is empty
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the number of grapheme clusters in this run
    pub fn grapheme_count(&self) -> usize {
        use unicode_segmentation::UnicodeSegmentation;
        self.text.graphemes(true).count()
    }
}
