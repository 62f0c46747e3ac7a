//! Section Model - a heading plus a run of content paragraphs
//!
//! Sections divide a book's text. Each section carries the reference bounds
//! of the scripture it spans; those bounds seed footnote resolution when a
//! backward scan finds no chapter or verse run (intro material, section
//! openings).

use crate::{BcvRef, ObjId, ScrParagraph};
use serde::{Deserialize, Serialize};

/// A section of a scripture book
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrSection {
    id: ObjId,
    /// Heading paragraphs (section title)
    pub heading: Vec<ScrParagraph>,
    /// Content paragraphs, in document order
    pub content: Vec<ScrParagraph>,
    /// Reference of the first scripture covered by this section
    pub start_ref: BcvRef,
    /// Reference of the last scripture covered by this section
    pub end_ref: BcvRef,
    /// Whether this is introduction material (before chapter 1)
    pub is_intro: bool,
}

impl ScrSection {
    /// Create a new empty section with the given reference bounds
    pub fn new(start_ref: BcvRef, end_ref: BcvRef) -> Self {
        Self {
            id: ObjId::new(),
            heading: Vec::new(),
            content: Vec::new(),
            start_ref,
            end_ref,
            is_intro: false,
        }
    }

    /// Create an introduction section for the given book
    pub fn intro(book: u32) -> Self {
        Self {
            id: ObjId::new(),
            heading: Vec::new(),
            content: Vec::new(),
            start_ref: BcvRef::new(book, 1, 0),
            end_ref: BcvRef::new(book, 1, 0),
            is_intro: true,
        }
    }

    /// Get the section ID
    pub fn id(&self) -> ObjId {
        self.id
    }

    /// Append a content paragraph, returning self for chained construction
    pub fn paragraph(mut self, para: ScrParagraph) -> Self {
        self.content.push(para);
        self
    }

    /// Check whether the section's bounds stay within one chapter.
    /// Only single-chapter sections may seed unknown footnote fields.
    pub fn covers_single_chapter(&self) -> bool {
        self.start_ref.chapter == self.end_ref.chapter
    }

    /// Find the index of a content paragraph by ID
    pub fn content_index(&self, para_id: ObjId) -> Option<usize> {
        self.content.iter().position(|p| p.id() == para_id)
    }
}
