//! Book Model - sections, the ordered footnote sequence, and object lookup
//!
//! A book owns its sections and footnotes exclusively. The footnote sequence
//! is ordered by anchor position in the text; footnotes are looked up by the
//! object ID their anchor runs embed.

use crate::{Footnote, ObjId, Result, ScrModelError, ScrParagraph, ScrSection};
use serde::{Deserialize, Serialize};

/// Position of a paragraph within a book: (section index, content index)
pub type ParaPosition = (usize, usize);

/// A scripture book
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrBook {
    id: ObjId,
    /// Canonical book number (1-based)
    pub book_num: u32,
    /// Book name for display
    pub name: String,
    /// Sections in document order
    pub sections: Vec<ScrSection>,
    /// Footnotes in anchor order
    footnotes: Vec<Footnote>,
    /// Whether this book is an archived saved-version copy. Anchors into
    /// archived books cannot be ordered against live content.
    pub archived: bool,
}

impl ScrBook {
    /// Create a new empty book
    pub fn new(book_num: u32, name: impl Into<String>) -> Self {
        Self {
            id: ObjId::new(),
            book_num,
            name: name.into(),
            sections: Vec::new(),
            footnotes: Vec::new(),
            archived: false,
        }
    }

    /// Get the book ID
    pub fn id(&self) -> ObjId {
        self.id
    }

    /// Append a section, returning self for chained construction
    pub fn section(mut self, section: ScrSection) -> Self {
        self.sections.push(section);
        self
    }

    // -------------------------------------------------------------------------
    // Footnote operations
    // -------------------------------------------------------------------------

    /// Get the footnote sequence in anchor order
    pub fn footnotes(&self) -> &[Footnote] {
        &self.footnotes
    }

    /// Look up a footnote by ID
    pub fn footnote(&self, id: ObjId) -> Option<&Footnote> {
        self.footnotes.iter().find(|f| f.id() == id)
    }

    /// Look up a mutable footnote by ID
    pub fn footnote_mut(&mut self, id: ObjId) -> Option<&mut Footnote> {
        self.footnotes.iter_mut().find(|f| f.id() == id)
    }

    /// Get a footnote's index in the ordered sequence
    pub fn footnote_index(&self, id: ObjId) -> Option<usize> {
        self.footnotes.iter().position(|f| f.id() == id)
    }

    /// Append a footnote to the sequence
    pub fn add_footnote(&mut self, footnote: Footnote) -> ObjId {
        let id = footnote.id();
        self.footnotes.push(footnote);
        id
    }

    /// Insert a footnote at the given sequence index
    pub fn insert_footnote(&mut self, index: usize, footnote: Footnote) -> Result<ObjId> {
        if index > self.footnotes.len() {
            return Err(ScrModelError::IndexOutOfBounds {
                index,
                len: self.footnotes.len(),
            });
        }
        let id = footnote.id();
        self.footnotes.insert(index, footnote);
        Ok(id)
    }

    /// Remove a footnote. Its anchor run is stripped from the anchoring
    /// paragraph so no dangling marker remains in body text.
    pub fn remove_footnote(&mut self, id: ObjId) -> Result<Footnote> {
        let index = self
            .footnote_index(id)
            .ok_or_else(|| ScrModelError::FootnoteNotFound(id.as_uuid()))?;
        let footnote = self.footnotes.remove(index);

        if let Some(para_id) = footnote.anchor_para {
            if let Some(para) = self.paragraph_mut(para_id) {
                if let Some(run_index) = para.embedded_run_index(id) {
                    para.remove_run(run_index);
                }
            }
        }

        Ok(footnote)
    }

    /// Drop every footnote's cached range (structural edit invalidation)
    pub fn clear_resolved_ranges(&mut self) {
        for footnote in &mut self.footnotes {
            footnote.clear_resolved_range();
        }
    }

    // -------------------------------------------------------------------------
    // Paragraph lookup
    // -------------------------------------------------------------------------

    /// Find a content paragraph's (section index, paragraph index) position
    pub fn find_paragraph(&self, para_id: ObjId) -> Option<ParaPosition> {
        self.sections.iter().enumerate().find_map(|(s, section)| {
            section.content_index(para_id).map(|p| (s, p))
        })
    }

    /// Get a content paragraph by ID
    pub fn paragraph(&self, para_id: ObjId) -> Option<&ScrParagraph> {
        let (s, p) = self.find_paragraph(para_id)?;
        Some(&self.sections[s].content[p])
    }

    /// Get a mutable content paragraph by ID
    pub fn paragraph_mut(&mut self, para_id: ObjId) -> Option<&mut ScrParagraph> {
        let (s, p) = self.find_paragraph(para_id)?;
        Some(&mut self.sections[s].content[p])
    }
}

// =============================================================================
// Tests
// =============================================================================
