//! Footnote Model
//!
//! A footnote belongs to a book's ordered footnote sequence and is anchored
//! in body text by an embedded-object run. It carries:
//!
//! - A marker type (none, auto-lettered, or a literal symbol)
//! - A back-reference to the paragraph containing its anchor run
//! - Content paragraphs
//! - The lazily computed chapter:verse range it refers to, cached until the
//!   owning book is structurally edited

use crate::{ObjId, RefRange, ScrParagraph};
use serde::{Deserialize, Serialize};

// =============================================================================
// Marker Type
// =============================================================================

/// How a footnote's marker is rendered in body text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FootnoteMarker {
    /// No visible marker
    None,
    /// Automatic sequential letter: a, b, ..., z, aa, ab, ...
    Auto,
    /// A literal marker symbol (e.g. "*", "+")
    Symbolic(String),
}

impl Default for FootnoteMarker {
    fn default() -> Self {
        FootnoteMarker::Auto
    }
}

impl FootnoteMarker {
    /// Format the marker for a footnote at the given 0-based ordinal in its
    /// book's footnote sequence. Returns None when no marker is shown.
    pub fn format(&self, ordinal: usize) -> Option<String> {
        match self {
            FootnoteMarker::None => None,
            FootnoteMarker::Auto => Some(Self::to_letter(ordinal as u32 + 1)),
            FootnoteMarker::Symbolic(s) => Some(s.clone()),
        }
    }

    /// Convert a number to a letter sequence (a=1, b=2, ..., z=26, aa=27, ...)
    fn to_letter(n: u32) -> String {
        if n == 0 {
            return String::new();
        }

        let mut n = n;
        let mut result = String::new();

        while n > 0 {
            n -= 1;
            let c = b'a' + (n % 26) as u8;
            result.insert(0, c as char);
            n /= 26;
        }

        result
    }
}

// =============================================================================
// Footnote
// =============================================================================

/// A footnote owned in sequence by a scripture book
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Footnote {
    id: ObjId,
    /// Marker rendering for this footnote
    pub marker: FootnoteMarker,
    /// The paragraph containing this footnote's anchor run, if still present
    pub anchor_para: Option<ObjId>,
    /// Content paragraphs of the footnote
    pub paragraphs: Vec<ScrParagraph>,
    /// Cached chapter:verse range; None until resolved
    resolved: Option<RefRange>,
}

impl Footnote {
    /// Create a new footnote with the default (auto) marker
    pub fn new() -> Self {
        Self {
            id: ObjId::new(),
            marker: FootnoteMarker::default(),
            anchor_para: None,
            paragraphs: Vec::new(),
            resolved: None,
        }
    }

    /// Create a footnote with an explicit marker type
    pub fn with_marker(marker: FootnoteMarker) -> Self {
        Self {
            id: ObjId::new(),
            marker,
            anchor_para: None,
            paragraphs: Vec::new(),
            resolved: None,
        }
    }

    /// Get the footnote ID
    pub fn id(&self) -> ObjId {
        self.id
    }

    /// Get the cached range, if resolved
    pub fn resolved_range(&self) -> Option<RefRange> {
        self.resolved
    }

    /// Check whether the range has been resolved
    pub fn is_resolved(&self) -> bool {
        self.resolved.is_some()
    }

    /// Store a resolved range. The whole range is written at once; a reader
    /// holding a shared borrow can never observe a partial update.
    pub fn set_resolved_range(&mut self, range: RefRange) {
        self.resolved = Some(range);
    }

    /// Drop the cached range (structural edit invalidation)
    pub fn clear_resolved_range(&mut self) {
        self.resolved = None;
    }
}

impl Default for Footnote {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tests
// =============================================================================
